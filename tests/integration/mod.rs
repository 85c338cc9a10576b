//! Integration tests for the material scanner and the vault CLI

mod cli_contracts;
mod parse_matrix;
mod scanner_layout;
mod support;
