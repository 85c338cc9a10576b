//! Cessa Vault: read-only browser for academic material trees
//!
//! Materials live on disk as `department/course/instructor/type/<files>`
//! under a data root, with optional JSON sidecars giving human-readable
//! names. The scanner enumerates that tree, joins it with the sidecars and
//! produces flat material groups for listing, search and filtering.

pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod scanner;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;

pub use error::ApiError;
pub use scanner::Scanner;
