//! Filesystem access: data root discovery, directory enumeration, and the
//! ordering used for every listing.

pub mod collate;
pub mod root;
pub mod walker;

pub use root::{is_child_key, resolve_data_root, resolve_data_root_from, RootLocator};
pub use walker::{list_directory, list_subdirectories};
