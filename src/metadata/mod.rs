//! Sidecar metadata
//!
//! Optional JSON documents that attach display labels to the raw directory
//! keys of each hierarchy level:
//!
//! ```text
//! <data-root>/dept.json                  department key -> DepartmentRecord
//! <data-root>/type.json                  type key       -> TypeRecord
//! <data-root>/<dept>/course.json         course key     -> CourseRecord
//! <data-root>/<dept>/instructor.json     instructor key -> InstructorRecord
//! ```
//!
//! Every document is optional and re-read on each load.

pub mod display;
pub mod loader;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub use display::{display_name, humanize_key};
pub use loader::{load_mapping, parse_mapping};

/// Key to record mapping for one scope.
pub type Mapping<R> = BTreeMap<String, R>;

/// A record type stored in a sidecar document.
pub trait SidecarRecord: DeserializeOwned {
    /// Well-known file name at the scope directory.
    const FILE_NAME: &'static str;

    /// Explicit display name, if the record carries one.
    fn display_name(&self) -> Option<&str>;

    /// Label used when no non-empty display name is mapped for `key`.
    fn fallback_name(key: &str) -> String {
        humanize_key(key)
    }
}

/// Entry of `dept.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepartmentRecord {
    pub display_name: Option<String>,
    pub farsi_name: Option<String>,
    pub aliases: Vec<String>,
}

impl SidecarRecord for DepartmentRecord {
    const FILE_NAME: &'static str = "dept.json";

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn fallback_name(key: &str) -> String {
        key.to_uppercase()
    }
}

/// Entry of `<dept>/course.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseRecord {
    pub display_name: Option<String>,
    pub farsi_name: Option<String>,
    pub code: Option<String>,
    pub aliases: Vec<String>,
}

impl SidecarRecord for CourseRecord {
    const FILE_NAME: &'static str = "course.json";

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// Entry of `<dept>/instructor.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstructorRecord {
    pub display_name: Option<String>,
    pub farsi_name: Option<String>,
    pub email: Option<String>,
    pub web: Option<String>,
}

impl SidecarRecord for InstructorRecord {
    const FILE_NAME: &'static str = "instructor.json";

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// Entry of `type.json`.
///
/// Unmapped types are labelled with the literal `etc` rather than a label
/// derived from the key, unlike every other scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeRecord {
    pub display_name: Option<String>,
    pub description: Option<String>,
}

impl SidecarRecord for TypeRecord {
    const FILE_NAME: &'static str = "type.json";

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn fallback_name(_key: &str) -> String {
        "etc".to_string()
    }
}

/// Department mapping stored at the data root.
pub fn load_departments(data_root: &Path) -> Mapping<DepartmentRecord> {
    load_mapping(data_root)
}

/// Type mapping stored at the data root.
pub fn load_types(data_root: &Path) -> Mapping<TypeRecord> {
    load_mapping(data_root)
}

/// Course mapping stored in a department directory.
pub fn load_courses(data_root: &Path, department: &str) -> Mapping<CourseRecord> {
    load_mapping(&data_root.join(department))
}

/// Instructor mapping stored in a department directory.
pub fn load_instructors(data_root: &Path, department: &str) -> Mapping<InstructorRecord> {
    load_mapping(&data_root.join(department))
}
