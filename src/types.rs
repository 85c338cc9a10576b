//! Core record types produced by the scanner.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of a filesystem object as seen by the enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One immediate child of an enumerated directory.
///
/// `size` and `extension` are only ever populated for files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl FileEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Aggregate record for one department/course/instructor/type leaf directory.
///
/// The four keys are raw directory names; the display names are resolved from
/// sidecar metadata when the group is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialGroup {
    pub department: String,
    pub course: String,
    pub instructor: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub files: Vec<FileEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_display_name: Option<String>,
}

impl MaterialGroup {
    /// Course label, falling back to the raw key.
    pub fn course_label(&self) -> &str {
        self.course_display_name.as_deref().unwrap_or(&self.course)
    }

    /// Instructor label, falling back to the raw key.
    pub fn instructor_label(&self) -> &str {
        self.instructor_display_name
            .as_deref()
            .unwrap_or(&self.instructor)
    }

    /// Type label, falling back to the raw key.
    pub fn type_label(&self) -> &str {
        self.type_display_name
            .as_deref()
            .unwrap_or(&self.material_type)
    }

    /// Site-relative link to the leaf page for this group.
    pub fn href(&self) -> String {
        format!(
            "/{}/{}/{}/{}/",
            self.department, self.course, self.instructor, self.material_type
        )
    }
}

/// Department key paired with its resolved labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub key: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farsi_name: Option<String>,
}

/// Course key paired with its resolved labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub key: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
