//! Command result DTOs, shared by the text and JSON renderers. JSON field
//! names are camelCase like the scanned records they embed.

use crate::types::{CourseSummary, DepartmentSummary, MaterialGroup};
use crate::views::files::FileRow;
use crate::views::{FilterOption, MaterialQuery};
use serde::Serialize;

/// Result of `vault root`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootOutput {
    pub data_root: String,
    pub exists: bool,
}

/// Result of `vault departments`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentsOutput {
    pub departments: Vec<DepartmentSummary>,
    pub total: usize,
}

/// Result of `vault courses`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesOutput {
    pub department: String,
    pub display_name: String,
    pub courses: Vec<CourseSummary>,
    pub total: usize,
}

/// Result of `vault materials`: the filtered listing plus the filter choices
/// available over the whole department.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsOutput {
    pub department: String,
    pub display_name: String,
    pub query: MaterialQuery,
    pub results: Vec<MaterialGroup>,
    pub total: usize,
    pub course_options: Vec<FilterOption>,
    pub type_options: Vec<String>,
}

/// Result of `vault files`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesOutput {
    pub department: String,
    pub course: String,
    pub instructor: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub files: Vec<FileRow>,
    pub total: usize,
}
