//! Format command results as human-readable text.

use crate::tooling::output::{
    CoursesOutput, DepartmentsOutput, FilesOutput, MaterialsOutput, RootOutput,
};
use crate::views::files::{FileCapability, FileRow};
use crate::views::results_summary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(header);
    table
}

/// "N file(s)".
pub fn file_count_label(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}

pub fn format_root_text(data: &RootOutput) -> String {
    let exists = if data.exists { "yes" } else { "no" };
    format!("Data root: {}\nExists: {}", data.data_root, exists)
}

pub fn format_departments_text(data: &DepartmentsOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Departments")));
    if data.departments.is_empty() {
        out.push_str("No departments found.\n");
        return out;
    }
    let mut table = new_table(vec!["Key", "Name", "Farsi"]);
    for row in &data.departments {
        table.add_row(vec![
            row.key.clone(),
            row.display_name.clone(),
            row.farsi_name.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} department(s).\n", data.total));
    out
}

pub fn format_courses_text(data: &CoursesOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("{} courses", data.display_name))
    ));
    if data.courses.is_empty() {
        out.push_str("No courses found.\n");
        return out;
    }
    let mut table = new_table(vec!["Key", "Name", "Code"]);
    for row in &data.courses {
        table.add_row(vec![
            row.key.clone(),
            row.display_name.clone(),
            row.code.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} course(s).\n", data.total));
    out
}

pub fn format_materials_text(data: &MaterialsOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("{} materials", data.display_name))
    ));
    out.push_str(&format!("{}\n\n", results_summary(data.total)));
    if data.results.is_empty() {
        out.push_str("No materials found.\n");
        return out;
    }
    let mut table = new_table(vec!["Course", "Instructor", "Type", "Files", "Link"]);
    for group in &data.results {
        table.add_row(vec![
            group.course_label().to_string(),
            group.instructor_label().to_string(),
            group.type_label().to_string(),
            file_count_label(group.files.len()),
            group.href(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

fn actions_label(row: &FileRow) -> &'static str {
    match row.capability {
        Some(FileCapability::View(_)) => "View, Download",
        Some(FileCapability::DownloadOnly) => "Download",
        None => "-",
    }
}

pub fn format_files_text(data: &FilesOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!(
            "{} / {} / {} / {}",
            data.department, data.course, data.instructor, data.material_type
        ))
    ));
    if data.files.is_empty() {
        out.push_str("No files found in this location.\n");
        return out;
    }
    let mut table = new_table(vec!["", "Name", "Size", "Actions", "URL"]);
    for row in &data.files {
        table.add_row(vec![
            row.category.icon().to_string(),
            row.name.clone(),
            row.size_label.clone().unwrap_or_default(),
            actions_label(row).to_string(),
            row.url.clone().unwrap_or_default(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {}.\n", file_count_label(data.total)));
    out
}
