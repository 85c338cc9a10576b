use cessa_vault::types::EntryKind;
use cessa_vault::Scanner;

use crate::support::{sample_tree, DataTree};

#[test]
fn full_tree_yields_one_group_per_leaf() {
    let tree = sample_tree();
    let groups = Scanner::at(tree.root()).department_materials("cs");

    let keys: Vec<(&str, &str, &str)> = groups
        .iter()
        .map(|g| (g.course.as_str(), g.instructor.as_str(), g.material_type.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("ds", "smith", "exams"),
            ("ds", "smith", "slides"),
            ("os", "jones", "slides"),
            ("os", "jones", "videos"),
        ]
    );
}

#[test]
fn sidecar_names_and_fallbacks_are_applied() {
    let tree = sample_tree();
    let groups = Scanner::at(tree.root()).department_materials("cs");

    let ds_slides = &groups[1];
    assert_eq!(ds_slides.course_display_name.as_deref(), Some("Data Structures"));
    assert_eq!(ds_slides.instructor_display_name.as_deref(), Some("Dr. Smith"));
    assert_eq!(ds_slides.type_display_name.as_deref(), Some("Lecture Slides"));

    let os_videos = &groups[3];
    assert_eq!(os_videos.course_display_name.as_deref(), Some("Os"));
    assert_eq!(os_videos.instructor_display_name.as_deref(), Some("Jones"));
    assert_eq!(os_videos.type_display_name.as_deref(), Some("etc"));
    assert!(os_videos.files.is_empty());
}

#[test]
fn leaf_files_carry_size_and_extension() {
    let tree = sample_tree();
    let groups = Scanner::at(tree.root()).department_materials("cs");

    let files = &groups[1].files;
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["lec1.pdf", "notes.docx"]);
    assert_eq!(files[0].size, Some(1536));
    assert_eq!(files[0].extension.as_deref(), Some(".pdf"));
    assert_eq!(files[0].kind, EntryKind::File);
}

#[test]
fn subdirectories_inside_a_leaf_are_listed_without_size() {
    let tree = DataTree::new();
    tree.file("cs/ds/smith/slides/a.pdf", 1);
    tree.dir("cs/ds/smith/slides/extra");

    let groups = Scanner::at(tree.root()).department_materials("cs");
    let extra = groups[0]
        .files
        .iter()
        .find(|f| f.name == "extra")
        .unwrap();
    assert_eq!(extra.kind, EntryKind::Directory);
    assert_eq!(extra.size, None);
    assert_eq!(extra.extension, None);
}

#[test]
fn repeated_scans_are_identical() {
    let tree = sample_tree();
    let scanner = Scanner::at(tree.root());
    assert_eq!(
        scanner.department_materials("cs"),
        scanner.department_materials("cs")
    );
}

#[test]
fn unknown_department_is_empty() {
    let tree = sample_tree();
    assert!(Scanner::at(tree.root()).department_materials("math").is_empty());
}

#[test]
fn malformed_type_sidecar_falls_back_to_etc() {
    let tree = sample_tree();
    tree.sidecar("type.json", "{ not json");
    let groups = Scanner::at(tree.root()).department_materials("cs");
    assert_eq!(groups.len(), 4);
    assert!(groups
        .iter()
        .all(|g| g.type_display_name.as_deref() == Some("etc")));
}

#[test]
fn department_listing_uses_sidecar_or_upper_case() {
    let tree = sample_tree();
    tree.dir("math");
    let summaries = Scanner::at(tree.root()).department_summaries();
    let names: Vec<(&str, &str)> = summaries
        .iter()
        .map(|s| (s.key.as_str(), s.display_name.as_str()))
        .collect();
    assert_eq!(names, vec![("cs", "Computer Science"), ("math", "MATH")]);
}
