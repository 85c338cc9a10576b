use cessa_vault::config::VaultConfig;
use cessa_vault::tooling::cli::{CliContext, Commands};
use serde_json::Value;

use crate::support::sample_tree;

fn context(root: &std::path::Path) -> CliContext {
    CliContext::from_config(root, VaultConfig::default(), Some(root.to_path_buf()))
}

fn materials(department: &str, search: Option<&str>, format: &str) -> Commands {
    Commands::Materials {
        department: department.to_string(),
        search: search.map(str::to_string),
        course: None,
        material_type: None,
        sort: "course".to_string(),
        format: format.to_string(),
    }
}

fn json(output: &str) -> Value {
    serde_json::from_str(output).unwrap()
}

#[test]
fn departments_json_contract() {
    let tree = sample_tree();
    let output = context(tree.root())
        .execute(&Commands::Departments {
            format: "json".to_string(),
        })
        .unwrap();
    let value = json(&output);
    assert_eq!(value["total"], 1);
    assert_eq!(value["departments"][0]["key"], "cs");
    assert_eq!(value["departments"][0]["displayName"], "Computer Science");
}

#[test]
fn materials_json_contract() {
    let tree = sample_tree();
    let output = context(tree.root())
        .execute(&materials("cs", None, "json"))
        .unwrap();
    let value = json(&output);
    assert_eq!(value["department"], "cs");
    assert_eq!(value["displayName"], "Computer Science");
    assert_eq!(value["total"], 4);

    let first = &value["results"][0];
    assert_eq!(first["course"], "ds");
    assert_eq!(first["type"], "exams");
    assert_eq!(first["courseDisplayName"], "Data Structures");
    assert_eq!(first["files"][0]["name"], "final.png");
    assert_eq!(first["files"][0]["type"], "file");

    let course_keys: Vec<&str> = value["courseOptions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["key"].as_str().unwrap())
        .collect();
    assert_eq!(course_keys, vec!["ds", "os"]);
    assert!(value.get("course_options").is_none());
}

#[test]
fn materials_json_echoes_query_with_type_field() {
    let tree = sample_tree();
    let output = context(tree.root())
        .execute(&Commands::Materials {
            department: "cs".to_string(),
            search: None,
            course: None,
            material_type: Some("slides".to_string()),
            sort: "instructor".to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    let value = json(&output);
    assert_eq!(value["query"]["type"], "slides");
    assert_eq!(value["query"]["sortBy"], "instructor");
    assert!(value["query"].get("material_type").is_none());
    assert_eq!(value["total"], 2);
}

#[test]
fn materials_search_matches_display_names() {
    let tree = sample_tree();
    let output = context(tree.root())
        .execute(&materials("cs", Some("DR. SMITH"), "json"))
        .unwrap();
    let value = json(&output);
    assert_eq!(value["total"], 2);
    // Options still cover the whole department.
    assert_eq!(value["typeOptions"].as_array().unwrap().len(), 3);
}

#[test]
fn materials_text_reports_empty_result() {
    let tree = sample_tree();
    let output = context(tree.root())
        .execute(&materials("cs", Some("no such thing"), "text"))
        .unwrap();
    assert!(output.contains("0 results found"));
    assert!(output.contains("No materials found."));
}

#[test]
fn files_json_contract() {
    let tree = sample_tree();
    let output = context(tree.root())
        .execute(&Commands::Files {
            department: "cs".to_string(),
            course: "ds".to_string(),
            instructor: "smith".to_string(),
            material_type: "slides".to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    let value = json(&output);
    assert_eq!(value["type"], "slides");
    assert_eq!(value["total"], 2);
    assert_eq!(value["instructor"], "smith");

    let pdf = &value["files"][0];
    assert_eq!(pdf["name"], "lec1.pdf");
    assert_eq!(pdf["sizeLabel"], "1.5 KB");
    assert_eq!(pdf["capability"]["action"], "view");
    assert_eq!(pdf["url"], "/data/cs/ds/smith/slides/lec1.pdf");

    let docx = &value["files"][1];
    assert_eq!(docx["capability"]["action"], "download_only");
}

#[test]
fn files_text_for_missing_leaf() {
    let tree = sample_tree();
    let output = context(tree.root())
        .execute(&Commands::Files {
            department: "cs".to_string(),
            course: "ds".to_string(),
            instructor: "nobody".to_string(),
            material_type: "slides".to_string(),
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("No files found in this location."));
}

#[test]
fn unknown_output_format_is_rejected() {
    let tree = sample_tree();
    let result = context(tree.root()).execute(&Commands::Departments {
        format: "xml".to_string(),
    });
    assert!(result.is_err());
}
