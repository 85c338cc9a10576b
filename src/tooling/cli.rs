//! CLI Tooling
//!
//! Command-line interface over the material scanner. Every command is a
//! read-only listing; output is rendered as text tables or JSON.

use crate::config::{ConfigLoader, VaultConfig};
use crate::error::ApiError;
use crate::scanner::Scanner;
use crate::tooling::format::{
    format_courses_text, format_departments_text, format_files_text, format_materials_text,
    format_root_text,
};
use crate::tooling::output::{
    CoursesOutput, DepartmentsOutput, FilesOutput, MaterialsOutput, RootOutput,
};
use crate::tree::is_child_key;
use crate::views::files::FileRow;
use crate::views::{course_options, type_options, MaterialQuery, SortKey};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Cessa Vault CLI - browse department/course/instructor/type material trees
#[derive(Parser, Debug)]
#[command(name = "vault")]
#[command(about = "Browse department/course/instructor/type material trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data root directory (skips data root discovery)
    #[arg(long, global = true)]
    pub data_root: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the resolved data root
    Root {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List departments
    Departments {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the courses of a department
    Courses {
        /// Department key
        department: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the material groups of a department
    Materials {
        /// Department key
        department: String,
        /// Case-insensitive search over course, instructor and type
        #[arg(long)]
        search: Option<String>,
        /// Only show this course key
        #[arg(long)]
        course: Option<String>,
        /// Only show this type key
        #[arg(long = "type", value_name = "TYPE")]
        material_type: Option<String>,
        /// Sort by course, instructor or type
        #[arg(long, default_value = "course")]
        sort: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the files of one leaf directory
    Files {
        /// Department key
        department: String,
        /// Course key
        course: String,
        /// Instructor key
        instructor: String,
        /// Type key
        #[arg(value_name = "TYPE")]
        material_type: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the effective configuration
    Config {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

/// Output format of listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_output_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::InvalidArgument(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// Reject tree keys that are not a single directory name.
fn validate_keys(keys: &[(&str, &str)]) -> Result<(), ApiError> {
    for (label, key) in keys {
        if !is_child_key(key) {
            return Err(ApiError::InvalidArgument(format!(
                "Invalid {} key: {:?} (must be a single directory name)",
                label, key
            )));
        }
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render<T, F>(value: &T, format: &str, text: F) -> Result<String, ApiError>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match parse_output_format(format)? {
        OutputFormat::Json => to_json(value),
        OutputFormat::Text => Ok(text(value)),
    }
}

/// Load configuration from an explicit file or the standard layers.
pub fn load_config(
    workspace_root: &Path,
    config_path: Option<&Path>,
) -> Result<VaultConfig, ApiError> {
    match config_path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(workspace_root),
    }
}

/// CLI context holding the scanner and effective configuration
pub struct CliContext {
    scanner: Scanner,
    config: VaultConfig,
}

impl CliContext {
    /// Create a CLI context from already loaded configuration.
    ///
    /// `data_root` wins over `data.root` from configuration. Relative roots
    /// are taken relative to `workspace_root`.
    pub fn from_config(
        workspace_root: &Path,
        mut config: VaultConfig,
        data_root: Option<PathBuf>,
    ) -> Self {
        if let Some(root) = data_root {
            config.data.root = Some(root);
        }
        if let Some(root) = config.data.root.take() {
            config.data.root = Some(if root.is_relative() {
                workspace_root.join(root)
            } else {
                root
            });
        }
        let scanner = Scanner::with_locator(config.data.locator());
        Self { scanner, config }
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        tracing::debug!(command = command_name(command), "Executing command");
        match command {
            Commands::Root { format } => self.handle_root(format),
            Commands::Departments { format } => self.handle_departments(format),
            Commands::Courses { department, format } => {
                self.handle_courses(department, format)
            }
            Commands::Materials {
                department,
                search,
                course,
                material_type,
                sort,
                format,
            } => {
                let sort_by: SortKey = sort.parse().map_err(ApiError::InvalidArgument)?;
                let query = MaterialQuery {
                    search: search.clone(),
                    course: course.clone(),
                    material_type: material_type.clone(),
                    sort_by,
                };
                self.handle_materials(department, query, format)
            }
            Commands::Files {
                department,
                course,
                instructor,
                material_type,
                format,
            } => self.handle_files(department, course, instructor, material_type, format),
            Commands::Config { format } => self.handle_config(format),
        }
    }

    fn handle_root(&self, format: &str) -> Result<String, ApiError> {
        let root = self.scanner.data_root();
        let result = RootOutput {
            exists: root.exists(),
            data_root: root.display().to_string(),
        };
        render(&result, format, format_root_text)
    }

    fn handle_departments(&self, format: &str) -> Result<String, ApiError> {
        let departments = self.scanner.department_summaries();
        let result = DepartmentsOutput {
            total: departments.len(),
            departments,
        };
        render(&result, format, format_departments_text)
    }

    fn handle_courses(&self, department: &str, format: &str) -> Result<String, ApiError> {
        validate_keys(&[("department", department)])?;
        let courses = self.scanner.course_summaries(department);
        let result = CoursesOutput {
            department: department.to_string(),
            display_name: self.scanner.department_display_name(department),
            total: courses.len(),
            courses,
        };
        render(&result, format, format_courses_text)
    }

    fn handle_materials(
        &self,
        department: &str,
        query: MaterialQuery,
        format: &str,
    ) -> Result<String, ApiError> {
        validate_keys(&[("department", department)])?;
        let materials = self.scanner.department_materials(department);
        let results = query.apply(&materials);
        let result = MaterialsOutput {
            department: department.to_string(),
            display_name: self.scanner.department_display_name(department),
            total: results.len(),
            course_options: course_options(&materials),
            type_options: type_options(&materials),
            query,
            results,
        };
        render(&result, format, format_materials_text)
    }

    fn handle_files(
        &self,
        department: &str,
        course: &str,
        instructor: &str,
        material_type: &str,
        format: &str,
    ) -> Result<String, ApiError> {
        validate_keys(&[
            ("department", department),
            ("course", course),
            ("instructor", instructor),
            ("type", material_type),
        ])?;
        let data_root = self.scanner.data_root();
        let files: Vec<FileRow> = self
            .scanner
            .materials_at_path(department, course, instructor, material_type)
            .iter()
            .map(|entry| FileRow::new(entry, &data_root))
            .collect();
        let result = FilesOutput {
            department: department.to_string(),
            course: course.to_string(),
            instructor: instructor.to_string(),
            material_type: material_type.to_string(),
            total: files.len(),
            files,
        };
        render(&result, format, format_files_text)
    }

    fn handle_config(&self, format: &str) -> Result<String, ApiError> {
        match format {
            "toml" => Ok(toml::to_string_pretty(&self.config)?),
            "json" => to_json(&self.config),
            other => Err(ApiError::InvalidArgument(format!(
                "Invalid format: {} (must be 'toml' or 'json')",
                other
            ))),
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Root { .. } => "root",
        Commands::Departments { .. } => "departments",
        Commands::Courses { .. } => "courses",
        Commands::Materials { .. } => "materials",
        Commands::Files { .. } => "files",
        Commands::Config { .. } => "config",
    }
}
