//! Hierarchy scanner
//!
//! Walks the fixed `department/course/instructor/type/<files>` layout below the
//! data root and produces one [`MaterialGroup`] per leaf directory. Every call
//! re-resolves the data root and re-reads the tree and sidecar documents;
//! nothing is cached. Every operation returns a possibly empty result and
//! never fails. Keys that would leave the data root (`..`, separators,
//! absolute paths) select nothing.

use crate::metadata::{
    self, display_name, CourseRecord, DepartmentRecord, InstructorRecord, Mapping, TypeRecord,
};
use crate::tree::{is_child_key, list_directory, list_subdirectories, RootLocator};
use crate::types::{CourseSummary, DepartmentSummary, FileEntry, MaterialGroup};
use std::path::{Path, PathBuf};

/// Read-only view over a material tree.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    locator: RootLocator,
}

impl Scanner {
    /// Scanner rooted at a fixed directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            locator: RootLocator::Fixed(root.into()),
        }
    }

    pub fn with_locator(locator: RootLocator) -> Self {
        Self { locator }
    }

    /// Data root as resolved for this call.
    pub fn data_root(&self) -> PathBuf {
        self.locator.resolve()
    }

    /// Department keys: subdirectories of the data root.
    pub fn departments(&self) -> Vec<String> {
        let root = self.data_root();
        if !root.exists() {
            tracing::warn!("Data directory not found: {}", root.display());
            return Vec::new();
        }
        list_subdirectories(&root)
    }

    /// Departments with labels from `dept.json`.
    pub fn department_summaries(&self) -> Vec<DepartmentSummary> {
        let root = self.data_root();
        let mapping = metadata::load_departments(&root);
        self.departments()
            .into_iter()
            .map(|key| {
                let farsi_name = mapping.get(&key).and_then(|r| r.farsi_name.clone());
                DepartmentSummary {
                    display_name: display_name(&key, &mapping),
                    farsi_name,
                    key,
                }
            })
            .collect()
    }

    /// Course keys of one department.
    pub fn department_courses(&self, department: &str) -> Vec<String> {
        if !keys_are_children(&[department]) {
            return Vec::new();
        }
        let dept_path = self.data_root().join(department);
        if !dept_path.exists() {
            return Vec::new();
        }
        list_subdirectories(&dept_path)
    }

    /// Courses of one department with labels from its `course.json`.
    pub fn course_summaries(&self, department: &str) -> Vec<CourseSummary> {
        let mapping = self.course_metadata(department);
        self.department_courses(department)
            .into_iter()
            .map(|key| {
                let code = mapping.get(&key).and_then(|r| r.code.clone());
                CourseSummary {
                    display_name: display_name(&key, &mapping),
                    code,
                    key,
                }
            })
            .collect()
    }

    /// All material groups of one department, in name order at every level.
    ///
    /// Sidecar documents are loaded once per call. Course, instructor and type
    /// directories without subdirectories contribute nothing; unreadable
    /// subtrees are logged by the enumerator and contribute nothing.
    pub fn department_materials(&self, department: &str) -> Vec<MaterialGroup> {
        if !keys_are_children(&[department]) {
            return Vec::new();
        }
        let root = self.data_root();
        let dept_path = root.join(department);
        if !dept_path.exists() {
            return Vec::new();
        }

        let labels = Labels {
            courses: metadata::load_courses(&root, department),
            instructors: metadata::load_instructors(&root, department),
            types: metadata::load_types(&root),
        };

        let mut materials = Vec::new();
        for course in list_subdirectories(&dept_path) {
            let course_path = dept_path.join(&course);
            for instructor in list_subdirectories(&course_path) {
                let instructor_path = course_path.join(&instructor);
                for material_type in list_subdirectories(&instructor_path) {
                    let files = list_directory(&instructor_path.join(&material_type));
                    materials.push(labels.group(
                        department,
                        &course,
                        &instructor,
                        &material_type,
                        files,
                    ));
                }
            }
        }

        tracing::debug!(
            department,
            groups = materials.len(),
            "Scanned department materials"
        );
        materials
    }

    /// Entries of one leaf directory.
    pub fn materials_at_path(
        &self,
        department: &str,
        course: &str,
        instructor: &str,
        material_type: &str,
    ) -> Vec<FileEntry> {
        if !keys_are_children(&[department, course, instructor, material_type]) {
            return Vec::new();
        }
        list_directory(&leaf_path(
            &self.data_root(),
            department,
            course,
            instructor,
            material_type,
        ))
    }

    pub fn department_metadata(&self) -> Mapping<DepartmentRecord> {
        metadata::load_departments(&self.data_root())
    }

    pub fn type_metadata(&self) -> Mapping<TypeRecord> {
        metadata::load_types(&self.data_root())
    }

    pub fn course_metadata(&self, department: &str) -> Mapping<CourseRecord> {
        if !keys_are_children(&[department]) {
            return Mapping::new();
        }
        metadata::load_courses(&self.data_root(), department)
    }

    pub fn instructor_metadata(&self, department: &str) -> Mapping<InstructorRecord> {
        if !keys_are_children(&[department]) {
            return Mapping::new();
        }
        metadata::load_instructors(&self.data_root(), department)
    }

    pub fn department_display_name(&self, department: &str) -> String {
        display_name(department, &self.department_metadata())
    }

    pub fn course_display_name(&self, department: &str, course: &str) -> String {
        display_name(course, &self.course_metadata(department))
    }

    pub fn instructor_display_name(&self, department: &str, instructor: &str) -> String {
        display_name(instructor, &self.instructor_metadata(department))
    }

    pub fn type_display_name(&self, material_type: &str) -> String {
        display_name(material_type, &self.type_metadata())
    }
}

fn keys_are_children(keys: &[&str]) -> bool {
    match keys.iter().find(|key| !is_child_key(key)) {
        Some(bad) => {
            tracing::warn!("Ignoring key outside the data root: {:?}", bad);
            false
        }
        None => true,
    }
}

/// Path of a leaf directory below `root`.
pub fn leaf_path(
    root: &Path,
    department: &str,
    course: &str,
    instructor: &str,
    material_type: &str,
) -> PathBuf {
    root.join(department)
        .join(course)
        .join(instructor)
        .join(material_type)
}

/// Sidecar mappings for one department scan.
struct Labels {
    courses: Mapping<CourseRecord>,
    instructors: Mapping<InstructorRecord>,
    types: Mapping<TypeRecord>,
}

impl Labels {
    fn group(
        &self,
        department: &str,
        course: &str,
        instructor: &str,
        material_type: &str,
        files: Vec<FileEntry>,
    ) -> MaterialGroup {
        MaterialGroup {
            department: department.to_string(),
            course: course.to_string(),
            instructor: instructor.to_string(),
            material_type: material_type.to_string(),
            files,
            course_display_name: Some(display_name(course, &self.courses)),
            instructor_display_name: Some(display_name(instructor, &self.instructors)),
            type_display_name: Some(display_name(material_type, &self.types)),
        }
    }
}
