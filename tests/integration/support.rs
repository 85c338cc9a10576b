use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary data root populated file by file.
pub struct DataTree {
    pub temp: TempDir,
}

impl DataTree {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Create a leaf directory such as `cs/ds/smith/slides`.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write `bytes` zero bytes at `relative`, creating parents.
    pub fn file(&self, relative: &str, bytes: usize) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, vec![0u8; bytes]).unwrap();
        path
    }

    pub fn sidecar(&self, relative: &str, json: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, json).unwrap();
    }
}

/// Tree with two courses and sidecars for the `cs` department.
pub fn sample_tree() -> DataTree {
    let tree = DataTree::new();
    tree.file("cs/ds/smith/slides/lec1.pdf", 1536);
    tree.file("cs/ds/smith/slides/notes.docx", 10);
    tree.file("cs/ds/smith/exams/final.png", 2048);
    tree.file("cs/os/jones/slides/intro.pdf", 100);
    tree.dir("cs/os/jones/videos");
    tree.dir("cs/empty_course");
    tree.sidecar(
        "dept.json",
        r#"{"cs": {"displayName": "Computer Science", "farsiName": "علوم کامپیوتر"}}"#,
    );
    tree.sidecar(
        "type.json",
        r#"{"slides": {"displayName": "Lecture Slides"}}"#,
    );
    tree.sidecar(
        "cs/course.json",
        r#"{"ds": {"displayName": "Data Structures", "code": "CS201"}}"#,
    );
    tree.sidecar(
        "cs/instructor.json",
        r#"{"smith": {"displayName": "Dr. Smith"}}"#,
    );
    tree
}
