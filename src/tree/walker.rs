//! Single-level directory enumeration.

use crate::tree::collate;
use crate::types::{EntryKind, FileEntry};
use std::path::Path;
use walkdir::WalkDir;

/// Extension of a file name: the substring from the last `.` inclusive.
///
/// `None` when the name contains no `.`.
pub fn extension_of(name: &str) -> Option<String> {
    name.rfind('.').map(|idx| name[idx..].to_string())
}

/// List the immediate children of `path`, sorted by name.
///
/// A missing directory yields an empty listing. An unreadable directory is
/// logged and yields an empty listing; an unreadable entry is logged and
/// skipped. Never fails.
pub fn list_directory(path: &Path) -> Vec<FileEntry> {
    if !path.exists() {
        return Vec::new();
    }

    if let Err(e) = std::fs::read_dir(path) {
        tracing::warn!("Failed to read directory {}: {}", path.display(), e);
        return Vec::new();
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(
                    "Failed to read directory entry in {}: {}",
                    path.display(),
                    e
                );
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let entry_path = entry.path().to_path_buf();

        if entry.file_type().is_dir() {
            entries.push(FileEntry {
                name,
                path: entry_path,
                kind: EntryKind::Directory,
                size: None,
                extension: None,
            });
            continue;
        }

        // Symlinks are classified by their target; broken or looping links are skipped.
        let meta = match std::fs::metadata(&entry_path) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::warn!("Failed to stat {}: {}", entry_path.display(), e);
                continue;
            }
        };
        if meta.is_dir() {
            entries.push(FileEntry {
                name,
                path: entry_path,
                kind: EntryKind::Directory,
                size: None,
                extension: None,
            });
            continue;
        }
        let size = meta.len();
        let extension = extension_of(&name);
        entries.push(FileEntry {
            name,
            path: entry_path,
            kind: EntryKind::File,
            size: Some(size),
            extension,
        });
    }

    collate::sort_by_name(&mut entries, |e| e.name.as_str());
    entries
}

/// Names of the subdirectories of `path`, in listing order.
pub fn list_subdirectories(path: &Path) -> Vec<String> {
    list_directory(path)
        .into_iter()
        .filter(FileEntry::is_dir)
        .map(|e| e.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(list_directory(&temp.path().join("nope")).is_empty());
    }

    #[test]
    fn test_lists_children_sorted_and_classified() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.pdf"), vec![0u8; 10]).unwrap();
        fs::write(temp.path().join("A.txt"), "hi").unwrap();
        fs::create_dir(temp.path().join("c")).unwrap();

        let entries = list_directory(temp.path());
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A.txt", "b.pdf", "c"]);

        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].size, Some(2));
        assert_eq!(entries[0].extension.as_deref(), Some(".txt"));
        assert_eq!(entries[1].size, Some(10));
        assert_eq!(entries[1].path, temp.path().join("b.pdf"));

        assert_eq!(entries[2].kind, EntryKind::Directory);
        assert_eq!(entries[2].size, None);
        assert_eq!(entries[2].extension, None);
    }

    #[test]
    fn test_does_not_recurse() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("outer/inner")).unwrap();
        fs::write(temp.path().join("outer/inner/deep.txt"), "x").unwrap();

        let entries = list_directory(temp.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "outer");
    }

    #[test]
    fn test_extension_rules() {
        assert_eq!(extension_of("lec1.pdf").as_deref(), Some(".pdf"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some(".gz"));
        assert_eq!(extension_of("Makefile"), None);
        assert_eq!(extension_of("trailing.").as_deref(), Some("."));
    }

    #[test]
    fn test_file_without_dot_has_no_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README"), "x").unwrap();
        let entries = list_directory(temp.path());
        assert_eq!(entries[0].extension, None);
        assert_eq!(entries[0].size, Some(1));
    }

    #[test]
    fn test_subdirectories_only() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("ds")).unwrap();
        fs::create_dir(temp.path().join("algo")).unwrap();
        fs::write(temp.path().join("course.json"), "{}").unwrap();

        assert_eq!(list_subdirectories(temp.path()), vec!["algo", "ds"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_is_skipped() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.pdf"), "a").unwrap();
        symlink(temp.path().join("gone.pdf"), temp.path().join("b.pdf")).unwrap();
        fs::write(temp.path().join("c.pdf"), "c").unwrap();

        let names: Vec<String> = list_directory(temp.path())
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_skipped() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        symlink(temp.path().join("loop"), temp.path().join("loop")).unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let entries = list_directory(temp.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "notes.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_a_directory() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        symlink(temp.path().join("real"), temp.path().join("linked")).unwrap();

        assert_eq!(list_subdirectories(temp.path()), vec!["linked", "real"]);
    }

    #[test]
    fn test_file_path_is_empty_listing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        assert!(list_directory(&file).is_empty());
    }
}
