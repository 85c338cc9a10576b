//! Per-file presentation: size labels, inline-view capability, icon category
//! and the public URL a file is served under.

use crate::types::FileEntry;
use serde::Serialize;
use std::path::{Component, Path};

/// Public URL prefix the data root is served under.
pub const PUBLIC_DATA_PREFIX: &str = "/data";

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with 1024-based units, rounded to two decimals.
///
/// `0` → `"0 Bytes"`, `1536` → `"1.5 KB"`. Sizes past the largest unit stay
/// in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// How a viewable file is previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Pdf,
    Image,
}

/// What a reader can do with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "preview")]
pub enum FileCapability {
    /// Inline preview plus download.
    View(PreviewKind),
    DownloadOnly,
}

const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".svg", ".webp"];

/// Preview kind for an extension (with leading `.`), case-insensitive.
pub fn preview_kind(extension: Option<&str>) -> Option<PreviewKind> {
    let ext = extension?.to_ascii_lowercase();
    if ext == ".pdf" {
        Some(PreviewKind::Pdf)
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(PreviewKind::Image)
    } else {
        None
    }
}

pub fn is_viewable(extension: Option<&str>) -> bool {
    preview_kind(extension).is_some()
}

/// Capability of an entry; directories get none.
pub fn capability(entry: &FileEntry) -> Option<FileCapability> {
    if !entry.is_file() {
        return None;
    }
    Some(match preview_kind(entry.extension.as_deref()) {
        Some(kind) => FileCapability::View(kind),
        None => FileCapability::DownloadOnly,
    })
}

/// Icon family of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Folder,
    Pdf,
    Document,
    Presentation,
    Spreadsheet,
    Archive,
    Image,
    Video,
    Audio,
    Text,
    Code,
    Other,
}

impl FileCategory {
    pub fn from_extension(extension: Option<&str>) -> Self {
        let Some(ext) = extension else {
            return FileCategory::Folder;
        };
        match ext.to_ascii_lowercase().as_str() {
            ".pdf" => FileCategory::Pdf,
            ".doc" | ".docx" => FileCategory::Document,
            ".ppt" | ".pptx" => FileCategory::Presentation,
            ".xls" | ".xlsx" => FileCategory::Spreadsheet,
            ".zip" | ".rar" | ".7z" => FileCategory::Archive,
            ".jpg" | ".jpeg" | ".png" | ".gif" | ".svg" => FileCategory::Image,
            ".mp4" | ".avi" | ".mov" => FileCategory::Video,
            ".mp3" | ".wav" => FileCategory::Audio,
            ".txt" | ".md" => FileCategory::Text,
            ".py" | ".js" | ".java" | ".cpp" | ".c" => FileCategory::Code,
            _ => FileCategory::Other,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileCategory::Folder => "📁",
            FileCategory::Pdf | FileCategory::Other => "📄",
            FileCategory::Document => "📝",
            FileCategory::Presentation => "📊",
            FileCategory::Spreadsheet => "📈",
            FileCategory::Archive => "🗜️",
            FileCategory::Image => "🖼️",
            FileCategory::Video => "🎥",
            FileCategory::Audio => "🎵",
            FileCategory::Text => "📃",
            FileCategory::Code => "💻",
        }
    }
}

/// URL a file under `data_root` is served at: `/data/<relative path>`.
///
/// `None` when `path` is not below `data_root`.
pub fn public_url(data_root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(data_root).ok()?;
    let mut url = String::from(PUBLIC_DATA_PREFIX);
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                url.push('/');
                url.push_str(&name.to_string_lossy());
            }
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(url)
}

/// Presentation row for one leaf entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRow {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_label: Option<String>,
    pub category: FileCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability: Option<FileCapability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FileRow {
    pub fn new(entry: &FileEntry, data_root: &Path) -> Self {
        Self {
            name: entry.name.clone(),
            size: entry.size,
            size_label: entry.size.map(format_file_size),
            category: FileCategory::from_extension(entry.extension.as_deref()),
            capability: capability(entry),
            url: public_url(data_root, &entry.path),
        }
    }
}
