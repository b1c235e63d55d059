// src/filesystem/file.rs
use chrono::{DateTime, Local, Utc};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
    pub is_hidden: bool,
    pub extension: Option<String>,
}

impl FileEntry {
    pub fn from_path(path: &Path) -> Option<Self> {
        let metadata = std::fs::metadata(path).ok()?;
        let name = path.file_name()?.to_string_lossy().to_string();
        let is_dir = metadata.is_dir();
        let size = metadata.len();
        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);
        let is_hidden = name.starts_with('.');
        let extension = path.extension().map(|e| e.to_string_lossy().to_string());

        Some(FileEntry {
            name,
            path: path.to_path_buf(),
            is_dir,
            size,
            modified,
            is_hidden,
            extension,
        })
    }

    /// One row of the open dialog: name, size and local modification time.
    pub fn label(&self) -> String {
        let when = self
            .modified
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        if self.is_dir {
            format!("{}/  {}", self.name, when)
        } else {
            format!("{}  {}B  {}", self.name, self.size, when)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".hidden.cs");
        std::fs::write(&path, "class A {}").unwrap();

        let entry = FileEntry::from_path(&path).unwrap();
        assert!(entry.is_hidden);
        assert!(!entry.is_dir);
        assert_eq!(entry.size, 10);
        assert_eq!(entry.extension.as_deref(), Some("cs"));
        assert!(entry.label().starts_with(".hidden.cs  10B"));
    }

    #[test]
    fn test_missing_path_has_no_entry() {
        assert!(FileEntry::from_path(Path::new("/definitely/not/here")).is_none());
    }
}
