// src/filesystem/mod.rs
pub mod dir;
pub mod file;

pub use dir::DirNavigator;
pub use file::FileEntry;

use std::io;
use std::path::Path;

/// Whole-file text I/O used by open and save.
pub trait FileSystem {
    fn read_text(&self, path: &Path) -> io::Result<String>;
    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// The real disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Name,
    Size,
    Modified,
    Type,
}

impl SortBy {
    pub fn next(self) -> Self {
        match self {
            SortBy::Name => SortBy::Size,
            SortBy::Size => SortBy::Modified,
            SortBy::Modified => SortBy::Type,
            SortBy::Type => SortBy::Name,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_fs_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        LocalFs.write_text(&path, "one\ntwo\n").unwrap();
        assert_eq!(LocalFs.read_text(&path).unwrap(), "one\ntwo\n");
        assert!(LocalFs.read_text(&dir.path().join("missing.txt")).is_err());
    }
}
