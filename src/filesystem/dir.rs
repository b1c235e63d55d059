// src/filesystem/dir.rs
use super::{FileEntry, SortBy};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One directory level for the open dialog.
#[derive(Debug)]
pub struct DirNavigator {
    pub current_path: PathBuf,
    pub entries: Vec<FileEntry>,
    pub show_hidden: bool,
    pub sort_by: SortBy,
    filter: Option<Pattern>,
}

impl DirNavigator {
    pub fn new(path: PathBuf) -> Self {
        let mut nav = DirNavigator {
            current_path: path,
            entries: Vec::new(),
            show_hidden: false,
            sort_by: SortBy::Type,
            filter: None,
        };
        nav.refresh();
        nav
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        let path = &self.current_path;

        for entry in WalkDir::new(path).min_depth(1).max_depth(1).into_iter().flatten() {
            let Some(file_entry) = FileEntry::from_path(entry.path()) else {
                continue;
            };
            if !self.show_hidden && file_entry.is_hidden {
                continue;
            }
            // directories stay visible so the filter never traps the user
            if let Some(ref filter) = self.filter {
                if !file_entry.is_dir && !filter.matches(&file_entry.name.to_lowercase()) {
                    continue;
                }
            }
            self.entries.push(file_entry);
        }

        self.sort();
    }

    pub fn sort(&mut self) {
        match self.sort_by {
            SortBy::Name => self.entries.sort_by_key(|e| e.name.to_lowercase()),
            SortBy::Size => self.entries.sort_by(|a, b| b.size.cmp(&a.size)),
            SortBy::Modified => self.entries.sort_by(|a, b| b.modified.cmp(&a.modified)),
            SortBy::Type => self.entries.sort_by(|a, b| {
                b.is_dir
                    .cmp(&a.is_dir)
                    .then_with(|| a.extension.cmp(&b.extension))
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }),
        }
    }

    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.refresh();
    }

    pub fn cycle_sort(&mut self) {
        self.sort_by = self.sort_by.next();
        self.sort();
    }

    pub fn navigate_to(&mut self, path: &Path) {
        if path.is_dir() {
            self.current_path = path.to_path_buf();
            self.refresh();
        }
    }

    pub fn navigate_up(&mut self) {
        if let Some(parent) = self.current_path.parent() {
            self.current_path = parent.to_path_buf();
            self.refresh();
        }
    }

    /// Filters file names by a glob (`*.cs`) or, without wildcards, by substring.
    /// Matching ignores case. An empty query clears the filter.
    pub fn search(&mut self, query: &str) {
        let query = query.trim().to_lowercase();
        self.filter = if query.is_empty() {
            None
        } else if query.contains(['*', '?', '[']) {
            Pattern::new(&query).ok()
        } else {
            Pattern::new(&format!("*{}*", Pattern::escape(&query))).ok()
        };
        self.refresh();
    }
}
