// src/session/document.rs
use super::{SessionError, TabId};
use crate::editor::{EditorBuffer, Language, TextBuffer};
use crate::filesystem::FileSystem;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_EXTENSION: &str = "txt";

/// Where a document is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocPath {
    /// Never saved. The number is only used for the display name.
    Untitled(u64),
    File(PathBuf),
}

impl DocPath {
    pub fn file(&self) -> Option<&Path> {
        match self {
            DocPath::Untitled(_) => None,
            DocPath::File(path) => Some(path),
        }
    }

    pub fn is_untitled(&self) -> bool {
        matches!(self, DocPath::Untitled(_))
    }

    /// File-name component, or `Untitled N`.
    pub fn name(&self) -> String {
        match self {
            DocPath::Untitled(n) => format!("Untitled {n}"),
            DocPath::File(path) => path
                .file_name()
                .unwrap_or(path.as_os_str())
                .to_string_lossy()
                .to_string(),
        }
    }
}

/// Appends `.txt` to paths without an extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    let mut raw = path.as_os_str().to_owned();
    raw.push(".");
    raw.push(DEFAULT_EXTENSION);
    PathBuf::from(raw)
}

/// One open document: identity, persistence state and its buffer.
#[derive(Debug)]
pub struct DocumentSession {
    id: TabId,
    path: DocPath,
    dirty: bool,
    buffer: EditorBuffer,
}

impl DocumentSession {
    pub fn untitled(id: TabId, number: u64) -> Self {
        DocumentSession {
            id,
            path: DocPath::Untitled(number),
            dirty: false,
            buffer: EditorBuffer::new(),
        }
    }

    pub fn from_file(id: TabId, path: PathBuf, content: &str) -> Self {
        DocumentSession {
            id,
            path: DocPath::File(path),
            dirty: false,
            buffer: EditorBuffer::from_text(content),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn path(&self) -> &DocPath {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn buffer(&self) -> &EditorBuffer {
        &self.buffer
    }

    pub fn language(&self) -> Language {
        self.path.file().map_or(Language::DEFAULT, Language::from_path)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Runs `f` on the buffer and marks the session dirty if the text changed.
    /// All buffer access, cursor moves included, goes through here.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut EditorBuffer) -> R) -> R {
        let before = self.buffer.revision();
        let result = f(&mut self.buffer);
        if self.buffer.revision() != before {
            self.mark_dirty();
        }
        result
    }

    /// Writes the buffer to its path. Untitled documents fail with `NeedsPath`.
    pub fn save(&mut self, fs: &dyn FileSystem) -> Result<(), SessionError> {
        let DocPath::File(path) = &self.path else {
            return Err(SessionError::NeedsPath);
        };
        if let Err(err) = fs.write_text(path, &self.buffer.text()) {
            warn!(tab = %self.id, path = %path.display(), error = %err, "save failed");
            return Err(SessionError::io("saving", path, &err));
        }
        info!(tab = %self.id, path = %path.display(), "saved document");
        self.dirty = false;
        Ok(())
    }

    /// Writes the buffer to `new_path` (plus `.txt` if it has no extension) and
    /// adopts that path. Returns the path actually written.
    pub fn save_as(
        &mut self,
        new_path: &Path,
        fs: &dyn FileSystem,
    ) -> Result<PathBuf, SessionError> {
        let target = with_default_extension(new_path);
        if let Err(err) = fs.write_text(&target, &self.buffer.text()) {
            warn!(tab = %self.id, path = %target.display(), error = %err, "save as failed");
            return Err(SessionError::io("saving", &target, &err));
        }
        debug!(tab = %self.id, from = ?self.path, to = %target.display(), "document renamed");
        self.path = DocPath::File(target.clone());
        self.dirty = false;
        Ok(target)
    }

    /// Default destination offered by the save-as prompt.
    pub fn suggested_path(&self) -> PathBuf {
        match &self.path {
            DocPath::File(path) => path.clone(),
            DocPath::Untitled(_) => {
                PathBuf::from(format!("{}.{DEFAULT_EXTENSION}", self.path.name()))
            }
        }
    }

    pub fn display_title(&self) -> String {
        if self.dirty {
            format!("{} *", self.path.name())
        } else {
            self.path.name()
        }
    }
}
