// src/session/registry.rs
use super::document::with_default_extension;
use super::{DocumentSession, SessionError, TabId};
use crate::filesystem::FileSystem;
use crate::ui::{Choice, Presenter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const APP_NAME: &str = "Tabedit";

/// Outcome of the unsaved-changes gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opened {
    /// The path was already open; that tab was focused and nothing was read.
    Existing(TabId),
    Loaded(TabId),
}

impl Opened {
    pub fn id(&self) -> TabId {
        match *self {
            Opened::Existing(id) | Opened::Loaded(id) => id,
        }
    }
}

/// All open documents in tab order.
///
/// Never empty once constructed, and no two sessions share a file path.
/// Every removal goes through [`SessionRegistry::check`] first.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Vec<DocumentSession>,
    active: usize,
    untitled_counter: u64,
    next_id: u64,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    /// A registry holding a single `Untitled 1` session.
    pub fn new() -> Self {
        let mut registry = SessionRegistry {
            sessions: Vec::new(),
            active: 0,
            untitled_counter: 1,
            next_id: 1,
        };
        registry.new_tab();
        registry
    }

    fn allocate_id(&mut self) -> TabId {
        let id = TabId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: TabId) -> Option<usize> {
        self.sessions.iter().position(|s| s.id() == id)
    }

    fn index_of_path(&self, path: &Path) -> Option<usize> {
        self.sessions.iter().position(|s| s.path().file() == Some(path))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentSession> {
        self.sessions.iter()
    }

    pub fn get(&self, id: TabId) -> Option<&DocumentSession> {
        self.index_of(id).map(|i| &self.sessions[i])
    }

    pub fn active(&self) -> &DocumentSession {
        &self.sessions[self.active]
    }

    pub fn active_mut(&mut self) -> &mut DocumentSession {
        &mut self.sessions[self.active]
    }

    pub fn active_id(&self) -> TabId {
        self.active().id()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn activate(&mut self, id: TabId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn next_tab(&mut self) {
        self.active = (self.active + 1) % self.sessions.len();
    }

    pub fn prev_tab(&mut self) {
        self.active = self.active.checked_sub(1).unwrap_or(self.sessions.len() - 1);
    }

    /// Appends an empty `Untitled N` session and focuses it.
    pub fn new_tab(&mut self) -> TabId {
        let id = self.allocate_id();
        let number = self.untitled_counter;
        self.untitled_counter += 1;
        self.sessions.push(DocumentSession::untitled(id, number));
        self.active = self.sessions.len() - 1;
        debug!(tab = %id, number, "new untitled tab");
        id
    }

    /// Opens `path`, or focuses the tab that already has it.
    ///
    /// A clean untitled active tab is replaced by the loaded file. On read
    /// failure the registry is left untouched.
    pub fn open(&mut self, path: &Path, fs: &dyn FileSystem) -> Result<Opened, SessionError> {
        if let Some(index) = self.index_of_path(path) {
            self.active = index;
            return Ok(Opened::Existing(self.sessions[index].id()));
        }

        let content = fs
            .read_text(path)
            .map_err(|err| SessionError::io("opening", path, &err))?;

        let current = self.active();
        if current.path().is_untitled() && !current.is_dirty() {
            debug!(tab = %current.id(), "replacing clean untitled tab");
            self.sessions.remove(self.active);
        }

        let id = self.allocate_id();
        self.sessions
            .push(DocumentSession::from_file(id, path.to_path_buf(), &content));
        self.active = self.sessions.len() - 1;
        info!(tab = %id, path = %path.display(), bytes = content.len(), "opened document");
        Ok(Opened::Loaded(id))
    }

    /// Asks for a path and opens it. Read failures are shown as an error dialog.
    pub fn open_prompted(
        &mut self,
        ui: &mut dyn Presenter,
        fs: &dyn FileSystem,
    ) -> Result<Opened, SessionError> {
        let path = ui.ask_open_path().ok_or(SessionError::UserCancelled)?;
        self.open(&path, fs).inspect_err(|err| ui.show_error(&err.to_string()))
    }

    /// Saves a session, redirecting untitled documents to the save-as prompt.
    ///
    /// Write failures are reported through `ui`; a dismissed prompt returns
    /// `UserCancelled` and changes nothing.
    pub fn save(
        &mut self,
        id: TabId,
        ui: &mut dyn Presenter,
        fs: &dyn FileSystem,
    ) -> Result<PathBuf, SessionError> {
        let index = self.index_of(id).ok_or(SessionError::UserCancelled)?;
        let result = self.sessions[index].save(fs);
        match result {
            Ok(()) => Ok(self.sessions[index]
                .path()
                .file()
                .map(Path::to_path_buf)
                .unwrap_or_default()),
            Err(SessionError::NeedsPath) => self.save_as(id, ui, fs),
            Err(err) => {
                ui.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Prompts for a destination and saves there.
    pub fn save_as(
        &mut self,
        id: TabId,
        ui: &mut dyn Presenter,
        fs: &dyn FileSystem,
    ) -> Result<PathBuf, SessionError> {
        let index = self.index_of(id).ok_or(SessionError::UserCancelled)?;
        let suggested = self.sessions[index].suggested_path();
        let chosen = ui.ask_save_path(&suggested).ok_or(SessionError::UserCancelled)?;
        let target = with_default_extension(&chosen);

        if self.index_of_path(&target).is_some_and(|other| other != index) {
            let err = SessionError::PathInUse(target);
            ui.show_error(&err.to_string());
            return Err(err);
        }

        self.sessions[index]
            .save_as(&target, fs)
            .inspect_err(|err| ui.show_error(&err.to_string()))
    }

    /// The unsaved-changes gate. Must run before any session is dropped.
    pub fn check(&mut self, id: TabId, ui: &mut dyn Presenter, fs: &dyn FileSystem) -> Gate {
        let Some(session) = self.get(id) else {
            return Gate::Proceed;
        };
        if !session.is_dirty() {
            return Gate::Proceed;
        }

        let name = session.path().name();
        let gate = match ui.confirm(&name) {
            Choice::Save => {
                // failure was already reported by the save flow
                let _ = self.save(id, ui, fs);
                if self.get(id).is_some_and(DocumentSession::is_dirty) {
                    Gate::Abort
                } else {
                    Gate::Proceed
                }
            }
            Choice::Discard => Gate::Proceed,
            Choice::Cancel => Gate::Abort,
        };
        debug!(tab = %id, ?gate, "unsaved changes gate");
        gate
    }

    /// Closes a tab once the gate allows it. Closing the last tab leaves a
    /// fresh untitled one. Returns whether the tab was removed.
    pub fn close(&mut self, id: TabId, ui: &mut dyn Presenter, fs: &dyn FileSystem) -> bool {
        if self.index_of(id).is_none() || self.check(id, ui, fs) == Gate::Abort {
            return false;
        }
        let Some(index) = self.index_of(id) else {
            return false;
        };

        self.sessions.remove(index);
        info!(tab = %id, remaining = self.sessions.len(), "closed tab");
        if self.sessions.is_empty() {
            self.new_tab();
        } else if index < self.active || self.active >= self.sessions.len() {
            self.active -= 1;
        }
        true
    }

    /// Gates every dirty session in tab order, focusing each one first.
    ///
    /// Stops at the first refusal and returns `false`. Never removes sessions;
    /// on `true` the caller may exit.
    pub fn close_all_with_gate(&mut self, ui: &mut dyn Presenter, fs: &dyn FileSystem) -> bool {
        let dirty: Vec<TabId> = self
            .sessions
            .iter()
            .filter(|s| s.is_dirty())
            .map(DocumentSession::id)
            .collect();

        for id in dirty {
            self.activate(id);
            if self.check(id, ui, fs) == Gate::Abort {
                info!(tab = %id, "quit aborted");
                return false;
            }
        }
        true
    }

    /// Pushes the window title and every tab label to the presentation layer.
    pub fn publish(&self, ui: &mut dyn Presenter) {
        ui.set_title(&format!("{APP_NAME} - {}", self.active().display_title()));
        for session in &self.sessions {
            ui.set_tab_label(session.id(), &session.display_title());
        }
    }
}
