// src/ui/mod.rs
//! Presentation layer. The session core talks to it only through [`Presenter`].
pub mod i18n;
pub mod terminal;
pub mod theme;

pub use i18n::{Locale, Msg};
pub use terminal::TerminalUi;
pub use theme::{Palette, Theme};

use crate::config::Settings;
use crate::session::TabId;
use std::path::{Path, PathBuf};

/// Answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Save,
    Discard,
    Cancel,
}

/// Dialogs and chrome the editor core needs from its host.
///
/// Every `ask_*`/`pick_*` returns `None` when the user dismisses the dialog.
pub trait Presenter {
    /// Asks what to do with unsaved changes in `document`.
    fn confirm(&mut self, document: &str) -> Choice;
    fn ask_save_path(&mut self, suggested: &Path) -> Option<PathBuf>;
    fn ask_open_path(&mut self) -> Option<PathBuf>;
    /// Returns the index of the chosen candidate.
    fn pick_completion(&mut self, candidates: &[&str]) -> Option<usize>;
    /// Asks for a search string, prefilled with the previous one.
    fn ask_find(&mut self, previous: &str) -> Option<String>;
    fn show_error(&mut self, message: &str);
    fn set_status(&mut self, text: &str);
    fn set_title(&mut self, text: &str);
    fn set_tab_label(&mut self, tab: TabId, text: &str);

    fn show_help(&mut self) {}

    fn show_about(&mut self) {}

    fn apply_settings(&mut self, _settings: &Settings) {}
}
