// src/clipboard/mod.rs
//! Copy and paste storage. The system clipboard is used when the platform
//! offers one; the last copied text is always kept in-process as well.
use std::fmt;
use tracing::{debug, warn};

pub trait ClipboardService: fmt::Debug {
    /// Stores `text`. Returns `true` when the system clipboard accepted it.
    fn put(&mut self, text: String) -> bool;
    /// Current contents, empty when there is nothing to paste.
    fn get(&mut self) -> String;
}

/// Process-local clipboard, never shared with other programs.
#[derive(Debug, Default)]
pub struct InternalClipboard {
    content: String,
}

impl ClipboardService for InternalClipboard {
    fn put(&mut self, text: String) -> bool {
        self.content = text;
        false
    }

    fn get(&mut self) -> String {
        self.content.clone()
    }
}

pub struct SystemClipboard {
    system: Option<arboard::Clipboard>,
    fallback: String,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let system = arboard::Clipboard::new()
            .inspect_err(|err| warn!(error = %err, "system clipboard unavailable"))
            .ok();
        SystemClipboard {
            system,
            fallback: String::new(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("system", &self.system.is_some())
            .field("fallback_len", &self.fallback.len())
            .finish()
    }
}

impl ClipboardService for SystemClipboard {
    fn put(&mut self, text: String) -> bool {
        self.fallback.clone_from(&text);
        let stored = self
            .system
            .as_mut()
            .and_then(|cb| cb.set_text(text).ok())
            .is_some();
        debug!(bytes = self.fallback.len(), system = stored, "copied to clipboard");
        stored
    }

    fn get(&mut self) -> String {
        self.system
            .as_mut()
            .and_then(|cb| cb.get_text().ok())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_clipboard_keeps_last_text() {
        let mut clipboard = InternalClipboard::default();
        assert_eq!(clipboard.get(), "");
        assert!(!clipboard.put("one".into()));
        clipboard.put("two".into());
        assert_eq!(clipboard.get(), "two");
    }

    #[test]
    fn test_system_clipboard_falls_back_without_platform_support() {
        let mut clipboard = SystemClipboard {
            system: None,
            fallback: String::new(),
        };
        assert!(!clipboard.put("kept".into()));
        assert_eq!(clipboard.get(), "kept");
    }
}
