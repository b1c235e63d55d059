// src/session/mod.rs
pub mod document;
pub mod error;
pub mod registry;

pub use document::{DocPath, DocumentSession};
pub use error::SessionError;
pub use registry::{Gate, Opened, SessionRegistry};

use std::fmt;

/// Opaque handle of an open tab. Never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    pub(crate) fn new(raw: u64) -> Self {
        TabId(raw)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab#{}", self.0)
    }
}
