// src/assist/mod.rs
//! Editing helpers that run synchronously on the active buffer. They never fail;
//! bad input simply produces no edit.
pub mod complete;
pub mod indent;
pub mod keywords;

pub use complete::{suggest, SuggestionContext, MAX_CANDIDATES};
pub use indent::smart_newline;
