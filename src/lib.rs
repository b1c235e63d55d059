// src/lib.rs
//! Tabbed terminal text editor: document sessions with dirty tracking and
//! guarded close, plus smart indentation, keyword completion, clipboard
//! editing and search.
pub mod app;
pub mod assist;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod filesystem;
pub mod session;
pub mod ui;
pub mod utils;
