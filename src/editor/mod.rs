// src/editor/mod.rs
pub mod buffer;
pub mod cursor;
pub mod syntax;

pub use buffer::EditorBuffer;
pub use cursor::Cursor;
pub use syntax::Language;

/// The slice of a text widget the session core and the editing assistant rely on.
pub trait TextBuffer {
    /// Full text, lines joined with `'\n'`.
    fn text(&self) -> String;
    fn cursor(&self) -> Cursor;
    fn line(&self, index: usize) -> Option<&str>;
    /// Inserts `text` at the cursor and leaves the cursor after it.
    fn insert_at_cursor(&mut self, text: &str);
    /// Removes up to `count` characters before the cursor, as repeated backspace.
    fn delete_before_cursor(&mut self, count: usize);
}
