// src/editor/cursor.rs
use super::buffer::EditorBuffer;

/// Cursor position inside a buffer. `col` counts characters, not bytes.
/// Orders by line, then column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(line: usize, col: usize) -> Self {
        Cursor { line, col }
    }

    /// Returns the cursor clamped to the buffer's last line and that line's length.
    pub fn clamped(self, buffer: &EditorBuffer) -> Self {
        let line = self.line.min(buffer.total_lines().saturating_sub(1));
        let col = self.col.min(buffer.line_len(line));
        Cursor { line, col }
    }

    /// 1-based `(line, column)` pair for the status line.
    pub fn display_position(&self) -> (usize, usize) {
        (self.line + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_to_buffer() {
        let buffer = EditorBuffer::from_text("ab\nc");
        assert_eq!(Cursor::new(9, 9).clamped(&buffer), Cursor::new(1, 1));
        assert_eq!(Cursor::new(0, 7).clamped(&buffer), Cursor::new(0, 2));
    }

    #[test]
    fn test_display_position_is_one_based() {
        assert_eq!(Cursor::new(0, 0).display_position(), (1, 1));
        assert_eq!(Cursor::new(4, 2).display_position(), (5, 3));
    }
}
