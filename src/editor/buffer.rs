// src/editor/buffer.rs
use super::{Cursor, TextBuffer};
use std::cmp::Ordering;

/// Characters `from..to` of `line`; `to` past the end means the rest.
fn slice_chars(line: &str, from: usize, to: usize) -> String {
    line.chars().skip(from).take(to.saturating_sub(from)).collect()
}

/// Character column of the first `query` match at or after column `from`.
fn find_in_line(line: &str, query: &str, from: usize) -> Option<usize> {
    let start = line.char_indices().nth(from).map(|(i, _)| i)?;
    let at = line[start..].find(query)? + start;
    Some(line[..at].chars().count())
}

/// Line-based text storage for one document, with a single cursor.
///
/// Text is split on `'\n'` only, so `text()` returns exactly what was loaded
/// (including a trailing newline and any `'\r'`). Every mutation bumps
/// `revision` and drops the selection; callers compare revisions to learn
/// whether the text changed.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    content: Vec<String>,
    cursor: Cursor,
    /// Fixed end of the selection; the cursor is the moving end.
    anchor: Option<Cursor>,
    scroll_offset: usize,
    revision: u64,
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorBuffer {
    pub fn new() -> Self {
        EditorBuffer {
            content: vec![String::new()],
            cursor: Cursor::default(),
            anchor: None,
            scroll_offset: 0,
            revision: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        EditorBuffer {
            content: text.split('\n').map(str::to_string).collect(),
            ..Self::new()
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn total_lines(&self) -> usize {
        self.content.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.content
    }

    /// Length of a line in characters; 0 for a missing line.
    pub fn line_len(&self, index: usize) -> usize {
        self.content.get(index).map_or(0, |l| l.chars().count())
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor.clamped(self);
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
    }

    fn touch(&mut self) {
        self.anchor = None;
        self.revision += 1;
    }

    /// Ordered `(start, end)` of the selection, `None` when nothing is selected.
    pub fn selection(&self) -> Option<(Cursor, Cursor)> {
        let anchor = self.anchor?.clamped(self);
        match anchor.cmp(&self.cursor) {
            Ordering::Less => Some((anchor, self.cursor)),
            Ordering::Greater => Some((self.cursor, anchor)),
            Ordering::Equal => None,
        }
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    /// Pins the anchor at the cursor unless a selection is already growing.
    pub fn start_selection(&mut self) {
        if self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        }
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    pub fn select(&mut self, from: Cursor, to: Cursor) {
        self.anchor = Some(from.clamped(self));
        self.set_cursor(to);
    }

    pub fn select_all(&mut self) {
        let last = self.content.len() - 1;
        self.select(Cursor::default(), Cursor::new(last, self.line_len(last)));
    }

    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection()?;
        if start.line == end.line {
            return Some(slice_chars(&self.content[start.line], start.col, end.col));
        }
        let mut out = slice_chars(&self.content[start.line], start.col, usize::MAX);
        for line in &self.content[start.line + 1..end.line] {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        out.push_str(&slice_chars(&self.content[end.line], 0, end.col));
        Some(out)
    }

    /// Removes the selected text and returns it, leaving the cursor at its start.
    pub fn delete_selection(&mut self) -> Option<String> {
        let removed = self.selected_text()?;
        let (start, end) = self.selection()?;

        let tail_from = Self::byte_index(&self.content[end.line], end.col);
        let tail = self.content[end.line][tail_from..].to_string();
        let head = &mut self.content[start.line];
        head.truncate(Self::byte_index(head, start.col));
        head.push_str(&tail);
        self.content.drain(start.line + 1..=end.line);

        self.cursor = start;
        self.touch();
        Some(removed)
    }

    /// Removes the cursor's whole line and returns its text.
    pub fn cut_line(&mut self) -> String {
        let line = self.cursor.line;
        let removed = if self.content.len() == 1 {
            std::mem::take(&mut self.content[0])
        } else {
            self.content.remove(line)
        };
        self.set_cursor(Cursor::new(line, 0));
        self.touch();
        removed
    }

    /// Inserts `text`, replacing the selection if there is one.
    pub fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        for ch in text.chars() {
            self.insert_char(ch);
        }
    }

    /// Next case-sensitive match of `query` after the cursor (or after the
    /// start of the current selection), wrapping to the top. The match is
    /// selected and its start returned.
    pub fn find_next(&mut self, query: &str) -> Option<Cursor> {
        if query.is_empty() {
            return None;
        }
        let origin = self.selection().map_or(self.cursor, |(start, _)| start);
        let width = query.chars().count();

        let after = (origin.line..self.content.len()).find_map(|line| {
            let from = if line == origin.line { origin.col + 1 } else { 0 };
            find_in_line(&self.content[line], query, from).map(|col| Cursor::new(line, col))
        });
        let found = after.or_else(|| {
            (0..=origin.line).find_map(|line| {
                find_in_line(&self.content[line], query, 0).map(|col| Cursor::new(line, col))
            })
        })?;

        self.select(found, Cursor::new(found.line, found.col + width));
        Some(found)
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
            return;
        }
        let Cursor { line, col } = self.cursor;
        let text = &mut self.content[line];
        let pos = Self::byte_index(text, col);
        text.insert(pos, ch);
        self.cursor.col += 1;
        self.touch();
    }

    pub fn insert_newline(&mut self) {
        let Cursor { line, col } = self.cursor;
        let pos = Self::byte_index(&self.content[line], col);
        let after = self.content[line].split_off(pos);
        self.content.insert(line + 1, after);

        self.cursor = Cursor::new(line + 1, 0);
        self.touch();
    }

    /// Backspace. Joins with the previous line when the cursor is at column 0.
    /// Returns `false` at the very start of the buffer.
    pub fn delete_char(&mut self) -> bool {
        let Cursor { line, col } = self.cursor;
        if col > 0 {
            let text = &mut self.content[line];
            let pos = Self::byte_index(text, col - 1);
            text.remove(pos);
            self.cursor.col -= 1;
        } else if line > 0 {
            let removed = self.content.remove(line);
            let prev_len = self.line_len(line - 1);
            self.content[line - 1].push_str(&removed);
            self.cursor = Cursor::new(line - 1, prev_len);
        } else {
            return false;
        }
        self.touch();
        true
    }

    /// Delete key. Joins the next line when the cursor is at end of line.
    pub fn delete_forward(&mut self) -> bool {
        let Cursor { line, col } = self.cursor;
        if col < self.line_len(line) {
            let text = &mut self.content[line];
            let pos = Self::byte_index(text, col);
            text.remove(pos);
        } else if line + 1 < self.content.len() {
            let next = self.content.remove(line + 1);
            self.content[line].push_str(&next);
        } else {
            return false;
        }
        self.touch();
        true
    }

    pub fn move_cursor(&mut self, line_delta: isize, col_delta: isize) {
        let line = self.cursor.line.saturating_add_signed(line_delta);
        let col = self.cursor.col.saturating_add_signed(col_delta);
        self.set_cursor(Cursor::new(line, col));
    }

    /// Horizontal move that wraps across line boundaries.
    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.line_len(self.cursor.line);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.content.len() {
            self.cursor = Cursor::new(self.cursor.line + 1, 0);
        }
    }

    pub fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.line);
    }

    /// Keeps the cursor line inside a viewport of `height` rows.
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        let height = height.max(1);
        if self.cursor.line < self.scroll_offset {
            self.scroll_offset = self.cursor.line;
        } else if self.cursor.line >= self.scroll_offset + height {
            self.scroll_offset = self.cursor.line + 1 - height;
        }
    }
}

impl TextBuffer for EditorBuffer {
    fn text(&self) -> String {
        self.content.join("\n")
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.content.get(index).map(String::as_str)
    }

    fn insert_at_cursor(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert_char(ch);
        }
    }

    fn delete_before_cursor(&mut self, count: usize) {
        for _ in 0..count {
            if !self.delete_char() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_round_trips_trailing_newline() {
        let buffer = EditorBuffer::from_text("a\nb\n");
        assert_eq!(buffer.total_lines(), 3);
        assert_eq!(buffer.text(), "a\nb\n");
    }

    #[test]
    fn test_insert_at_cursor_splits_lines() {
        let mut buffer = EditorBuffer::from_text("ab");
        buffer.set_cursor(Cursor::new(0, 1));
        buffer.insert_at_cursor("x\n  ");
        assert_eq!(buffer.text(), "ax\n  b");
        assert_eq!(buffer.cursor(), Cursor::new(1, 2));
    }

    #[test]
    fn test_multibyte_columns_are_characters() {
        let mut buffer = EditorBuffer::from_text("héllo");
        buffer.set_cursor(Cursor::new(0, 2));
        buffer.insert_char('!');
        assert_eq!(buffer.text(), "hé!llo");
        assert!(buffer.delete_char());
        assert!(buffer.delete_char());
        assert_eq!(buffer.text(), "hllo");
    }

    #[test]
    fn test_delete_before_cursor_joins_lines_and_stops_at_start() {
        let mut buffer = EditorBuffer::from_text("ab\ncd");
        buffer.set_cursor(Cursor::new(1, 1));
        buffer.delete_before_cursor(10);
        assert_eq!(buffer.text(), "d");
        assert_eq!(buffer.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_delete_forward_joins_next_line() {
        let mut buffer = EditorBuffer::from_text("ab\ncd");
        buffer.set_cursor(Cursor::new(0, 2));
        assert!(buffer.delete_forward());
        assert_eq!(buffer.text(), "abcd");
        buffer.move_end();
        assert!(!buffer.delete_forward());
    }

    #[test]
    fn test_revision_only_moves_on_mutation() {
        let mut buffer = EditorBuffer::from_text("abc");
        let before = buffer.revision();
        buffer.move_cursor(0, 2);
        buffer.move_right();
        buffer.move_left();
        assert_eq!(buffer.revision(), before);
        buffer.insert_char('z');
        assert!(buffer.revision() > before);
    }

    #[test]
    fn test_selection_text_spans_lines() {
        let mut buffer = EditorBuffer::from_text("one\ntwo\nthree");
        buffer.set_cursor(Cursor::new(2, 2));
        buffer.start_selection();
        buffer.move_cursor(-2, 0);
        buffer.move_right();
        assert_eq!(buffer.selection(), Some((Cursor::new(0, 3), Cursor::new(2, 2))));
        assert_eq!(buffer.selected_text().as_deref(), Some("\ntwo\nth"));
    }

    #[test]
    fn test_delete_selection_joins_ends() {
        let mut buffer = EditorBuffer::from_text("héllo\nbig\nworld");
        buffer.select(Cursor::new(0, 2), Cursor::new(2, 1));
        let before = buffer.revision();
        assert_eq!(buffer.delete_selection().as_deref(), Some("llo\nbig\nw"));
        assert_eq!(buffer.text(), "héorld");
        assert_eq!(buffer.cursor(), Cursor::new(0, 2));
        assert!(buffer.revision() > before);
        assert!(!buffer.has_selection());
        assert_eq!(buffer.delete_selection(), None);
    }

    #[test]
    fn test_select_all_and_replace() {
        let mut buffer = EditorBuffer::from_text("a\nb");
        buffer.select_all();
        assert_eq!(buffer.selected_text().as_deref(), Some("a\nb"));
        buffer.insert_text("x\ny");
        assert_eq!(buffer.text(), "x\ny");
        assert_eq!(buffer.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn test_selection_cleared_by_edit_but_not_by_motion() {
        let mut buffer = EditorBuffer::from_text("abc");
        buffer.start_selection();
        buffer.move_end();
        assert!(buffer.has_selection());
        buffer.insert_char('!');
        assert!(!buffer.has_selection());
    }

    #[test]
    fn test_cut_line() {
        let mut buffer = EditorBuffer::from_text("a\nb\nc");
        buffer.set_cursor(Cursor::new(2, 1));
        assert_eq!(buffer.cut_line(), "c");
        assert_eq!(buffer.text(), "a\nb");
        assert_eq!(buffer.cursor(), Cursor::new(1, 0));

        let mut single = EditorBuffer::from_text("only");
        assert_eq!(single.cut_line(), "only");
        assert_eq!(single.text(), "");
    }

    #[test]
    fn test_find_next_moves_forward_and_wraps() {
        let mut buffer = EditorBuffer::from_text("if x\nx = 1\nend if");
        assert_eq!(buffer.find_next("if"), Some(Cursor::new(2, 4)));
        assert_eq!(buffer.selected_text().as_deref(), Some("if"));
        assert_eq!(buffer.find_next("if"), Some(Cursor::new(0, 0)));
        assert_eq!(buffer.find_next("If"), None);
        assert_eq!(buffer.find_next(""), None);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut buffer = EditorBuffer::from_text(&"x\n".repeat(50));
        buffer.move_cursor(30, 0);
        buffer.ensure_cursor_visible(10);
        assert_eq!(buffer.scroll_offset(), 21);
        buffer.move_cursor(-30, 0);
        buffer.ensure_cursor_visible(10);
        assert_eq!(buffer.scroll_offset(), 0);
    }
}
