// src/assist/indent.rs
//! Newline indentation from the current line only. No brace balancing and no
//! nesting depth: one line in, one indentation string out.

use crate::editor::TextBuffer;

const INDENT: &str = "    ";

/// Leading run of spaces and tabs.
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    text.len() >= suffix.len()
        && text
            .get(text.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

fn opens_block(line: &str) -> bool {
    let trailing_trimmed = line.trim_end();
    trailing_trimmed.ends_with('{')
        || (starts_with_ignore_case(line.trim_start(), "if")
            && ends_with_ignore_case(trailing_trimmed, "then"))
}

fn closes_block(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed == "}" || trimmed.eq_ignore_ascii_case("End If")
}

/// Indentation for the line that follows `line`.
pub fn next_indent(line: &str) -> String {
    let indentation = leading_whitespace(line);
    if opens_block(line) {
        format!("{indentation}{INDENT}")
    } else if closes_block(line) && indentation.len() >= INDENT.len() {
        indentation[..indentation.len() - INDENT.len()].to_string()
    } else {
        indentation.to_string()
    }
}

/// Inserts a newline plus computed indentation at the cursor.
///
/// Returns `false` without touching the buffer when the cursor line is out of range.
pub fn smart_newline<B: TextBuffer + ?Sized>(buffer: &mut B) -> bool {
    let cursor = buffer.cursor();
    let Some(line) = buffer.line(cursor.line) else {
        return false;
    };
    let insertion = format!("\n{}", next_indent(line));
    buffer.insert_at_cursor(&insertion);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{Cursor, EditorBuffer};

    #[test]
    fn test_if_then_increases() {
        assert_eq!(next_indent("if x then"), "    ");
        assert_eq!(next_indent("  IF ready THEN  "), "      ");
    }

    #[test]
    fn test_open_brace_increases() {
        assert_eq!(next_indent("\tfn main() {"), "\t    ");
    }

    #[test]
    fn test_closing_lines_decrease() {
        assert_eq!(next_indent("    }"), "");
        assert_eq!(next_indent("        end if"), "    ");
        assert_eq!(next_indent("  }"), "  ");
    }

    #[test]
    fn test_plain_line_keeps_indentation() {
        assert_eq!(next_indent("    let x = 1;"), "    ");
        assert_eq!(next_indent("if x"), "");
        assert_eq!(next_indent(""), "");
        assert_eq!(next_indent("    }  }"), "    ");
    }

    #[test]
    fn test_smart_newline_inserts_at_cursor() {
        let mut buffer = EditorBuffer::from_text("if a then");
        buffer.move_end();
        assert!(smart_newline(&mut buffer));
        assert_eq!(buffer.text(), "if a then\n    ");
        assert_eq!(buffer.cursor(), Cursor::new(1, 4));
    }

    #[test]
    fn test_smart_newline_mid_line_uses_whole_line() {
        let mut buffer = EditorBuffer::from_text("    foo {");
        buffer.set_cursor(Cursor::new(0, 8));
        assert!(smart_newline(&mut buffer));
        assert_eq!(buffer.text(), "    foo \n        {");
    }

    struct Detached;

    impl TextBuffer for Detached {
        fn text(&self) -> String {
            String::new()
        }
        fn cursor(&self) -> Cursor {
            Cursor::new(3, 0)
        }
        fn line(&self, _index: usize) -> Option<&str> {
            None
        }
        fn insert_at_cursor(&mut self, _text: &str) {
            panic!("must not insert");
        }
        fn delete_before_cursor(&mut self, _count: usize) {
            panic!("must not delete");
        }
    }

    #[test]
    fn test_out_of_range_line_is_noop() {
        assert!(!smart_newline(&mut Detached));
    }
}
