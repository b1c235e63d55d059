// src/assist/complete.rs
use super::keywords::keywords;
use crate::editor::{Language, TextBuffer};

pub const MAX_CANDIDATES: usize = 10;

/// Word fragment before the cursor and the keywords that could complete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionContext {
    pub partial: String,
    pub candidates: Vec<&'static str>,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Trailing `[A-Za-z0-9_]+` run of `text`, or `""`.
pub fn trailing_word(text: &str) -> &str {
    let start = text
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word_char(c))
        .last()
        .map_or(text.len(), |(i, _)| i);
    &text[start..]
}

/// Keywords whose leading characters match `partial` ignoring ASCII case.
/// Declaration order is kept and the result is capped at [`MAX_CANDIDATES`].
pub fn matching_keywords(words: &[&'static str], partial: &str) -> Vec<&'static str> {
    words
        .iter()
        .copied()
        .filter(|word| {
            word.get(..partial.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(partial))
        })
        .take(MAX_CANDIDATES)
        .collect()
}

/// Builds the suggestion context at the cursor, or `None` when there is nothing to offer.
///
/// An empty fragment is still accepted when the character before the cursor is a
/// `.`; the filter is then empty and the first keywords are returned unfiltered.
pub fn suggest<B: TextBuffer + ?Sized>(
    buffer: &B,
    language: Language,
) -> Option<SuggestionContext> {
    let cursor = buffer.cursor();
    let line = buffer.line(cursor.line)?;
    let end = line
        .char_indices()
        .nth(cursor.col)
        .map_or(line.len(), |(i, _)| i);
    let before = &line[..end];

    let partial = trailing_word(before);
    if partial.is_empty() && !before.ends_with('.') {
        return None;
    }

    let candidates = matching_keywords(keywords(language), partial);
    if candidates.is_empty() {
        return None;
    }
    Some(SuggestionContext {
        partial: partial.to_string(),
        candidates,
    })
}

/// Replaces the fragment before the cursor with `choice`.
pub fn apply<B: TextBuffer + ?Sized>(buffer: &mut B, context: &SuggestionContext, choice: &str) {
    buffer.delete_before_cursor(context.partial.chars().count());
    buffer.insert_at_cursor(choice);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::keywords::{CSHARP, VISUAL_BASIC};
    use crate::editor::{Cursor, EditorBuffer};

    fn buffer_at_end(text: &str) -> EditorBuffer {
        let mut buffer = EditorBuffer::from_text(text);
        let last = buffer.total_lines() - 1;
        buffer.set_cursor(Cursor::new(last, buffer.line_len(last)));
        buffer
    }

    #[test]
    fn test_trailing_word() {
        assert_eq!(trailing_word("x = foo_1"), "foo_1");
        assert_eq!(trailing_word("call("), "");
        assert_eq!(trailing_word(""), "");
        assert_eq!(trailing_word("héllo"), "llo");
    }

    #[test]
    fn test_for_matches_in_declaration_order() {
        let context = suggest(&buffer_at_end("for"), Language::CSharp).unwrap();
        assert_eq!(context.partial, "for");
        assert_eq!(context.candidates, vec!["for", "foreach"]);
    }

    #[test]
    fn test_prefix_is_case_insensitive_and_candidates_verbatim() {
        let found = matching_keywords(VISUAL_BASIC, "end");
        assert_eq!(found, vec!["End", "EndIf"]);
    }

    #[test]
    fn test_candidates_are_capped() {
        let found = matching_keywords(VISUAL_BASIC, "c");
        assert_eq!(found.len(), MAX_CANDIDATES);
        assert_eq!(found[0], "Call");
    }

    #[test]
    fn test_no_fragment_no_suggestion() {
        assert_eq!(suggest(&buffer_at_end("x = "), Language::CSharp), None);
        assert_eq!(suggest(&buffer_at_end(""), Language::CSharp), None);
    }

    #[test]
    fn test_dot_lists_first_keywords_unfiltered() {
        let context = suggest(&buffer_at_end("console."), Language::CSharp).unwrap();
        assert_eq!(context.partial, "");
        assert_eq!(context.candidates, CSHARP[..MAX_CANDIDATES].to_vec());
    }

    #[test]
    fn test_unknown_fragment_yields_none() {
        assert_eq!(suggest(&buffer_at_end("zzz"), Language::CSharp), None);
    }

    #[test]
    fn test_fragment_stops_at_cursor() {
        let mut buffer = EditorBuffer::from_text("whilex");
        buffer.set_cursor(Cursor::new(0, 2));
        let context = suggest(&buffer, Language::CSharp).unwrap();
        assert_eq!(context.partial, "wh");
        assert_eq!(context.candidates, vec!["while"]);
    }

    #[test]
    fn test_apply_replaces_fragment() {
        let mut buffer = buffer_at_end("  x.FOR");
        let context = suggest(&buffer, Language::CSharp).unwrap();
        apply(&mut buffer, &context, context.candidates[1]);
        assert_eq!(buffer.text(), "  x.foreach");
        assert_eq!(buffer.cursor(), Cursor::new(0, 11));
    }
}
