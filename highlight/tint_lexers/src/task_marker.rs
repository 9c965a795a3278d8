//! Task markers (`TODO:`, `FIXME`, `NOTE(name):`) inside comments.

use tint_core::chars::{is_identifier_char, is_task_marker_prev};
use tint_core::{Document, Style, StyleContext};

/// Markers recognised even without a following `:` or `(`.
const KNOWN_MARKERS: &[&str] = &["TODO", "FIXME", "XXX", "HACK", "NOTE", "BUG"];

/// Shortest generic marker, e.g. `BUG:`.
const MIN_MARKER_LEN: usize = 3;

/// Style a task marker starting at the current character, if there is one.
///
/// A marker must be the first visible text of the comment: either nothing
/// visible precedes it on the line, or at most three characters of
/// comment opener do and the character before it is punctuation or
/// space. It is an upper-case ASCII word that is either followed by `:`
/// or `(` and at least three letters long, or one of a few well-known
/// markers followed by a non-identifier character.
///
/// On a match the marker is styled, the context stands right after it in
/// the comment style it started from, `visible_chars` counts the marker,
/// and `true` is returned.
pub(crate) fn highlight_task_marker<D: Document + ?Sized>(
    sc: &mut StyleContext<'_, D>,
    visible_chars: &mut usize,
    visible_chars_before: usize,
) -> bool {
    let leading = *visible_chars == 0
        || (*visible_chars <= visible_chars_before + 3 && is_task_marker_prev(sc.ch_prev()));
    if !leading || !sc.ch().is_ascii_uppercase() {
        return false;
    }

    let start = sc.pos();
    let doc = sc.doc();
    let mut end = start;
    while doc.byte_at(end).is_ascii_uppercase() {
        end += 1;
    }
    let len = end - start;
    let after = char::from(doc.byte_at(end));
    let generic = len >= MIN_MARKER_LEN && matches!(after, ':' | '(');
    let known = !is_identifier_char(after)
        && KNOWN_MARKERS
            .iter()
            .any(|marker| marker.len() == len && (0..len).all(|i| doc.byte_at(start + i) == marker.as_bytes()[i]));
    if !(generic || known) {
        return false;
    }

    let outer = sc.state();
    sc.set_state(Style::TaskMarker);
    sc.advance(len);
    sc.set_state(outer);
    *visible_chars += len;
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tint_core::TextDocument;

    use super::*;

    /// Run the marker check at `at` inside a line comment starting at 0.
    fn marker_span(text: &str, at: usize, visible: usize) -> Option<(usize, usize)> {
        let mut doc = TextDocument::new(text);
        let found = {
            let mut sc = StyleContext::new(&mut doc, 0, text.len(), Style::CommentLine);
            sc.advance(at);
            let mut visible_chars = visible;
            let found = highlight_task_marker(&mut sc, &mut visible_chars, 0);
            sc.complete();
            found
        };
        if !found {
            return None;
        }
        let start = doc.styles().iter().position(|&s| s == Style::TaskMarker)?;
        let len = doc.styles()[start..]
            .iter()
            .take_while(|&&s| s == Style::TaskMarker)
            .count();
        Some((start, start + len))
    }

    #[test]
    fn known_marker_after_comment_opener() {
        assert_eq!(marker_span("// TODO fix", 3, 2), Some((3, 7)));
    }

    #[test]
    fn generic_marker_needs_colon_or_paren() {
        assert_eq!(marker_span("// PERF: slow", 3, 2), Some((3, 7)));
        assert_eq!(marker_span("// PERF slow", 3, 2), None);
        assert_eq!(marker_span("// REVIEW(ann): x", 3, 2), Some((3, 9)));
    }

    #[test]
    fn short_or_glued_words_are_not_markers() {
        assert_eq!(marker_span("// OK: fine", 3, 2), None);
        assert_eq!(marker_span("// TODOS", 3, 2), None);
        assert_eq!(marker_span("// TODOx", 3, 2), None);
    }

    #[test]
    fn marker_must_lead_the_comment() {
        assert_eq!(marker_span("// see TODO", 7, 5), None);
    }

    #[test]
    fn context_resumes_comment_style_after_marker() {
        let text = "// FIXME: now";
        let mut doc = TextDocument::new(text);
        {
            let mut sc = StyleContext::new(&mut doc, 0, text.len(), Style::CommentLine);
            sc.advance(3);
            let mut visible = 2;
            assert!(highlight_task_marker(&mut sc, &mut visible, 0));
            assert_eq!(visible, 7);
            assert_eq!(sc.ch(), ':');
            assert_eq!(sc.state(), Style::CommentLine);
            sc.complete();
        }
        assert_eq!(doc.styles()[8], Style::CommentLine);
    }
}
