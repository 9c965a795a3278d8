//! Bounded lookaround over already-styled text.

use tint_core::chars::{is_space_char, is_space_or_tab};
use tint_core::{Document, Style};

/// Last visible character before `pos` on the same line.
///
/// Whitespace and characters in space-equivalent styles are skipped.
/// Returns `'\0'` when the line has nothing visible before `pos`.
pub(crate) fn lookback_non_white<D: Document + ?Sized>(doc: &D, pos: usize) -> char {
    let line_start = doc.line_start(doc.line_of(pos));
    let mut pos = pos;
    while pos > line_start {
        pos = doc.char_start_before(pos);
        let (ch, _) = doc.char_at(pos);
        if !is_space_char(ch) && !doc.style_at(pos).is_space_equiv() {
            return ch;
        }
    }
    '\0'
}

/// Find an opening brace on `line + 1` that belongs to `line`.
///
/// Matches when the next line is a single `{` styled as `operator`
/// (surrounded only by whitespace and comments), and `line` has visible
/// content that does not already end a statement or open a block.
/// Returns the brace position.
pub(crate) fn brace_on_next_line<D: Document + ?Sized>(
    doc: &D,
    line: usize,
    operator: Style,
) -> Option<usize> {
    if line + 1 >= doc.line_count() {
        return None;
    }
    let next_start = doc.line_start(line + 1);
    let next_end = doc.line_start(line + 2);

    let mut brace = next_start;
    while brace < next_end && is_space_or_tab(char::from(doc.byte_at(brace))) {
        brace += 1;
    }
    if brace >= next_end || doc.byte_at(brace) != b'{' || doc.style_at(brace) != operator {
        return None;
    }
    let rest_is_blank = (brace + 1..next_end).all(|pos| {
        is_space_char(char::from(doc.byte_at(pos))) || doc.style_at(pos).is_space_equiv()
    });
    if !rest_is_blank {
        return None;
    }

    let line_start = doc.line_start(line);
    let last = (line_start..next_start).rev().find(|&pos| {
        !is_space_char(char::from(doc.byte_at(pos))) && !doc.style_at(pos).is_space_equiv()
    })?;
    if doc.style_at(last) == operator && matches!(doc.byte_at(last), b'{' | b'}' | b';' | b',') {
        return None;
    }
    Some(brace)
}

#[cfg(test)]
mod tests {
    use tint_core::TextDocument;

    use super::*;

    fn styled(text: &str, styles: &[(usize, usize, Style)]) -> TextDocument {
        let mut doc = TextDocument::new(text);
        for &(start, end, style) in styles {
            doc.set_style_range(start..end, style);
        }
        doc
    }

    #[test]
    fn brace_after_condition_belongs_to_previous_line() {
        let doc = styled(
            "if (x)\n{\n}\n",
            &[(0, 2, Style::Keyword), (3, 4, Style::Operator), (5, 6, Style::Operator), (7, 8, Style::Operator)],
        );
        assert_eq!(brace_on_next_line(&doc, 0, Style::Operator), Some(7));
    }

    #[test]
    fn brace_with_trailing_comment() {
        let doc = styled(
            "f()\n  { // body\n",
            &[(0, 1, Style::Function), (1, 3, Style::Operator), (6, 7, Style::Operator), (8, 15, Style::CommentLine)],
        );
        assert_eq!(brace_on_next_line(&doc, 0, Style::Operator), Some(6));
    }

    #[test]
    fn statement_end_keeps_brace_on_its_line() {
        let doc = styled("x;\n{\n", &[(0, 1, Style::Identifier), (1, 2, Style::Operator), (3, 4, Style::Operator)]);
        assert_eq!(brace_on_next_line(&doc, 0, Style::Operator), None);
    }

    #[test]
    fn brace_followed_by_code_is_not_moved() {
        let doc = styled("f()\n{ x\n", &[(1, 3, Style::Operator), (4, 5, Style::Operator), (6, 7, Style::Identifier)]);
        assert_eq!(brace_on_next_line(&doc, 0, Style::Operator), None);
    }

    #[test]
    fn comment_only_line_has_no_content() {
        let doc = styled("// c\n{\n", &[(0, 4, Style::CommentLine), (5, 6, Style::Operator)]);
        assert_eq!(brace_on_next_line(&doc, 0, Style::Operator), None);
    }

    #[test]
    fn brace_inside_string_is_ignored() {
        let doc = styled("f()\n{\n", &[(1, 3, Style::Operator), (4, 5, Style::String)]);
        assert_eq!(brace_on_next_line(&doc, 0, Style::Operator), None);
    }

    #[test]
    fn last_line_has_no_next() {
        let doc = styled("f()", &[]);
        assert_eq!(brace_on_next_line(&doc, 0, Style::Operator), None);
    }

    #[test]
    fn lookback_skips_comments_and_stops_at_line_start() {
        let doc = styled(
            "a;\nb /* c */ ",
            &[(0, 1, Style::Identifier), (1, 2, Style::Operator), (3, 4, Style::Identifier), (5, 12, Style::CommentBlock)],
        );
        assert_eq!(lookback_non_white(&doc, 13), 'b');
        assert_eq!(lookback_non_white(&doc, 3), '\0');
        assert_eq!(lookback_non_white(&doc, 2), ';');
    }
}
