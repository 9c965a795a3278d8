//! `java.util.Formatter` specifiers inside string literals.
//!
//! Grammar: `%[argument_index$|<][flags][width][.precision]conversion`,
//! plus `%%` and the two-letter date/time conversions `%tX` / `%TX`.

use tint_core::chars::{is_digit, is_hex_digit, is_space_or_tab};
use tint_core::{Document, StyleContext};

fn is_conversion(ch: char) -> bool {
    matches!(
        ch,
        'a' | 'A' | 'b' | 'B' | 'c' | 'C' | 'd' | 'e' | 'E' | 'f' | 'g' | 'G' | 'h' | 'H' | 'n' | 'o' | 's' | 'S' | 'x' | 'X'
    )
}

fn is_date_time_conversion(ch: char) -> bool {
    matches!(
        ch,
        // time
        'H' | 'I' | 'k' | 'l' | 'M' | 'S' | 'L' | 'N' | 'p' | 'z' | 'Z' | 's' | 'Q'
        // date
        | 'B' | 'b' | 'h' | 'A' | 'a' | 'C' | 'Y' | 'y' | 'j' | 'm' | 'd' | 'e'
        // composites
        | 'R' | 'T' | 'r' | 'D' | 'F' | 'c'
    )
}

/// Length of the format specifier starting at the current `%`, or `0`.
///
/// Inside a URL, `%` followed by a hex digit is percent encoding. A `%`
/// between a digit and a space reads as a percentage (`5% off`).
pub(super) fn format_specifier_len<D: Document + ?Sized>(
    sc: &StyleContext<'_, D>,
    inside_url: bool,
) -> usize {
    let ch_next = sc.ch_next();
    if ch_next == '%' {
        return 2;
    }
    if inside_url && is_hex_digit(ch_next) {
        return 0;
    }
    if is_space_or_tab(ch_next) && is_digit(sc.ch_prev()) {
        return 0;
    }

    let doc = sc.doc();
    let at = |pos: usize| char::from(doc.byte_at(pos));
    let start = sc.pos();
    let mut pos = start + 1;

    // [argument_index$] or relative index `<`
    if ch_next == '<' {
        pos += 1;
    }
    let mut ch = at(pos);
    while is_digit(ch) {
        pos += 1;
        ch = at(pos);
    }
    if ch == '$' && is_digit(ch_next) {
        pos += 1;
        ch = at(pos);
    }
    // [flags]
    while matches!(ch, ' ' | '+' | '-' | '#' | '0' | '(' | ',') {
        pos += 1;
        ch = at(pos);
    }
    // [width]
    while is_digit(ch) {
        pos += 1;
        ch = at(pos);
    }
    // [.precision]
    if ch == '.' {
        pos += 1;
        ch = at(pos);
        while is_digit(ch) {
            pos += 1;
            ch = at(pos);
        }
    }

    if (ch == 't' || ch == 'T') && is_date_time_conversion(at(pos + 1)) {
        return pos - start + 2;
    }
    if is_conversion(ch) {
        return pos - start + 1;
    }
    0
}

#[cfg(test)]
mod tests {
    use tint_core::{Style, TextDocument};

    use super::*;

    fn spec_len(text: &str, url: bool) -> usize {
        let at = text.find('%').unwrap_or(0);
        let mut doc = TextDocument::new(text);
        let mut sc = StyleContext::new(&mut doc, 0, text.len(), Style::String);
        sc.advance(at);
        format_specifier_len(&sc, url)
    }

    #[test]
    fn simple_conversions() {
        assert_eq!(spec_len("%d", false), 2);
        assert_eq!(spec_len("%s!", false), 2);
        assert_eq!(spec_len("%%", false), 2);
        assert_eq!(spec_len("%q", false), 0);
    }

    #[test]
    fn full_grammar() {
        assert_eq!(spec_len("%1$-08.3f", false), 9);
        assert_eq!(spec_len("%<s", false), 3);
        assert_eq!(spec_len("%,d", false), 3);
        assert_eq!(spec_len("%(5.2e", false), 6);
    }

    #[test]
    fn date_time_conversions() {
        assert_eq!(spec_len("%tY", false), 3);
        assert_eq!(spec_len("%1$TH", false), 5);
        assert_eq!(spec_len("%tq", false), 0);
    }

    #[test]
    fn percentage_is_not_a_specifier() {
        assert_eq!(spec_len("50% off", false), 0);
        assert_eq!(spec_len("a% d", false), 3);
    }

    #[test]
    fn percent_encoding_inside_url() {
        assert_eq!(spec_len("%20a", true), 0);
        assert_eq!(spec_len("%20a", false), 4);
    }
}
