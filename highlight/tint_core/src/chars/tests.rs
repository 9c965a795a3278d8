use super::*;

// === Identifiers ===

#[test]
fn identifier_ascii() {
    assert!(is_identifier_start('a'));
    assert!(is_identifier_start('_'));
    assert!(!is_identifier_start('1'));
    assert!(is_identifier_char('1'));
    assert!(!is_identifier_char('-'));
    assert!(!is_identifier_char('é'));
}

#[test]
fn identifier_extended_accepts_non_ascii() {
    assert!(is_identifier_start_ex('é'));
    assert!(is_identifier_char_ex('名'));
    assert!(!is_identifier_start_ex('$'));
    assert!(!is_identifier_char_ex('\0'));
}

// === Digits ===

#[test]
fn radix_digits() {
    assert!(is_octal_digit('7'));
    assert!(!is_octal_digit('8'));
    assert!(is_hex_digit('f'));
    assert!(is_hex_digit('F'));
    assert!(!is_hex_digit('g'));
    assert!(is_octal_or_hex('a', true));
    assert!(!is_octal_or_hex('a', false));
}

#[test]
fn number_start() {
    assert!(is_number_start('4', 'x'));
    assert!(is_number_start('.', '5'));
    assert!(!is_number_start('.', 'x'));
    assert!(!is_number_start('x', '1'));
}

#[test]
fn decimal_number_continuation() {
    assert!(is_decimal_number('1', '2', ' '));
    assert!(is_decimal_number('e', '-', '3'));
    assert!(!is_decimal_number('1', '-', '3'));
    assert!(is_decimal_number('1', '.', '5'));
    assert!(!is_decimal_number('1', '.', '.'));
    assert!(!is_decimal_number('p', '+', '1'));
    assert!(is_decimal_number_ex('p', '+', '1'));
    assert!(is_decimal_number_ex('P', '-', '1'));
}

// === Whitespace and punctuation ===

#[test]
fn whitespace() {
    for ch in [' ', '\t', '\n', '\r', '\x0b', '\x0c'] {
        assert!(is_space_char(ch), "{ch:?}");
    }
    assert!(!is_space_char('\0'));
    assert!(is_space_or_tab('\t'));
    assert!(!is_space_or_tab('\n'));
    assert!(is_eol_char('\r'));
}

#[test]
fn graphic_is_printable_ascii_without_space() {
    assert!(is_graphic('!'));
    assert!(is_graphic('~'));
    assert!(!is_graphic(' '));
    assert!(!is_graphic('\x7f'));
    assert!(!is_graphic('é'));
}

#[test]
fn context_predicates() {
    assert!(is_jump_label_prev_char('{'));
    assert!(!is_jump_label_prev_char('?'));
    assert!(is_comment_tag_prev('*'));
    assert!(!is_comment_tag_prev('a'));
    assert!(is_invalid_url_char('"'));
    assert!(!is_invalid_url_char('/'));
    assert!(is_task_marker_prev(' '));
    assert!(!is_task_marker_prev('x'));
}

#[test]
fn utf8_width_from_lead_byte() {
    assert_eq!(utf8_char_width(b'a'), 1);
    assert_eq!(utf8_char_width(0xC3), 2);
    assert_eq!(utf8_char_width(0xE6), 3);
    assert_eq!(utf8_char_width(0xF0), 4);
    assert_eq!(utf8_char_width(0x80), 1);
    assert_eq!(utf8_char_width(0xFF), 1);
}
