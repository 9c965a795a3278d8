//! Character classification shared by every colouriser.
//!
//! All predicates are pure and work on a decoded `char`. The document
//! reader returns `'\0'` past the end, which every predicate rejects.

/// ASCII letter, digit or `_`.
#[inline]
pub const fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// ASCII letter or `_`.
#[inline]
pub const fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Like [`is_identifier_char`], but any non-ASCII character also counts.
#[inline]
pub const fn is_identifier_char_ex(ch: char) -> bool {
    is_identifier_char(ch) || ch as u32 >= 0x80
}

/// Like [`is_identifier_start`], but any non-ASCII character also counts.
#[inline]
pub const fn is_identifier_start_ex(ch: char) -> bool {
    is_identifier_start(ch) || ch as u32 >= 0x80
}

#[inline]
pub const fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub const fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

#[inline]
pub const fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

#[inline]
pub const fn is_octal_or_hex(ch: char, hex: bool) -> bool {
    if hex {
        is_hex_digit(ch)
    } else {
        is_octal_digit(ch)
    }
}

#[inline]
pub const fn is_lower(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

#[inline]
pub const fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Space, tab, and the vertical whitespace `\n \x0b \x0c \r`.
#[inline]
pub const fn is_space_char(ch: char) -> bool {
    ch == ' ' || matches!(ch, '\t'..='\r')
}

#[inline]
pub const fn is_space_or_tab(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

#[inline]
pub const fn is_eol_char(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

/// Printable ASCII excluding space.
#[inline]
pub const fn is_graphic(ch: char) -> bool {
    matches!(ch, '!'..='~')
}

/// A digit, or a `.` directly followed by a digit.
#[inline]
pub const fn is_number_start(ch: char, ch_next: char) -> bool {
    is_digit(ch) || (ch == '.' && is_digit(ch_next))
}

/// Whether `ch` continues a decimal number that began earlier.
///
/// Accepts identifier characters (suffixes, hex digits, separators), a
/// sign right after an `e`/`E` exponent, and a single `.` that is not the
/// start of a `..` range.
#[inline]
pub const fn is_decimal_number(ch_prev: char, ch: char, ch_next: char) -> bool {
    is_identifier_char(ch)
        || ((ch == '+' || ch == '-') && (ch_prev == 'e' || ch_prev == 'E'))
        || (ch == '.' && ch_next != '.')
}

/// [`is_decimal_number`] that also accepts binary `p`/`P` exponents.
#[inline]
pub const fn is_decimal_number_ex(ch_prev: char, ch: char, ch_next: char) -> bool {
    is_decimal_number(ch_prev, ch, ch_next)
        || ((ch == '+' || ch == '-') && (ch_prev == 'p' || ch_prev == 'P'))
}

/// Characters after which `word:` reads as a jump label.
#[inline]
pub const fn is_jump_label_prev_char(ch: char) -> bool {
    matches!(ch, ';' | '{' | '}')
}

/// Characters that may precede a `@tag` in a doc comment.
#[inline]
pub const fn is_comment_tag_prev(ch: char) -> bool {
    ch as u32 <= ' ' as u32 || matches!(ch, '/' | '*' | '!')
}

/// Characters that end a bare URL inside a string.
#[inline]
pub const fn is_invalid_url_char(ch: char) -> bool {
    ch as u32 <= ' ' as u32 || matches!(ch, '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}')
}

/// Characters after which a task marker may start in a comment.
#[inline]
pub const fn is_task_marker_prev(ch: char) -> bool {
    ch as u32 <= ' ' as u32 || matches!(ch, '/' | '*' | '!' | '#' | '-' | '"' | '(' | '[')
}

/// UTF-8 byte length of the character starting with `first`.
///
/// Continuation and invalid lead bytes count as one byte so that a
/// malformed sequence still advances.
#[inline]
pub const fn utf8_char_width(first: u8) -> usize {
    match first {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

#[cfg(test)]
mod tests;
