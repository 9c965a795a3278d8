//! Host document accessor and an in-memory implementation.
//!
//! Colourisers and folders never own text. They read bytes, styles and
//! per-line records through [`Document`] and write results back through
//! it, so an editor can plug in its own buffer. [`TextDocument`] is the
//! reference implementation used by the CLI and the tests.

use std::ops::Range;

use memchr::memchr_iter;

use crate::chars::utf8_char_width;
use crate::{FoldLevel, Style};

/// Random-access view of a styled text buffer.
///
/// Out-of-range reads are not errors: bytes read as `0`, styles as
/// [`Style::Default`], line starts as [`Document::len`], line states as
/// `0` and fold levels as the packed [`FoldLevel::BASE`]. Out-of-range
/// writes are ignored.
pub trait Document {
    /// Length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn byte_at(&self, pos: usize) -> u8;

    fn style_at(&self, pos: usize) -> Style;

    fn set_style_range(&mut self, range: Range<usize>, style: Style);

    /// Number of lines. A trailing line terminator starts one more
    /// (empty) line.
    fn line_count(&self) -> usize;

    /// Line containing `pos`; positions past the end belong to the last
    /// line.
    fn line_of(&self, pos: usize) -> usize;

    fn line_start(&self, line: usize) -> usize;

    fn line_state(&self, line: usize) -> u32;

    fn set_line_state(&mut self, line: usize, state: u32);

    fn fold_level(&self, line: usize) -> u32;

    fn set_fold_level(&mut self, line: usize, level: u32);

    /// Decode the UTF-8 character at `pos`.
    ///
    /// Returns the character and its byte width. Invalid sequences decode
    /// as U+FFFD with width 1; past the end the result is `('\0', 1)`.
    fn char_at(&self, pos: usize) -> (char, usize) {
        if pos >= self.len() {
            return ('\0', 1);
        }
        let lead = self.byte_at(pos);
        if lead < 0x80 {
            return (char::from(lead), 1);
        }
        let width = utf8_char_width(lead);
        if width == 1 || pos + width > self.len() {
            return (char::REPLACEMENT_CHARACTER, 1);
        }
        let mut buf = [0u8; 4];
        for (i, slot) in buf.iter_mut().take(width).enumerate() {
            *slot = self.byte_at(pos + i);
        }
        match std::str::from_utf8(&buf[..width]) {
            Ok(s) => s
                .chars()
                .next()
                .map_or((char::REPLACEMENT_CHARACTER, 1), |ch| (ch, width)),
            Err(_) => (char::REPLACEMENT_CHARACTER, 1),
        }
    }

    /// Start position of the character that ends right before `pos`.
    ///
    /// Steps back over at most three continuation bytes. Returns `0` at
    /// the start of the document.
    fn char_start_before(&self, pos: usize) -> usize {
        if pos == 0 {
            return 0;
        }
        let mut start = pos - 1;
        let floor = pos.saturating_sub(4);
        while start > floor && (self.byte_at(start) & 0xC0) == 0x80 {
            start -= 1;
        }
        // A lone continuation byte decodes with width 1; only accept the
        // lead if it spans exactly up to `pos`.
        if start + self.char_at(start).1 == pos {
            start
        } else {
            pos - 1
        }
    }
}

/// A maximal run of characters sharing one style.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub style: Style,
}

/// In-memory styled text with LF or CRLF line ends.
#[derive(Clone, Debug, Default)]
pub struct TextDocument {
    text: String,
    styles: Vec<Style>,
    line_starts: Vec<usize>,
    line_states: Vec<u32>,
    fold_levels: Vec<u32>,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1));
        let lines = line_starts.len();
        TextDocument {
            styles: vec![Style::Default; text.len()],
            line_states: vec![0; lines],
            fold_levels: vec![FoldLevel::BASE.pack(); lines],
            line_starts,
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// One style per byte.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Text of a line, including its terminator.
    pub fn line_text(&self, line: usize) -> &str {
        let start = self.line_start(line);
        let end = self.line_start(line + 1);
        self.text.get(start..end).unwrap_or("")
    }

    /// Collapse per-byte styles into runs.
    pub fn spans(&self) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        for (pos, &style) in self.styles.iter().enumerate() {
            match spans.last_mut() {
                Some(span) if span.style == style => span.end = pos + 1,
                _ => spans.push(Span {
                    start: pos,
                    end: pos + 1,
                    style,
                }),
            }
        }
        spans
    }

    /// Unpacked fold record of every line.
    pub fn fold_levels(&self) -> Vec<FoldLevel> {
        self.fold_levels
            .iter()
            .map(|&raw| FoldLevel::unpack(raw))
            .collect()
    }
}

impl Document for TextDocument {
    #[inline]
    fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.text.as_bytes().get(pos).copied().unwrap_or(0)
    }

    #[inline]
    fn style_at(&self, pos: usize) -> Style {
        self.styles.get(pos).copied().unwrap_or_default()
    }

    fn set_style_range(&mut self, range: Range<usize>, style: Style) {
        let end = range.end.min(self.styles.len());
        if let Some(slots) = self.styles.get_mut(range.start.min(end)..end) {
            slots.fill(style);
        }
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_of(&self, pos: usize) -> usize {
        let pos = pos.min(self.text.len());
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.text.len())
    }

    fn line_state(&self, line: usize) -> u32 {
        self.line_states.get(line).copied().unwrap_or(0)
    }

    fn set_line_state(&mut self, line: usize, state: u32) {
        if let Some(slot) = self.line_states.get_mut(line) {
            *slot = state;
        }
    }

    fn fold_level(&self, line: usize) -> u32 {
        self.fold_levels
            .get(line)
            .copied()
            .unwrap_or(FoldLevel::BASE.pack())
    }

    fn set_fold_level(&mut self, line: usize, level: u32) {
        if let Some(slot) = self.fold_levels.get_mut(line) {
            *slot = level;
        }
    }
}
