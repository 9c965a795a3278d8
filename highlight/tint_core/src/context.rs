//! Style context: the cursor a colouriser drives over a document range.
//!
//! The context tracks the current character with one character of
//! lookbehind and one of lookahead, the current line, and the style of the
//! span that is still open. Styles are written lazily: [`StyleContext::set_state`]
//! closes the open span `[style_start, pos)` with the old style, while
//! [`StyleContext::change_state`] relabels the open span without closing
//! it. That pair is what lets a colouriser decide a word's style only
//! after it has seen the whole word.
//!
//! # Line Ends
//!
//! `at_line_end` is true on the last character of a line (the `\n` of a
//! terminated line, the final character of an unterminated last line) and
//! at the end of the document. `at_line_start` is true on the first
//! character of a line. Colourisers write their per-line state when
//! `at_line_end` is set, right before stepping onto the next line.
//!
//! # Bounds
//!
//! The context never moves past the end of the range it was created for,
//! and never rewinds behind the start of the open span. Every character
//! of the range is styled exactly once by the time
//! [`StyleContext::complete`] returns.

use crate::chars::is_space_char;
use crate::{Document, Style};

/// Longest word, in bytes, copied out for keyword lookup.
pub const MAX_WORD_LEN: usize = 128;

/// Scanner position over `[start, end)` of a document.
pub struct StyleContext<'d, D: Document + ?Sized> {
    doc: &'d mut D,
    end: usize,
    style_start: usize,
    state: Style,

    pos: usize,
    width: usize,
    width_next: usize,
    ch_prev: char,
    ch: char,
    ch_next: char,

    line: usize,
    line_start: usize,
    line_start_next: usize,
    at_line_start: bool,
    at_line_end: bool,
}

impl<'d, D: Document + ?Sized> StyleContext<'d, D> {
    /// Start a context at `start` with `init_style` as the open style.
    ///
    /// The range is intersected with the document.
    pub fn new(doc: &'d mut D, start: usize, length: usize, init_style: Style) -> Self {
        let len = doc.len();
        let start = start.min(len);
        let end = start.saturating_add(length).min(len);
        let mut sc = StyleContext {
            doc,
            end,
            style_start: start,
            state: init_style,
            pos: start,
            width: 1,
            width_next: 1,
            ch_prev: '\0',
            ch: '\0',
            ch_next: '\0',
            line: 0,
            line_start: 0,
            line_start_next: 0,
            at_line_start: false,
            at_line_end: false,
        };
        sc.seek(start);
        sc
    }

    // ─── Position ────────────────────────────────────────────────────

    /// Whether characters remain in the range.
    #[inline]
    pub fn more(&self) -> bool {
        self.pos < self.end
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn state(&self) -> Style {
        self.state
    }

    #[inline]
    pub fn ch(&self) -> char {
        self.ch
    }

    #[inline]
    pub fn ch_prev(&self) -> char {
        self.ch_prev
    }

    #[inline]
    pub fn ch_next(&self) -> char {
        self.ch_next
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Start of the line after the current one.
    #[inline]
    pub fn line_start_next(&self) -> usize {
        self.line_start_next
    }

    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    #[inline]
    pub fn at_line_end(&self) -> bool {
        self.at_line_end
    }

    /// Read access to the underlying document.
    #[inline]
    pub fn doc(&self) -> &D {
        &*self.doc
    }

    // ─── Movement ────────────────────────────────────────────────────

    /// Step to the next character. A no-op at the end of the range.
    pub fn forward(&mut self) {
        if self.pos >= self.end {
            return;
        }
        self.ch_prev = self.ch;
        self.pos += self.width;
        self.ch = self.ch_next;
        self.width = self.width_next;
        if self.pos >= self.line_start_next && self.line + 1 < self.doc.line_count() {
            self.line += 1;
            self.line_start = self.line_start_next;
            self.line_start_next = self.doc.line_start(self.line + 1);
        }
        let (ch_next, width_next) = self.doc.char_at(self.pos + self.width);
        self.ch_next = ch_next;
        self.width_next = width_next;
        self.update_line_flags();
    }

    /// Step over `n` characters.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.forward();
        }
    }

    /// Step back one character, but never behind the open span's start.
    pub fn rewind(&mut self) {
        if self.pos > self.style_start {
            let prev = self.doc.char_start_before(self.pos).max(self.style_start);
            self.seek(prev);
        }
    }

    fn seek(&mut self, pos: usize) {
        self.pos = pos;
        let (ch, width) = self.doc.char_at(pos);
        let (ch_next, width_next) = self.doc.char_at(pos + width);
        self.ch = ch;
        self.width = width;
        self.ch_next = ch_next;
        self.width_next = width_next;
        self.ch_prev = if pos == 0 {
            '\0'
        } else {
            self.doc.char_at(self.doc.char_start_before(pos)).0
        };
        self.line = self.doc.line_of(pos);
        self.line_start = self.doc.line_start(self.line);
        self.line_start_next = self.doc.line_start(self.line + 1);
        self.update_line_flags();
    }

    fn update_line_flags(&mut self) {
        self.at_line_start = self.pos == self.line_start;
        self.at_line_end = if self.pos >= self.end {
            self.pos >= self.doc.len()
        } else {
            self.pos + self.width >= self.line_start_next
        };
    }

    // ─── Styling ─────────────────────────────────────────────────────

    /// Close the open span with the current style and open `state` here.
    pub fn set_state(&mut self, state: Style) {
        self.colour_to(self.pos);
        self.state = state;
    }

    /// Relabel the open span without closing it.
    #[inline]
    pub fn change_state(&mut self, state: Style) {
        self.state = state;
    }

    /// Step once, then [`StyleContext::set_state`].
    pub fn forward_set_state(&mut self, state: Style) {
        self.forward();
        self.set_state(state);
    }

    /// Style the remainder of the range with the current style.
    pub fn complete(&mut self) {
        self.colour_to(self.end);
        tracing::trace!(end = self.end, state = ?self.state, "style context complete");
    }

    fn colour_to(&mut self, pos: usize) {
        let pos = pos.min(self.end);
        if pos > self.style_start {
            self.doc.set_style_range(self.style_start..pos, self.state);
            self.style_start = pos;
        }
    }

    /// Length in bytes of the open span.
    #[inline]
    pub fn length_current(&self) -> usize {
        self.pos - self.style_start
    }

    /// Copy the open span's text into `buf`.
    ///
    /// Returns `None` when the span is longer than [`MAX_WORD_LEN`] bytes
    /// or is not valid UTF-8.
    pub fn current_text<'b>(&self, buf: &'b mut [u8; MAX_WORD_LEN]) -> Option<&'b str> {
        let len = self.length_current();
        if len > MAX_WORD_LEN {
            return None;
        }
        for (i, slot) in buf.iter_mut().take(len).enumerate() {
            *slot = self.doc.byte_at(self.style_start + i);
        }
        std::str::from_utf8(&buf[..len]).ok()
    }

    // ─── Lookahead ───────────────────────────────────────────────────

    #[inline]
    pub fn matches(&self, ch: char, ch_next: char) -> bool {
        self.ch == ch && self.ch_next == ch_next
    }

    pub fn matches3(&self, ch: char, ch_next: char, ch_after: char) -> bool {
        self.matches(ch, ch_next) && self.relative(2) == ch_after
    }

    /// Whether the two characters after the current one are `a`, `b`.
    pub fn match_next(&self, a: char, b: char) -> bool {
        self.ch_next == a && self.relative(2) == b
    }

    /// Character `n` characters after the current one.
    pub fn relative(&self, n: usize) -> char {
        match n {
            0 => self.ch,
            1 => self.ch_next,
            _ => {
                let mut pos = self.pos + self.width + self.width_next;
                let mut ch = self.doc.char_at(pos);
                for _ in 2..n {
                    pos += ch.1;
                    ch = self.doc.char_at(pos);
                }
                ch.0
            }
        }
    }

    /// First non-whitespace character from here, looking no further than
    /// the end of the next line.
    ///
    /// With `ignore_current`, the current character is skipped even when
    /// it is not whitespace. Returns `'\0'` when nothing is found.
    pub fn doc_next_char(&self, ignore_current: bool) -> char {
        let limit = self.doc.line_start(self.line + 2);
        self.next_char_before(ignore_current, limit)
    }

    /// Like [`StyleContext::doc_next_char`], bounded to the current line.
    pub fn line_next_char(&self, ignore_current: bool) -> char {
        self.next_char_before(ignore_current, self.line_start_next)
    }

    fn next_char_before(&self, ignore_current: bool, limit: usize) -> char {
        if !ignore_current && !is_space_char(self.ch) {
            return self.ch;
        }
        let next_pos = self.pos + self.width;
        if next_pos >= limit {
            return '\0';
        }
        if !is_space_char(self.ch_next) {
            return self.ch_next;
        }
        let mut pos = next_pos + self.width_next;
        while pos < limit {
            let (ch, width) = self.doc.char_at(pos);
            if !is_space_char(ch) {
                return ch;
            }
            pos += width;
        }
        '\0'
    }

    // ─── Per-line records ────────────────────────────────────────────

    /// Store the packed state of the current line.
    pub fn set_line_state(&mut self, raw: u32) {
        self.doc.set_line_state(self.line, raw);
    }

    /// Packed state stored for `line`.
    pub fn line_state(&self, line: usize) -> u32 {
        self.doc.line_state(line)
    }
}
