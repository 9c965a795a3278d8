//! Language colourisers and folders built on `tint_core`.
//!
//! Each language provides a [`Lexer`]: a colouriser that styles a range
//! and records per-line state, and a folder that turns styles and line
//! states into fold records. Both passes can be restarted at any line
//! boundary, see [`rehighlight_from_line`].

use tint_core::{Document, Style};

pub mod java;
mod lookaround;
mod task_marker;
pub mod vim;

pub use java::{JavaKeywords, JavaLexer};
pub use vim::{VimKeywords, VimLexer};

/// A language's colouriser and folder.
///
/// Implementations hold only immutable configuration, so one instance can
/// serve many documents.
pub trait Lexer: Send + Sync {
    /// Short language name, e.g. `"java"`.
    fn name(&self) -> &'static str;

    /// Style `[start, start + length)` and write the state of every line
    /// whose end is crossed.
    ///
    /// `init_style` is the style of the character before `start`.
    fn colourise(&self, doc: &mut dyn Document, start: usize, length: usize, init_style: Style);

    /// Write fold records for the lines of `[start, start + length)`.
    ///
    /// Expects the range to have been colourised.
    fn fold(&self, doc: &mut dyn Document, start: usize, length: usize, init_style: Style);
}

/// Colourise and fold a whole document.
pub fn highlight_all(lexer: &dyn Lexer, doc: &mut dyn Document) {
    let len = doc.len();
    lexer.colourise(doc, 0, len, Style::Default);
    lexer.fold(doc, 0, len, Style::Default);
}

/// Re-run both passes from the start of `line` to the end of the document.
///
/// Everything before `line` must still hold the results of an earlier
/// run; the restart resumes from the recorded state of `line - 1`.
pub fn rehighlight_from_line(lexer: &dyn Lexer, doc: &mut dyn Document, line: usize) {
    let start = doc.line_start(line);
    let length = doc.len() - start;
    let init_style = style_before(doc, start);
    lexer.colourise(doc, start, length, init_style);
    lexer.fold(doc, start, length, init_style);
}

/// Style of the character before `pos`, `Default` at the start.
pub fn style_before(doc: &dyn Document, pos: usize) -> Style {
    if pos == 0 {
        Style::Default
    } else {
        doc.style_at(pos - 1)
    }
}
