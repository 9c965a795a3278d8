//! Escape-sequence sub-scanner and the sub-state context stack.
//!
//! An escape is opened on the introducer (`\`) and consumes a bounded
//! number of characters afterwards. Each language decides how many and in
//! which radix; this module only counts them down. The character right
//! after the backslash is stepped over by the caller, and the budget also
//! counts the character that ends the escape, so `\u` with four hex digits
//! starts at five.
//!
//! Placeholders inside strings (`{0}`) share the mechanism: both remember
//! the style to resume, and both are pushed on [`SubStates`] instead of
//! being kept in loose locals.

use smallvec::SmallVec;

use crate::chars::is_octal_or_hex;
use crate::Style;

/// Digit alphabet accepted by a numeric escape.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Radix {
    Octal,
    Hex,
}

/// A pending escape sequence.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EscapeSequence {
    /// Style to resume when the escape ends.
    pub outer: Style,
    /// Characters still allowed, including the one being examined.
    pub digits_left: u8,
    pub radix: Radix,
}

impl EscapeSequence {
    /// Escape consuming exactly one character after the backslash.
    pub const fn simple(outer: Style) -> Self {
        Self::numeric(outer, 1, Radix::Octal)
    }

    /// Escape consuming up to `digits_left - 1` digits after a kind
    /// letter, or up to `digits_left` digits when the escape starts
    /// directly with a digit.
    pub const fn numeric(outer: Style, digits_left: u8, radix: Radix) -> Self {
        EscapeSequence {
            outer,
            digits_left,
            radix,
        }
    }

    /// Consume `ch` and report whether the escape ended before it.
    ///
    /// Returns `true` when the budget is exhausted or when `ch` is not a
    /// digit of the escape's radix. In both cases `ch` itself belongs to
    /// the outer style.
    pub fn at_escape_end(&mut self, ch: char) -> bool {
        self.digits_left = self.digits_left.saturating_sub(1);
        self.digits_left == 0 || !is_octal_or_hex(ch, self.radix == Radix::Hex)
    }
}

/// A nested lexical context inside a literal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SubState {
    Escape(EscapeSequence),
    /// `{digits}` positional placeholder.
    Placeholder { outer: Style },
}

impl SubState {
    /// Style to resume once this context closes.
    pub const fn outer(&self) -> Style {
        match self {
            SubState::Escape(esc) => esc.outer,
            SubState::Placeholder { outer } => *outer,
        }
    }
}

/// Stack of open sub-states, innermost last.
///
/// Sub-states never survive a line end, so they are not part of the
/// persisted line state.
#[derive(Clone, Default, Debug)]
pub struct SubStates {
    stack: SmallVec<[SubState; 2]>,
}

impl SubStates {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, sub: SubState) {
        self.stack.push(sub);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<SubState> {
        self.stack.pop()
    }

    /// Advance the innermost escape over `ch`.
    ///
    /// Returns the style to resume when the escape ended (and pops it).
    /// A missing or non-escape top also ends immediately, resuming
    /// `fallback`.
    pub fn escape_step(&mut self, ch: char, fallback: Style) -> Option<Style> {
        match self.stack.last_mut() {
            Some(SubState::Escape(esc)) => {
                if esc.at_escape_end(ch) {
                    let outer = esc.outer;
                    self.stack.pop();
                    Some(outer)
                } else {
                    None
                }
            }
            _ => Some(fallback),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
