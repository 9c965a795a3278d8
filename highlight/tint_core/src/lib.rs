//! Restartable scanning engine for syntax highlighting.
//!
//! This crate holds everything a colouriser needs that is not specific to
//! one language:
//!
//! - [`StyleContext`]: the cursor that walks a document range and writes
//!   styles lazily, span by span.
//! - [`LineState`]: the structured per-line record a colouriser leaves
//!   behind so that a later run can restart at any line boundary.
//! - [`FoldLevel`]: the per-line record a folder writes.
//! - [`Document`]: the host accessor, with [`TextDocument`] as an
//!   in-memory implementation.
//! - Character predicates, escape sub-states and keyword rules.
//!
//! No language knowledge lives here; see the `tint_lexers` crate.

pub mod chars;
mod context;
mod document;
mod escape;
mod fold_level;
mod keywords;
mod line_state;
mod style;

pub use context::{StyleContext, MAX_WORD_LEN};
pub use document::{Document, Span, TextDocument};
pub use escape::{EscapeSequence, Radix, SubState, SubStates};
pub use fold_level::{FoldLevel, FOLD_LEVEL_BASE, FOLD_LEVEL_HEADER, FOLD_LEVEL_NUMBER_MASK};
pub use keywords::{KeywordRules, WordList};
pub use line_state::{LineFlags, LineState, NestedStates, MAX_PERSISTED_NESTING};
pub use style::Style;
