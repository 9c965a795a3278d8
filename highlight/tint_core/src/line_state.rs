//! Per-line scanner state persisted between invocations.
//!
//! The scanner works with the structured [`LineState`]; only the document
//! storage sees the packed `u32`. Packed layout:
//!
//! ```text
//!  31      26      21      16      11  8       0
//!  +-+-------+-------+-------+-------+---+--------+
//!  |0| nest3 | nest2 | nest1 | nest0 |cnt| flags  |
//!  +-+-------+-------+-------+-------+---+--------+
//! ```
//!
//! `nest0` is the outermost persisted entry. When the stack is deeper than
//! [`MAX_PERSISTED_NESTING`], the innermost entries win: the scanner only
//! needs them to resume the current line, and the outer ones are rebuilt
//! as `Default` when popped.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::Style;

bitflags! {
    /// Line-level facts recorded by a colouriser for the folder and for
    /// the next line.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct LineFlags: u8 {
        /// The line is a comment and nothing else.
        const LINE_COMMENT = 1 << 0;
        /// The line starts with an import statement.
        const IMPORT = 1 << 1;
        /// The line continues the previous one (Vim `\` lines).
        const CONTINUATION = 1 << 2;
        /// An autocmd is open; carried into the next line.
        const AUTO_COMMAND = 1 << 3;
        /// The file declared `vim9script`; carried into the next line.
        const VIM9_SCRIPT = 1 << 4;
    }
}

/// Stack of outer styles for open interpolations, innermost last.
pub type NestedStates = SmallVec<[Style; 4]>;

/// Maximum number of nested entries that survive a line boundary.
pub const MAX_PERSISTED_NESTING: usize = 4;

const FLAGS_MASK: u32 = 0xFF;
const COUNT_SHIFT: u32 = 8;
const COUNT_MASK: u32 = 0b111;
const NEST_SHIFT: u32 = 11;
const NEST_BITS: u32 = 5;
const NEST_MASK: u32 = (1 << NEST_BITS) - 1;

/// State recorded at the end of a line.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct LineState {
    pub flags: LineFlags,
    pub nested: NestedStates,
}

impl LineState {
    pub fn new(flags: LineFlags) -> Self {
        LineState {
            flags,
            nested: NestedStates::new(),
        }
    }

    /// Pack into the storage word.
    ///
    /// Styles that cannot be packed (discriminant of 32 or more) are
    /// stored as `Default`; colourisers never push them.
    pub fn pack(&self) -> u32 {
        let skip = self.nested.len().saturating_sub(MAX_PERSISTED_NESTING);
        let kept = &self.nested[skip..];
        let mut raw = u32::from(self.flags.bits());
        raw |= (kept.len() as u32) << COUNT_SHIFT;
        for (i, style) in kept.iter().enumerate() {
            let code = if style.is_nestable() {
                u32::from(style.as_u8())
            } else {
                0
            };
            raw |= code << (NEST_SHIFT + NEST_BITS * i as u32);
        }
        raw
    }

    /// Inverse of [`LineState::pack`]. Unknown bits are ignored.
    pub fn unpack(raw: u32) -> Self {
        let flags = LineFlags::from_bits_truncate((raw & FLAGS_MASK) as u8);
        let count = ((raw >> COUNT_SHIFT) & COUNT_MASK) as usize;
        let nested = (0..count.min(MAX_PERSISTED_NESTING))
            .map(|i| {
                let code = (raw >> (NEST_SHIFT + NEST_BITS * i as u32)) & NEST_MASK;
                Style::from_u8(code as u8).unwrap_or_default()
            })
            .collect();
        LineState { flags, nested }
    }

    /// Flags of a packed word, without decoding the nested stack.
    #[inline]
    pub fn flags_of(raw: u32) -> LineFlags {
        LineFlags::from_bits_truncate((raw & FLAGS_MASK) as u8)
    }
}
