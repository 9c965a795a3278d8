//! Per-line fold records.
//!
//! A record stores the depth at the start of a line (`current`) and the
//! depth carried into the next line (`next`). Packed form:
//! `current | next << 16 | HEADER` where `HEADER` marks a line that opens
//! a fold (`current < next`).

/// Depth of top-level lines.
pub const FOLD_LEVEL_BASE: u16 = 0x400;
/// Header bit in the packed record.
pub const FOLD_LEVEL_HEADER: u32 = 0x2000;
/// Largest representable depth.
pub const FOLD_LEVEL_NUMBER_MASK: u16 = 0x0FFF;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FoldLevel {
    pub current: u16,
    pub next: u16,
}

impl Default for FoldLevel {
    fn default() -> Self {
        FoldLevel::BASE
    }
}

impl FoldLevel {
    pub const BASE: FoldLevel = FoldLevel {
        current: FOLD_LEVEL_BASE,
        next: FOLD_LEVEL_BASE,
    };

    /// Build a record from running depths, clamping them into range.
    pub fn from_depths(current: i32, next: i32) -> Self {
        let clamp = |depth: i32| depth.clamp(0, i32::from(FOLD_LEVEL_NUMBER_MASK)) as u16;
        FoldLevel {
            current: clamp(current),
            next: clamp(next),
        }
    }

    /// Whether this line opens a fold.
    #[inline]
    pub fn is_header(self) -> bool {
        self.current < self.next
    }

    /// Depth the line itself sits at.
    ///
    /// A line that opens a block sits at the outer depth, and so does the
    /// line that closes it.
    #[inline]
    pub fn depth(self) -> u16 {
        self.current.min(self.next)
    }

    pub fn pack(self) -> u32 {
        let mut raw = u32::from(self.current) | u32::from(self.next) << 16;
        if self.is_header() {
            raw |= FOLD_LEVEL_HEADER;
        }
        raw
    }

    pub fn unpack(raw: u32) -> Self {
        FoldLevel {
            current: (raw as u16) & FOLD_LEVEL_NUMBER_MASK,
            next: ((raw >> 16) as u16) & FOLD_LEVEL_NUMBER_MASK,
        }
    }

    /// `next` of a packed record, the starting depth of the following line.
    #[inline]
    pub fn next_of(raw: u32) -> u16 {
        ((raw >> 16) as u16) & FOLD_LEVEL_NUMBER_MASK
    }
}
