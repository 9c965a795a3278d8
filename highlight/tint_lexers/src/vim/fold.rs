use tint_core::{Document, FoldLevel, LineFlags, LineState, Style, FOLD_LEVEL_BASE};

/// Longest keyword prefix the folder looks at (`endfunction` reads as
/// `endfunc`).
const MAX_FOLD_WORD_LEN: usize = 7;

#[derive(Copy, Clone, Default)]
struct FoldLineState {
    line_comment: i32,
    continuation: i32,
}

impl FoldLineState {
    fn from_raw(raw: u32) -> Self {
        let flags = LineState::flags_of(raw);
        FoldLineState {
            line_comment: i32::from(flags.contains(LineFlags::LINE_COMMENT)),
            continuation: i32::from(flags.contains(LineFlags::CONTINUATION)),
        }
    }
}

fn fold_delta(word: &[u8]) -> i32 {
    match word {
        b"if" | b"while" | b"for" | b"try" | b"def" => 1,
        _ if word.starts_with(b"fun") => 1,
        _ if word.starts_with(b"end") => -1,
        _ => 0,
    }
}

/// Fold by block keywords, comment runs and continuation lines.
pub(super) fn fold_vim<D: Document + ?Sized>(doc: &mut D, start: usize, length: usize) {
    let end = start.saturating_add(length).min(doc.len());
    let mut pos = start.min(end);
    let mut line = doc.line_of(pos);
    let mut fold_prev = FoldLineState::default();
    let mut level_current = i32::from(FOLD_LEVEL_BASE);
    if line > 0 {
        level_current = i32::from(FoldLevel::next_of(doc.fold_level(line - 1)));
        fold_prev = FoldLineState::from_raw(doc.line_state(line - 1));
    }

    let mut level_next = level_current;
    let mut fold_current = FoldLineState::from_raw(doc.line_state(line));
    let mut line_start_next = doc.line_start(line + 1).min(end);

    let mut word = [0u8; MAX_FOLD_WORD_LEN];
    let mut word_len = 0;

    let mut style_next = doc.style_at(pos);
    while pos < end {
        let style = style_next;
        pos += 1;
        style_next = doc.style_at(pos);

        if style == Style::Keyword {
            if word_len < MAX_FOLD_WORD_LEN {
                word[word_len] = doc.byte_at(pos - 1);
                word_len += 1;
            }
            if style_next != Style::Keyword {
                level_next += fold_delta(&word[..word_len]);
                word_len = 0;
            }
        }

        if pos == line_start_next {
            let fold_next = FoldLineState::from_raw(doc.line_state(line + 1));
            level_next = level_next.max(i32::from(FOLD_LEVEL_BASE));
            if fold_current.line_comment != 0 {
                level_next += fold_next.line_comment - fold_prev.line_comment;
            }
            level_next += fold_next.continuation - fold_current.continuation;

            let level = FoldLevel::from_depths(level_current, level_next).pack();
            if level != doc.fold_level(line) {
                doc.set_fold_level(line, level);
            }

            line += 1;
            line_start_next = doc.line_start(line + 1).min(end);
            level_current = level_next;
            fold_prev = fold_current;
            fold_current = fold_next;
        }
    }
}
