use tint_core::{Document, FoldLevel, LineFlags, LineState, Style, FOLD_LEVEL_BASE};

use crate::lookaround::brace_on_next_line;

/// Line flags the folder compares between neighbouring lines.
#[derive(Copy, Clone, Default)]
struct FoldLineState {
    line_comment: i32,
    import: i32,
}

impl FoldLineState {
    fn from_raw(raw: u32) -> Self {
        let flags = LineState::flags_of(raw);
        FoldLineState {
            line_comment: i32::from(flags.contains(LineFlags::LINE_COMMENT)),
            import: i32::from(flags.contains(LineFlags::IMPORT)),
        }
    }
}

/// Fold by brackets, multi-line comments and strings, and runs of comment
/// or import lines.
pub(super) fn fold_java<D: Document + ?Sized>(
    doc: &mut D,
    start: usize,
    length: usize,
    init_style: Style,
) {
    let end = start.saturating_add(length).min(doc.len());
    let mut pos = start.min(end);
    let mut line = doc.line_of(pos);
    let mut fold_prev = FoldLineState::default();
    let mut level_current = i32::from(FOLD_LEVEL_BASE);
    let mut style = init_style;
    if line > 0 {
        level_current = i32::from(FoldLevel::next_of(doc.fold_level(line - 1)));
        fold_prev = FoldLineState::from_raw(doc.line_state(line - 1));
        let checked_brace = fold_prev.line_comment == 0 && fold_prev.import == 0;
        if let Some(brace) = brace_on_next_line(&*doc, line - 1, Style::Operator)
            .filter(|_| checked_brace)
        {
            // Already counted on the previous line.
            pos = brace + 1;
            style = Style::Operator;
        }
    }

    let mut level_next = level_current;
    let mut fold_current = FoldLineState::from_raw(doc.line_state(line));
    let mut line_start_next = doc.line_start(line + 1).min(end);
    let mut style_next = doc.style_at(pos);
    let mut visible = false;

    while pos < end {
        let style_prev = style;
        style = style_next;
        pos += 1;
        style_next = doc.style_at(pos);

        match style {
            Style::CommentBlock
            | Style::CommentBlockDoc
            | Style::TripleString
            | Style::TripleTemplate => {
                if style != style_prev {
                    level_next += 1;
                }
                if style != style_next {
                    level_next -= 1;
                }
            }
            Style::Operator | Style::OperatorNested => match doc.byte_at(pos - 1) {
                b'{' | b'[' | b'(' => level_next += 1,
                b'}' | b']' | b')' => level_next -= 1,
                _ => {}
            },
            _ => {}
        }

        if !visible && !style.is_space_equiv() {
            visible = true;
        }

        if pos == line_start_next {
            let fold_next = FoldLineState::from_raw(doc.line_state(line + 1));
            level_next = level_next.max(i32::from(FOLD_LEVEL_BASE));
            if fold_current.line_comment != 0 {
                level_next += fold_next.line_comment - fold_prev.line_comment;
            } else if fold_current.import != 0 {
                level_next += fold_next.import - fold_prev.import;
            } else if visible {
                if let Some(brace) = brace_on_next_line(&*doc, line, Style::Operator) {
                    level_next += 1;
                    pos = brace + 1;
                    style = Style::Operator;
                    style_next = doc.style_at(pos);
                }
            }

            doc.set_fold_level(line, FoldLevel::from_depths(level_current, level_next).pack());

            line += 1;
            line_start_next = doc.line_start(line + 1).min(end);
            level_current = level_next;
            fold_prev = fold_current;
            fold_current = fold_next;
            visible = false;
        }
    }
}
