use pretty_assertions::assert_eq;
use tint_core::{Document, FoldLevel, LineFlags, LineState, Style, TextDocument, FOLD_LEVEL_BASE};

use super::VimLexer;
use crate::{highlight_all, rehighlight_from_line};

const BASE: u16 = FOLD_LEVEL_BASE;

fn lex(text: &str) -> TextDocument {
    let mut doc = TextDocument::new(text);
    highlight_all(&VimLexer::default(), &mut doc);
    doc
}

fn nth_style_of(doc: &TextDocument, needle: &str, n: usize) -> Style {
    let start = doc
        .text()
        .match_indices(needle)
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or_else(|| panic!("{needle:?} #{n} not in {:?}", doc.text()));
    let styles = &doc.styles()[start..start + needle.len()];
    assert!(
        styles.iter().all(|&s| s == styles[0]),
        "{needle:?} is not uniformly styled: {styles:?}"
    );
    styles[0]
}

fn style_of(doc: &TextDocument, needle: &str) -> Style {
    nth_style_of(doc, needle, 0)
}

fn flags(doc: &TextDocument, line: usize) -> LineFlags {
    LineState::flags_of(doc.line_state(line))
}

// === Commands ===

#[test]
fn comment_line_then_command() {
    let doc = lex("\" comment\nlet x = 1");
    assert_eq!(style_of(&doc, "\" comment"), Style::CommentLine);
    assert!(flags(&doc, 0).contains(LineFlags::LINE_COMMENT));
    assert_eq!(style_of(&doc, "let"), Style::Keyword);
    assert_eq!(style_of(&doc, "x"), Style::Identifier);
    assert_eq!(style_of(&doc, "="), Style::Operator);
    assert_eq!(style_of(&doc, "1"), Style::Number);
    assert!(!flags(&doc, 1).contains(LineFlags::LINE_COMMENT));
}

#[test]
fn keywords_only_lead_a_command() {
    let doc = lex("if x | let y = 1 | endif\necho let");
    assert_eq!(style_of(&doc, "if"), Style::Keyword);
    assert_eq!(nth_style_of(&doc, "let", 0), Style::Keyword);
    assert_eq!(style_of(&doc, "endif"), Style::Keyword);
    assert_eq!(style_of(&doc, "echo"), Style::Keyword);
    assert_eq!(nth_style_of(&doc, "let", 1), Style::KeywordDemoted);
}

#[test]
fn word_at_end_of_document_is_classified() {
    let doc = lex("let x = 1 | echo");
    assert_eq!(style_of(&doc, "echo"), Style::Keyword);

    let doc = lex("if x\nendif");
    assert_eq!(style_of(&doc, "endif"), Style::Keyword);
    assert_eq!(
        doc.fold_levels()[1],
        FoldLevel::from_depths(i32::from(BASE) + 1, i32::from(BASE))
    );
}

#[test]
fn export_def() {
    let doc = lex("export def Foo()\nenddef");
    assert_eq!(style_of(&doc, "export"), Style::Keyword);
    assert_eq!(style_of(&doc, "def"), Style::Keyword);
    assert_eq!(style_of(&doc, "Foo"), Style::Function);
    assert_eq!(style_of(&doc, "enddef"), Style::Keyword);
}

#[test]
fn commands_and_calls() {
    let doc = lex("set number\ncall Foo(1)");
    assert_eq!(style_of(&doc, "set"), Style::Command);
    assert_eq!(style_of(&doc, "number"), Style::Identifier);
    assert_eq!(style_of(&doc, "call"), Style::Keyword);
    assert_eq!(style_of(&doc, "Foo"), Style::Function);
    assert_eq!(style_of(&doc, "("), Style::Operator);
}

// === Literals ===

#[test]
fn double_quoted_escapes() {
    let doc = lex("let s = \"a\\tb\\x41c\"");
    assert_eq!(style_of(&doc, "\"a"), Style::String);
    assert_eq!(style_of(&doc, "\\t"), Style::EscapeChar);
    assert_eq!(style_of(&doc, "b"), Style::String);
    assert_eq!(style_of(&doc, "\\x41"), Style::EscapeChar);
    assert_eq!(style_of(&doc, "c\""), Style::String);
}

#[test]
fn escaped_quote_does_not_close() {
    let doc = lex("echo \"a\\\"b\" x");
    assert_eq!(style_of(&doc, "\\\""), Style::EscapeChar);
    assert_eq!(style_of(&doc, "b\""), Style::String);
    assert_eq!(style_of(&doc, "x"), Style::Identifier);
}

#[test]
fn unknown_backslash_pair_is_string() {
    let doc = lex("echo \"\\q\"");
    assert_eq!(style_of(&doc, "\"\\q\""), Style::String);
}

#[test]
fn literal_string_doubles_quotes() {
    let doc = lex("let s = 'it''s'");
    assert_eq!(style_of(&doc, "'it"), Style::LiteralString);
    assert_eq!(style_of(&doc, "''"), Style::EscapeChar);
    assert_eq!(style_of(&doc, "s'"), Style::LiteralString);
}

#[test]
fn unterminated_string_ends_at_line_end() {
    let doc = lex("echo \"abc\nlet x");
    assert_eq!(style_of(&doc, "\"abc\n"), Style::String);
    assert_eq!(style_of(&doc, "let"), Style::Keyword);
}

#[test]
fn syntax_patterns_are_regex() {
    let doc = lex("syntax match Foo /a\\/[/]b/ contained\nlet x = a / b");
    assert_eq!(style_of(&doc, "syntax"), Style::Command);
    assert_eq!(style_of(&doc, "/a\\/[/]b/"), Style::Regex);
    assert_eq!(style_of(&doc, "contained"), Style::Identifier);
    let slash = doc.text().rfind('/').unwrap_or_default();
    assert_eq!(doc.style_at(slash), Style::Operator);
}

#[test]
fn variables_options_and_registers() {
    let doc = lex("let g:x = $HOME . &tabstop . @a");
    assert_eq!(style_of(&doc, "g"), Style::EnvVariable);
    assert_eq!(style_of(&doc, ":"), Style::Operator);
    assert_eq!(style_of(&doc, "x"), Style::Identifier);
    assert_eq!(style_of(&doc, "$HOME"), Style::EnvVariable);
    assert_eq!(style_of(&doc, "&tabstop"), Style::OptionName);
    assert_eq!(style_of(&doc, "@a"), Style::Register);
}

#[test]
fn blobs_and_numbers() {
    let doc = lex("let b = 0zFF00.ABCD\nlet n = 0x1F");
    assert_eq!(style_of(&doc, "0zFF00.ABCD"), Style::BlobHex);
    assert_eq!(style_of(&doc, "0x1F"), Style::Number);
}

// === Modes ===

#[test]
fn autocmd_mode_demotes_keywords_through_continuations() {
    let doc = lex("autocmd BufRead * if x\n  \\ | endif\necho 2");
    assert_eq!(style_of(&doc, "autocmd"), Style::Keyword);
    assert_eq!(style_of(&doc, "if"), Style::KeywordDemoted);
    assert_eq!(style_of(&doc, "endif"), Style::KeywordDemoted);
    assert_eq!(style_of(&doc, "echo"), Style::Keyword);
    assert_eq!(flags(&doc, 0), LineFlags::AUTO_COMMAND);
    assert_eq!(flags(&doc, 1), LineFlags::AUTO_COMMAND | LineFlags::CONTINUATION);
    assert_eq!(flags(&doc, 2), LineFlags::empty());
}

#[test]
fn vim9script_comments_and_strings() {
    let doc = lex("vim9script\n# comment\n\"text\"\ndef F()\nenddef");
    assert_eq!(style_of(&doc, "vim9script"), Style::Command);
    assert!(flags(&doc, 0).contains(LineFlags::VIM9_SCRIPT));
    assert_eq!(style_of(&doc, "# comment"), Style::CommentLine);
    assert!(flags(&doc, 1).contains(LineFlags::LINE_COMMENT | LineFlags::VIM9_SCRIPT));
    assert_eq!(style_of(&doc, "\"text\""), Style::String);
    assert_eq!(style_of(&doc, "def"), Style::Keyword);
    assert_eq!(style_of(&doc, "F"), Style::Function);
}

#[test]
fn hash_after_word_is_operator() {
    let doc = lex("let x = a#b");
    assert_eq!(style_of(&doc, "#"), Style::Operator);
}

#[test]
fn shebang() {
    let doc = lex("#!/usr/bin/vim -S\nset x");
    assert_eq!(style_of(&doc, "#!/usr/bin/vim -S"), Style::CommentLine);
    assert!(flags(&doc, 0).contains(LineFlags::LINE_COMMENT));
    assert_eq!(style_of(&doc, "set"), Style::Command);
}

// === Folding ===

const FUNCTION: &str = "function! F()\n  if x\n    echo 1\n  endif\nendfunction\n";

#[test]
fn block_keywords_fold() {
    let doc = lex(FUNCTION);
    let levels = doc.fold_levels();
    let depths: Vec<u16> = levels.iter().map(|l| l.depth()).collect();
    assert_eq!(depths, [BASE, BASE + 1, BASE + 2, BASE + 1, BASE, BASE]);
    let headers: Vec<bool> = levels.iter().map(|l| l.is_header()).collect();
    assert_eq!(headers, [true, true, false, false, false, false]);
}

#[test]
fn continuation_lines_fold() {
    let doc = lex("call F(1,\n  \\ 2)\nlet x = 1\n");
    let levels = doc.fold_levels();
    assert_eq!(levels[0], FoldLevel::from_depths(i32::from(BASE), i32::from(BASE) + 1));
    assert_eq!(levels[1], FoldLevel::from_depths(i32::from(BASE) + 1, i32::from(BASE)));
    assert_eq!(levels[2], FoldLevel::BASE);
}

#[test]
fn comment_runs_fold() {
    let doc = lex("\" a\n\" b\nlet x = 1\n");
    let levels = doc.fold_levels();
    assert!(levels[0].is_header());
    assert_eq!(levels[1], FoldLevel::from_depths(i32::from(BASE) + 1, i32::from(BASE)));
    assert_eq!(levels[2], FoldLevel::BASE);
}

#[test]
fn unmatched_end_stays_at_base() {
    let doc = lex("endif\nendif\n");
    assert!(doc.fold_levels().iter().all(|l| l.depth() == BASE));
}

#[test]
fn restart_matches_full_pass() {
    let lexer = VimLexer::default();
    let mut doc = lex(FUNCTION);
    let styles = doc.styles().to_vec();
    let levels = doc.fold_levels();
    for line in 1..5 {
        rehighlight_from_line(&lexer, &mut doc, line);
        assert_eq!(doc.styles(), styles.as_slice(), "restart at line {line}");
        assert_eq!(doc.fold_levels(), levels, "restart at line {line}");
    }
}
