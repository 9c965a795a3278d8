//! Vim script colouriser and folder.
//!
//! Vim has no block syntax to speak of: a keyword is only a keyword at the
//! start of a command, so the scanner counts visible characters per
//! physical line and per logical command (an unpaired `|` starts a new
//! one). `autocmd` and `vim9script` change how following lines read and
//! are carried to the next line through the line state.

use tint_core::chars::{
    is_decimal_number, is_eol_char, is_graphic, is_identifier_char, is_identifier_start,
    is_lower, is_number_start, is_octal_digit, is_space_char,
};
use tint_core::{
    Document, EscapeSequence, KeywordRules, LineFlags, LineState, Radix, Style, StyleContext,
    SubState, SubStates, WordList, MAX_WORD_LEN,
};

use crate::Lexer;

mod fold;
mod words;

/// Flags that survive into the next line.
const CARRIED_FLAGS: LineFlags = LineFlags::AUTO_COMMAND.union(LineFlags::VIM9_SCRIPT);

/// Word lists for Vim script, in classification order.
#[derive(Clone, Debug)]
pub struct VimKeywords {
    pub keywords: WordList,
    pub commands: WordList,
}

impl Default for VimKeywords {
    fn default() -> Self {
        VimKeywords {
            keywords: WordList::new(words::KEYWORDS),
            commands: WordList::new(words::COMMANDS),
        }
    }
}

impl VimKeywords {
    pub fn into_rules(self) -> KeywordRules {
        KeywordRules::new()
            .rule(self.keywords, Style::Keyword)
            .rule(self.commands, Style::Command)
    }
}

/// Vim script [`Lexer`].
#[derive(Clone, Debug)]
pub struct VimLexer {
    rules: KeywordRules,
}

impl VimLexer {
    pub fn new(keywords: VimKeywords) -> Self {
        VimLexer {
            rules: keywords.into_rules(),
        }
    }
}

impl Default for VimLexer {
    fn default() -> Self {
        Self::new(VimKeywords::default())
    }
}

impl Lexer for VimLexer {
    fn name(&self) -> &'static str {
        "vim"
    }

    #[tracing::instrument(level = "debug", skip(self, doc))]
    fn colourise(&self, doc: &mut dyn Document, start: usize, length: usize, init_style: Style) {
        VimScanner::new(&self.rules, doc, start, length, init_style).run();
    }

    #[tracing::instrument(level = "debug", skip(self, doc, _init_style))]
    fn fold(&self, doc: &mut dyn Document, start: usize, length: usize, _init_style: Style) {
        fold::fold_vim(doc, start, length);
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum KeywordType {
    None,
    /// `export def`
    Export,
}

/// Escape for the character after `\` in a double-quoted string.
fn vim_escape(ch_next: char) -> Option<EscapeSequence> {
    let outer = Style::String;
    match ch_next {
        'x' | 'X' => Some(EscapeSequence::numeric(outer, 3, Radix::Hex)),
        'u' => Some(EscapeSequence::numeric(outer, 5, Radix::Hex)),
        'U' => Some(EscapeSequence::numeric(outer, 9, Radix::Hex)),
        ch if is_octal_digit(ch) => Some(EscapeSequence::numeric(outer, 3, Radix::Octal)),
        '\\' | '"' | 'b' | 'e' | 'f' | 'n' | 'r' | 't' => Some(EscapeSequence::simple(outer)),
        _ => None,
    }
}

struct VimScanner<'r, 'd, D: Document + ?Sized> {
    rules: &'r KeywordRules,
    sc: StyleContext<'d, D>,

    line_flags: LineFlags,
    subs: SubStates,
    kw_type: KeywordType,
    /// Set by `syntax match` / `syntax region`: `/` opens a pattern.
    prefer_regex: bool,
    inside_regex_range: bool,

    line_visible: usize,
    /// Visible characters of the current command; `-1` right after a
    /// command-separating `|` so that the bar itself brings it to zero.
    logical_visible: i32,
}

impl<'r, 'd, D: Document + ?Sized> VimScanner<'r, 'd, D> {
    fn new(
        rules: &'r KeywordRules,
        doc: &'d mut D,
        start: usize,
        length: usize,
        init_style: Style,
    ) -> Self {
        let sc = StyleContext::new(doc, start, length, init_style);
        let mut line_flags = LineFlags::empty();
        if sc.line() > 0 {
            line_flags = LineState::flags_of(sc.line_state(sc.line() - 1)) & CARRIED_FLAGS;
        }
        VimScanner {
            rules,
            sc,
            line_flags,
            subs: SubStates::new(),
            kw_type: KeywordType::None,
            prefer_regex: false,
            inside_regex_range: false,
            line_visible: 0,
            logical_visible: 0,
        }
    }

    fn run(mut self) {
        if self.sc.pos() == 0 && self.sc.matches('#', '!') {
            self.sc.set_state(Style::CommentLine);
            self.sc.forward();
            self.line_flags = LineFlags::LINE_COMMENT;
        }

        while self.sc.more() {
            if self.scan_open_state() {
                continue;
            }
            if self.sc.state() == Style::Default {
                self.scan_default();
            }
            self.end_of_char();
            self.sc.forward();
        }
        if self.sc.length_current() > 0 && self.word_at_document_end() {
            self.finish_word();
            self.end_of_line();
        }
        self.sc.complete();
    }

    /// A word still open at the end of the document waits for its
    /// classification before its line end is recorded.
    fn word_at_document_end(&self) -> bool {
        self.sc.state() == Style::Identifier
            && self.sc.end() == self.sc.doc().len()
            && self.sc.line() + 1 == self.sc.doc().line_count()
    }

    /// Returns `true` when the current character must be dispatched again.
    fn scan_open_state(&mut self) -> bool {
        let ch = self.sc.ch();
        match self.sc.state() {
            Style::Operator => self.sc.set_state(Style::Default),
            Style::Number => {
                if !is_decimal_number(self.sc.ch_prev(), ch, self.sc.ch_next()) {
                    self.sc.set_state(Style::Default);
                }
            }
            Style::Identifier => {
                if !is_identifier_char(ch) {
                    self.finish_word();
                }
            }
            Style::String => {
                if self.sc.at_line_start() {
                    self.sc.set_state(Style::Default);
                } else if ch == '\\' {
                    if let Some(esc) = vim_escape(self.sc.ch_next()) {
                        self.subs.push(SubState::Escape(esc));
                        self.sc.set_state(Style::EscapeChar);
                    }
                    self.sc.forward();
                } else if ch == '"' {
                    self.sc.forward_set_state(Style::Default);
                }
            }
            Style::EscapeChar => {
                if let Some(outer) = self.subs.escape_step(ch, Style::String) {
                    self.sc.set_state(outer);
                    return true;
                }
            }
            Style::LiteralString => {
                if self.sc.at_line_start() {
                    self.sc.set_state(Style::Default);
                } else if ch == '\'' {
                    if self.sc.ch_next() == '\'' {
                        self.sc.set_state(Style::EscapeChar);
                        self.sc.forward();
                        self.sc.forward_set_state(Style::LiteralString);
                        return true;
                    }
                    self.sc.forward_set_state(Style::Default);
                }
            }
            Style::Regex => {
                if self.sc.at_line_start() {
                    self.sc.set_state(Style::Default);
                } else if ch == '\\' {
                    self.sc.forward();
                } else if ch == '[' || ch == ']' {
                    self.inside_regex_range = ch == '[';
                } else if ch == '/' && !self.inside_regex_range {
                    self.sc.forward_set_state(Style::Default);
                }
            }
            Style::CommentLine => {
                if self.sc.at_line_start() {
                    self.sc.set_state(Style::Default);
                }
            }
            Style::BlobHex => {
                if !(is_identifier_char(ch) || ch == '.') {
                    self.sc.set_state(Style::Default);
                }
            }
            Style::EnvVariable | Style::OptionName | Style::Register => {
                if !is_identifier_char(ch) {
                    self.sc.set_state(Style::Default);
                }
            }
            _ => {}
        }
        false
    }

    fn finish_word(&mut self) {
        let kw_prev = std::mem::replace(&mut self.kw_type, KeywordType::None);
        let mut buf = [0u8; MAX_WORD_LEN];
        let word = self.sc.current_text(&mut buf).unwrap_or("");
        let len = self.sc.length_current();

        match self.rules.classify(word) {
            Some(Style::Keyword) => {
                let leads_command = usize::try_from(self.logical_visible).is_ok_and(|n| n == len);
                if leads_command && !self.line_flags.contains(LineFlags::AUTO_COMMAND) {
                    self.sc.change_state(Style::Keyword);
                    match word {
                        "au" | "autocmd" => self.line_flags |= LineFlags::AUTO_COMMAND,
                        "export" => self.kw_type = KeywordType::Export,
                        _ => {}
                    }
                } else if kw_prev == KeywordType::Export && word == "def" {
                    self.sc.change_state(Style::Keyword);
                } else {
                    self.sc.change_state(Style::KeywordDemoted);
                }
            }
            Some(style) => {
                self.sc.change_state(style);
                if self.line_visible == len {
                    match word {
                        "syn" | "syntax" => {
                            // syntax match, syntax region
                            let next = self.sc.line_next_char(false);
                            self.prefer_regex = next == 'm' || next == 'r';
                        }
                        "vim9script" => self.line_flags |= LineFlags::VIM9_SCRIPT,
                        _ => {}
                    }
                }
            }
            None => {
                if self.sc.line_next_char(false) == '(' {
                    self.sc.change_state(Style::Function);
                }
            }
        }
        self.sc.set_state(Style::Default);
    }

    fn scan_default(&mut self) {
        let ch = self.sc.ch();
        let ch_next = self.sc.ch_next();
        if ch == '"' {
            let comment =
                self.logical_visible == 0 && !self.line_flags.contains(LineFlags::VIM9_SCRIPT);
            if comment {
                self.sc.set_state(Style::CommentLine);
                if self.line_visible == 0 {
                    self.line_flags |= LineFlags::LINE_COMMENT;
                }
            } else {
                self.sc.set_state(Style::String);
            }
        } else if ch == '#' {
            // vim9 comment
            self.sc.set_state(if self.sc.ch_prev() <= ' ' {
                Style::CommentLine
            } else {
                Style::Operator
            });
            if self.line_visible == 0 {
                self.line_flags |= LineFlags::LINE_COMMENT;
            }
        } else if ch == '\'' {
            self.sc.set_state(Style::LiteralString);
        } else if ch == '0' && ch_next.to_ascii_lowercase() == 'z' {
            self.sc.set_state(Style::BlobHex);
        } else if is_number_start(ch, ch_next) {
            self.sc.set_state(Style::Number);
        } else if (ch == '$' || ch == '&') && is_identifier_char(ch_next) {
            self.sc.set_state(if ch == '$' {
                Style::EnvVariable
            } else {
                Style::OptionName
            });
            self.sc.forward();
        } else if ch == '@' {
            self.sc.set_state(Style::Register);
            self.sc.forward();
        } else if ch == '\\' && self.logical_visible != 0 {
            self.sc.forward();
        } else if is_identifier_start(ch) {
            if ch_next == ':' && is_lower(ch) {
                // g: s: b: w: t: l: a: v: scope prefix
                self.sc.set_state(Style::EnvVariable);
                self.sc.forward_set_state(Style::Operator);
            } else {
                self.sc.set_state(Style::Identifier);
            }
        } else if ch == '/' && self.prefer_regex && !is_eol_char(ch_next) {
            self.inside_regex_range = false;
            self.sc.set_state(Style::Regex);
        } else if is_graphic(ch) {
            self.sc.set_state(Style::Operator);
            if ch == '|' && ch_next != '|' && !self.line_flags.contains(LineFlags::AUTO_COMMAND) {
                self.logical_visible = -1;
            }
        }
    }

    fn end_of_char(&mut self) {
        let ch = self.sc.ch();
        if !is_space_char(ch) && !(self.line_visible == 0 && ch == ':') {
            if self.line_visible == 0 {
                if ch == '\\' {
                    self.line_flags |= LineFlags::CONTINUATION;
                } else {
                    self.line_flags.remove(LineFlags::AUTO_COMMAND);
                }
            }
            self.line_visible += 1;
            self.logical_visible += 1;
        }
        if self.sc.at_line_end() && !self.word_at_document_end() {
            self.end_of_line();
        }
    }

    fn end_of_line(&mut self) {
        self.sc.set_line_state(LineState::new(self.line_flags).pack());
        self.line_flags &= CARRIED_FLAGS;
        self.line_visible = 0;
        self.logical_visible = 0;
        self.prefer_regex = false;
        self.kw_type = KeywordType::None;
        self.subs.clear();
    }
}

#[cfg(test)]
mod tests;
