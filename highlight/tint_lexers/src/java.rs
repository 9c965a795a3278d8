//! Java colouriser and folder (also used for BeanShell and Android IDL).
//!
//! # String Templates
//!
//! A quote right after `.` opens a template (`STR."..."`). Inside a
//! template `\{` opens an interpolation: the template style is pushed on
//! the nested-state stack, braces inside the interpolation push `Default`,
//! and the matching `}` pops and resumes whatever was pushed. The stack is
//! persisted in the line state, so a triple template with interpolations
//! spanning several lines restarts correctly.
//!
//! # Identifier Roles
//!
//! Once a word is complete it is looked up in the keyword rules. Words in
//! no list get a role from one character of context on each side:
//! `Type::` and `(Type)expr` are classes, `type name(` is a function
//! definition, `name(` a call, `label:` after a statement a label. These
//! are display heuristics, not a parse.

use tint_core::chars::{
    is_alpha, is_comment_tag_prev, is_decimal_number_ex, is_digit, is_eol_char, is_graphic,
    is_identifier_char, is_identifier_char_ex, is_identifier_start_ex, is_invalid_url_char,
    is_jump_label_prev_char, is_lower, is_number_start, is_octal_digit, is_space_char,
};
use tint_core::{
    Document, EscapeSequence, KeywordRules, LineFlags, LineState, NestedStates, Radix, Style,
    StyleContext, SubState, SubStates, WordList, MAX_WORD_LEN,
};

use crate::lookaround::lookback_non_white;
use crate::task_marker::highlight_task_marker;
use crate::Lexer;

mod fold;
mod format_spec;
mod words;

use format_spec::format_specifier_len;

/// Word lists for Java, in classification order.
#[derive(Clone, Debug)]
pub struct JavaKeywords {
    pub keywords: WordList,
    pub types: WordList,
    pub directives: WordList,
    pub classes: WordList,
    pub interfaces: WordList,
    pub enums: WordList,
    pub constants: WordList,
}

impl Default for JavaKeywords {
    fn default() -> Self {
        JavaKeywords {
            keywords: WordList::new(words::KEYWORDS),
            types: WordList::new(words::TYPES),
            directives: WordList::new(words::DIRECTIVES),
            classes: WordList::new(words::CLASSES),
            interfaces: WordList::new(words::INTERFACES),
            enums: WordList::new(words::ENUMS),
            constants: WordList::new(words::CONSTANTS),
        }
    }
}

impl JavaKeywords {
    /// keyword, type, directive, class, interface, enum, constant.
    pub fn into_rules(self) -> KeywordRules {
        KeywordRules::new()
            .rule(self.keywords, Style::Keyword)
            .rule(self.types, Style::Type)
            .rule(self.directives, Style::Directive)
            .rule(self.classes, Style::Class)
            .rule(self.interfaces, Style::Interface)
            .rule(self.enums, Style::Enum)
            .rule(self.constants, Style::Constant)
    }
}

/// Java [`Lexer`].
#[derive(Clone, Debug)]
pub struct JavaLexer {
    rules: KeywordRules,
}

impl JavaLexer {
    pub fn new(keywords: JavaKeywords) -> Self {
        JavaLexer {
            rules: keywords.into_rules(),
        }
    }
}

impl Default for JavaLexer {
    fn default() -> Self {
        Self::new(JavaKeywords::default())
    }
}

impl Lexer for JavaLexer {
    fn name(&self) -> &'static str {
        "java"
    }

    #[tracing::instrument(level = "debug", skip(self, doc))]
    fn colourise(&self, doc: &mut dyn Document, start: usize, length: usize, init_style: Style) {
        JavaScanner::new(&self.rules, doc, start, length, init_style).run();
    }

    #[tracing::instrument(level = "debug", skip(self, doc, init_style))]
    fn fold(&self, doc: &mut dyn Document, start: usize, length: usize, init_style: Style) {
        fold::fold_java(doc, start, length, init_style);
    }
}

/// Context a keyword sets up for the next identifier.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum KeywordType {
    None,
    /// `class Foo`, `@interface Foo`, `break label`: the next identifier
    /// gets this style.
    Declares(Style),
    /// `return x(...)` is a call, never a definition.
    Return,
    /// `if (x) y` is not a cast.
    While,
}

/// Position inside a doc comment tag.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum DocTag {
    None,
    /// `@param x`
    At,
    /// `{@link package.class#member label}`
    InlineAt,
    /// `<tag>`
    TagOpen,
    /// `</tag>`
    TagClose,
}

/// Escape for the character after `\`, or `None` when the backslash ends
/// the line.
fn java_escape(outer: Style, ch_next: char) -> Option<EscapeSequence> {
    if is_eol_char(ch_next) {
        return None;
    }
    Some(match ch_next {
        'u' => EscapeSequence::numeric(outer, 5, Radix::Hex),
        ch if is_octal_digit(ch) => EscapeSequence::numeric(outer, 3, Radix::Octal),
        _ => EscapeSequence::simple(outer),
    })
}

/// Character, string and template literals end at the line end.
fn is_single_line_literal(style: Style) -> bool {
    matches!(style, Style::Character | Style::String | Style::Template)
}

/// `-sealed` of `non-sealed`, starting at `pos` (the `e`).
fn matches_sealed<D: Document + ?Sized>(doc: &D, pos: usize, limit: usize) -> bool {
    const REST: &[u8] = b"ealed";
    let found = REST
        .iter()
        .enumerate()
        .all(|(i, &b)| pos + i < limit && doc.byte_at(pos + i) == b);
    let after = pos + REST.len();
    let terminator = if after < limit { doc.byte_at(after) } else { 0 };
    found && (terminator <= b' ' || terminator == b'/')
}

struct JavaScanner<'r, 'd, D: Document + ?Sized> {
    rules: &'r KeywordRules,
    sc: StyleContext<'d, D>,

    line_flags: LineFlags,
    nested: NestedStates,
    subs: SubStates,
    inside_url: bool,
    kw_type: KeywordType,
    doc_tag: DocTag,

    visible_chars: usize,
    visible_chars_before: usize,
    /// Last visible character outside comments, on this line.
    ch_prev_non_white: char,
    /// `ch_prev_non_white` when the current identifier started.
    ch_before: char,
    /// Like `ch_before`, but not updated after a `.` so that qualified
    /// names see the character before the whole name.
    ch_before_identifier: char,
}

impl<'r, 'd, D: Document + ?Sized> JavaScanner<'r, 'd, D> {
    fn new(
        rules: &'r KeywordRules,
        doc: &'d mut D,
        start: usize,
        length: usize,
        init_style: Style,
    ) -> Self {
        let mut ch_prev_non_white = '\0';
        if start != 0 && init_style.is_space_equiv() {
            ch_prev_non_white = lookback_non_white(&*doc, start);
        }
        let sc = StyleContext::new(doc, start, length, init_style);
        let mut nested = NestedStates::new();
        if sc.line() > 0 {
            nested = LineState::unpack(sc.line_state(sc.line() - 1)).nested;
        }
        JavaScanner {
            rules,
            sc,
            line_flags: LineFlags::empty(),
            nested,
            subs: SubStates::new(),
            inside_url: false,
            kw_type: KeywordType::None,
            doc_tag: DocTag::None,
            visible_chars: 0,
            visible_chars_before: 0,
            ch_prev_non_white,
            ch_before: '\0',
            ch_before_identifier: '\0',
        }
    }

    fn run(mut self) {
        if self.sc.pos() == 0 && self.sc.matches('#', '!') {
            // Shebang line of a BeanShell script.
            self.sc.set_state(Style::CommentLine);
            self.sc.forward();
            self.line_flags = LineFlags::LINE_COMMENT;
        }

        while self.sc.more() {
            if self.scan_open_state() {
                continue;
            }
            if self.sc.state() == Style::Default && self.scan_default() {
                continue;
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

    /// A word still open at the end of the document has no following
    /// character to close it, so its line end waits until it is classified.
    fn word_at_document_end(&self) -> bool {
        matches!(self.sc.state(), Style::Identifier | Style::Annotation)
            && self.sc.end() == self.sc.doc().len()
            && self.sc.line() + 1 == self.sc.doc().line_count()
    }

    // ─── Open states ─────────────────────────────────────────────────

    /// Advance the open state over the current character.
    ///
    /// Returns `true` when the current character must be dispatched again.
    fn scan_open_state(&mut self) -> bool {
        match self.sc.state() {
            Style::Operator | Style::OperatorNested => self.sc.set_state(Style::Default),
            Style::Number => {
                if !is_decimal_number_ex(self.sc.ch_prev(), self.sc.ch(), self.sc.ch_next()) {
                    self.sc.set_state(Style::Default);
                }
            }
            Style::Identifier | Style::Annotation => {
                if !is_identifier_char_ex(self.sc.ch()) {
                    return self.finish_word();
                }
            }
            Style::CommentLine => {
                if self.sc.at_line_start() {
                    self.sc.set_state(Style::Default);
                } else {
                    highlight_task_marker(
                        &mut self.sc,
                        &mut self.visible_chars,
                        self.visible_chars_before,
                    );
                }
            }
            Style::CommentBlock => {
                if self.sc.matches('*', '/') {
                    self.sc.forward();
                    self.sc.forward_set_state(Style::Default);
                } else {
                    return highlight_task_marker(
                        &mut self.sc,
                        &mut self.visible_chars,
                        self.visible_chars_before,
                    );
                }
            }
            Style::CommentBlockDoc => return self.scan_doc_comment(),
            Style::CommentTagAt | Style::CommentTagHtml => {
                let ch = self.sc.ch();
                if !(is_identifier_char(ch) || ch == '-' || ch == ':') {
                    self.sc.set_state(Style::CommentBlockDoc);
                    return true;
                }
            }
            Style::Character
            | Style::String
            | Style::Template
            | Style::TripleString
            | Style::TripleTemplate => return self.scan_literal(),
            Style::EscapeChar => {
                if let Some(outer) = self.subs.escape_step(self.sc.ch(), Style::Default) {
                    self.sc.set_state(outer);
                    return true;
                }
            }
            Style::Placeholder => {
                // java.text.MessageFormat, simplest form only: {digits}
                if !is_digit(self.sc.ch()) {
                    let outer = self.subs.pop().map_or(Style::String, |sub| sub.outer());
                    if self.sc.ch() != '}' {
                        self.sc.rewind();
                        self.sc.change_state(outer);
                    }
                    self.sc.forward();
                    self.sc.set_state(outer);
                    return true;
                }
            }
            _ => {}
        }
        false
    }

    /// Classify the word that just ended and close it.
    fn finish_word(&mut self) -> bool {
        let ch = self.sc.ch();
        if self.sc.state() == Style::Annotation {
            if ch == '.' || ch == '$' {
                self.sc.set_state(Style::Operator);
                self.sc.forward_set_state(Style::Annotation);
                return true;
            }
            self.sc.set_state(Style::Default);
            return false;
        }

        let mut buf = [0u8; MAX_WORD_LEN];
        // Overlong words are not looked up but still get a role.
        let word = self.sc.current_text(&mut buf).unwrap_or("");

        if word.starts_with('@') {
            if word == "@interface" {
                self.sc.change_state(Style::Keyword);
                self.kw_type = KeywordType::Declares(Style::Annotation);
            } else {
                self.sc.change_state(Style::Annotation);
                return true;
            }
        } else {
            match self.rules.classify(word) {
                Some(Style::Keyword) => self.keyword(word),
                _ if word == "non"
                    && self.sc.matches('-', 's')
                    && matches_sealed(
                        self.sc.doc(),
                        self.sc.pos() + 2,
                        self.sc.line_start_next(),
                    ) =>
                {
                    self.sc.change_state(Style::Keyword);
                    self.sc.advance("-sealed".len());
                }
                Some(style) => self.sc.change_state(style),
                None => self.identifier_role(),
            }
            if self.sc.state() != Style::Keyword && self.sc.ch() != '.' {
                self.kw_type = KeywordType::None;
            }
        }
        self.sc.set_state(Style::Default);
        false
    }

    fn keyword(&mut self, word: &str) {
        self.sc.change_state(Style::Keyword);
        match word {
            "import" => {
                if self.visible_chars == self.sc.length_current() {
                    self.line_flags |= LineFlags::IMPORT;
                }
            }
            "class" | "new" | "extends" | "instanceof" | "throws" => {
                self.kw_type = KeywordType::Declares(Style::Class);
            }
            "interface" | "implements" => {
                self.kw_type = KeywordType::Declares(Style::Interface);
            }
            "enum" => self.kw_type = KeywordType::Declares(Style::Enum),
            "record" => self.kw_type = KeywordType::Declares(Style::Record),
            "break" | "continue" => self.kw_type = KeywordType::Declares(Style::Label),
            "return" | "yield" => self.kw_type = KeywordType::Return,
            "if" | "while" => self.kw_type = KeywordType::While,
            _ => {}
        }
        if matches!(self.kw_type, KeywordType::Declares(_))
            && !is_identifier_start_ex(self.sc.doc_next_char(false))
        {
            self.kw_type = KeywordType::None;
        }
    }

    /// Role of a word found in no keyword list.
    fn identifier_role(&mut self) {
        let ch = self.sc.ch();
        if ch == ':' {
            if self.sc.ch_next() == ':' {
                // Type::method
                self.sc.change_state(Style::Class);
            } else if is_jump_label_prev_char(self.ch_before) {
                self.sc.change_state(Style::Label);
            }
            return;
        }
        if ch == '.' {
            return;
        }
        if let KeywordType::Declares(style) = self.kw_type {
            self.sc.change_state(style);
            return;
        }

        let next_visible = self.sc.doc_next_char(ch == ')');
        if ch == ')' {
            // (Type)(expression), (Type)expression, (Type)++x
            if self.ch_before_identifier == '('
                && (next_visible == '('
                    || (self.kw_type != KeywordType::While
                        && is_identifier_char_ex(next_visible)))
            {
                self.sc.change_state(Style::Class);
            }
        } else if next_visible == '(' {
            // type method(), type[] method(), type<T> method()
            if self.kw_type != KeywordType::Return
                && (is_identifier_char_ex(self.ch_before) || self.ch_before == ']')
            {
                self.sc.change_state(Style::FunctionDefinition);
            } else {
                self.sc.change_state(Style::Function);
            }
        } else if self.sc.matches('[', ']')
            || (ch == '<' && matches!(self.sc.ch_next(), '>' | '?'))
            || (self.ch_before_identifier == '<' && matches!(next_visible, '>' | '<'))
            || is_identifier_start_ex(next_visible)
        {
            // Type[] x, Type<>, Type<?>, List<Type>, Type name
            self.sc.change_state(Style::Class);
        }
    }

    fn scan_doc_comment(&mut self) -> bool {
        match self.doc_tag {
            DocTag::At => self.doc_tag = DocTag::None,
            DocTag::InlineAt => {
                if self.sc.ch() == '}' {
                    self.doc_tag = DocTag::None;
                    self.sc.set_state(Style::CommentTagAt);
                    self.sc.forward_set_state(Style::CommentBlockDoc);
                }
            }
            DocTag::TagOpen | DocTag::TagClose => {
                if self.sc.matches('/', '>') || self.sc.ch() == '>' {
                    self.doc_tag = DocTag::None;
                    let len = if self.sc.ch() == '/' { 2 } else { 1 };
                    self.sc.set_state(Style::CommentTagHtml);
                    self.sc.advance(len);
                    self.sc.set_state(Style::CommentBlockDoc);
                }
            }
            DocTag::None => {}
        }

        let ch = self.sc.ch();
        if self.sc.matches('*', '/') {
            self.sc.forward();
            self.sc.forward_set_state(Style::Default);
        } else if ch == '@' && is_alpha(self.sc.ch_next()) && is_comment_tag_prev(self.sc.ch_prev()) {
            self.doc_tag = DocTag::At;
            self.sc.set_state(Style::CommentTagAt);
        } else if self.sc.matches('{', '@') && is_alpha(self.sc.relative(2)) {
            self.doc_tag = DocTag::InlineAt;
            self.sc.set_state(Style::CommentTagAt);
            self.sc.forward();
        } else if ch == '<' {
            if is_alpha(self.sc.ch_next()) {
                self.doc_tag = DocTag::TagOpen;
                self.sc.set_state(Style::CommentTagHtml);
            } else if self.sc.ch_next() == '/' && is_alpha(self.sc.relative(2)) {
                self.doc_tag = DocTag::TagClose;
                self.sc.set_state(Style::CommentTagHtml);
                self.sc.forward();
            }
        } else {
            return highlight_task_marker(
                &mut self.sc,
                &mut self.visible_chars,
                self.visible_chars_before,
            );
        }
        false
    }

    fn scan_literal(&mut self) -> bool {
        let state = self.sc.state();
        let ch = self.sc.ch();
        if self.sc.at_line_start() && is_single_line_literal(state) {
            self.sc.set_state(Style::Default);
        } else if ch == '\\' {
            if self.sc.ch_next() == '{' && matches!(state, Style::Template | Style::TripleTemplate) {
                self.nested.push(state);
                self.sc.set_state(Style::OperatorNested);
                self.sc.forward();
            } else if let Some(esc) = java_escape(state, self.sc.ch_next()) {
                self.subs.push(SubState::Escape(esc));
                self.sc.set_state(Style::EscapeChar);
                self.sc.forward();
            }
        } else if state == Style::Character {
            if ch == '\'' {
                self.sc.forward_set_state(Style::Default);
            }
        } else if ch == '%' {
            let len = format_specifier_len(&self.sc, self.inside_url);
            if len != 0 {
                self.sc.set_state(Style::FormatSpecifier);
                self.sc.advance(len);
                self.sc.set_state(state);
                return true;
            }
        } else if ch == '{' {
            if is_digit(self.sc.ch_next()) {
                self.subs.push(SubState::Placeholder { outer: state });
                self.sc.set_state(Style::Placeholder);
            }
        } else if ch == '"' && (is_single_line_literal(state) || self.sc.match_next('"', '"')) {
            if !is_single_line_literal(state) {
                self.sc.advance(2);
            }
            self.sc.forward_set_state(Style::Default);
        } else if self.sc.matches3(':', '/', '/') && is_lower(self.sc.ch_prev()) {
            self.inside_url = true;
        } else if self.inside_url && is_invalid_url_char(ch) {
            self.inside_url = false;
        }
        false
    }

    // ─── Default state ───────────────────────────────────────────────

    /// Open a new state at the current character.
    ///
    /// Returns `true` when the current character must be dispatched again.
    fn scan_default(&mut self) -> bool {
        let ch = self.sc.ch();
        if self.sc.matches('/', '/') {
            self.visible_chars_before = self.visible_chars;
            self.sc.set_state(Style::CommentLine);
            if self.visible_chars == 0 {
                self.line_flags |= LineFlags::LINE_COMMENT;
            }
        } else if self.sc.matches('/', '*') {
            self.visible_chars_before = self.visible_chars;
            self.doc_tag = DocTag::None;
            self.sc.set_state(Style::CommentBlock);
            self.sc.advance(2);
            if self.sc.ch() == '*' && self.sc.ch_next() != '*' {
                self.sc.change_state(Style::CommentBlockDoc);
            }
            return true;
        } else if ch == '"' {
            self.inside_url = false;
            let template = self.sc.ch_prev() == '.';
            if self.sc.match_next('"', '"') {
                self.sc.set_state(if template {
                    Style::TripleTemplate
                } else {
                    Style::TripleString
                });
                self.sc.advance(2);
            } else {
                self.sc.set_state(if template {
                    Style::Template
                } else {
                    Style::String
                });
            }
        } else if ch == '\'' {
            self.sc.set_state(Style::Character);
        } else if is_number_start(ch, self.sc.ch_next()) {
            self.sc.set_state(Style::Number);
        } else if is_identifier_start_ex(ch) || self.sc.matches('@', 'i') {
            self.ch_before = self.ch_prev_non_white;
            if self.ch_prev_non_white != '.' {
                self.ch_before_identifier = self.ch_prev_non_white;
            }
            self.sc.set_state(Style::Identifier);
        } else if ch == '@' && is_identifier_start_ex(self.sc.ch_next()) {
            self.sc.set_state(Style::Annotation);
        } else if is_graphic(ch) && ch != '\\' {
            self.sc.set_state(Style::Operator);
            if !self.nested.is_empty() {
                self.sc.change_state(Style::OperatorNested);
                if ch == '{' {
                    self.nested.push(Style::Default);
                } else if ch == '}' {
                    let outer = self.nested.pop().unwrap_or_default();
                    self.sc.forward_set_state(outer);
                    return true;
                }
            }
        }
        false
    }

    // ─── Bookkeeping ─────────────────────────────────────────────────

    fn end_of_char(&mut self) {
        let ch = self.sc.ch();
        if !is_space_char(ch) {
            self.visible_chars += 1;
            if !self.sc.state().is_space_equiv() {
                self.ch_prev_non_white = ch;
            }
        }
        if self.sc.at_line_end() && !self.word_at_document_end() {
            self.end_of_line();
        }
    }

    fn end_of_line(&mut self) {
        let state = LineState {
            flags: self.line_flags,
            nested: self.nested.clone(),
        };
        if !state.nested.is_empty() {
            tracing::trace!(
                line = self.sc.line(),
                depth = state.nested.len(),
                "open interpolation at line end"
            );
        }
        self.sc.set_line_state(state.pack());
        self.line_flags = LineFlags::empty();
        self.visible_chars = 0;
        self.visible_chars_before = 0;
        self.doc_tag = DocTag::None;
        self.kw_type = KeywordType::None;
        self.subs.clear();
        self.inside_url = false;
        self.ch_prev_non_white = '\0';
        self.ch_before_identifier = '\0';
    }
}
