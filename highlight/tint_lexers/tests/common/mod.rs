//! Shared fixtures for the lexer integration tests.

#![allow(dead_code, reason = "each test binary uses a subset")]

use proptest::prelude::*;
use tint_core::{Document, FoldLevel, Style, TextDocument};
use tint_lexers::{highlight_all, Lexer};

pub const JAVA_SAMPLE: &str = r#"#!/usr/bin/env bsh
// Header comment
// TODO: split
import java.util.List;
import java.util.Map;

/**
 * Greeter. See {@link Map} and <b>this</b>.
 * @param <T> item type
 */
@SuppressWarnings("unchecked")
public non-sealed class Greeter<T> extends Base implements Runnable {
    private static final String URL = "http://example.com/a%20b?q=%d";
    private final List<T> items = new ArrayList<>();

    void greet(String name)
    {
        outer:
        for (int i = 0; i < 0x1F; i++) {
            if (name == null) break outer;
            var s = STR."Hello \{name} and \{ items.get(i) }!";
            var t = STR."""
                multi \{ switch (i) {
                    case 1 -> "one";
                    default -> "many";
                } }
                done""";
            char c = 'A', d = '\101', e = '\n';
            String f = String.format("%1$-08.3f {0} {1x}", 1.5e-3);
            Object o = (Object) name;
            return compute(s) /* trailing */;
        }
    }
}
"#;

pub const VIM_SAMPLE: &str = r#"#!/usr/bin/vim -S
" Header comment
" continues
set nocompatible
let g:loaded = 1 | let s:x = "a\tb\x41" . 'it''s'
if has('autocmd')
  autocmd BufRead *.java if &ft == '' | setlocal ft=java | endif
        \ | echo "done"
endif
syntax match Todo /TODO\|FIXME[:]/ contained
syn region Str start=/"/ end=/"/
function! Greet(name) abort
  return $HOME . @a . 0zFF00.ABCD
endfunction
call Greet("x")
vim9script
# vim9 comment
export def Run()
  var s = "str"
enddef
"#;

pub const JAVA_TOKENS: &[&str] = &[
    "\n", "\r\n", " ", "\t", "a", "Foo", "class", "import", "return", "if", "(", ")", "{", "}",
    "[", "]", ";", ":", ".", "\"", "'", "\"\"\"", "\\", "\\{", "\\u0041", "\\12", "/", "*",
    "/*", "*/", "/**", "//", "@", "@param", "{@link", "<p>", "</p>", "%d", "%", "{0}", "0x1F",
    "1.5e3", "é", "TODO:", "non-sealed", "http://x", "STR.", "#!", "import a\n{\n",
    "// c\n{\n", "f()\n{\n",
];

pub const VIM_TOKENS: &[&str] = &[
    "\n", "\r\n", " ", "\t", "\"", "'", "''", "\\", "|", "||", "#", "let", "if", "endif",
    "function", "endfunction", "autocmd", "syntax match", "syn region", "vim9script",
    "export def", "x", "F(", ")", "/", "[", "]", "0z1F", "42", "$HOME", "&ts", "@a", "g:",
    ":", "\\x41", "\\u", "\\t", "é", "#!",
];

/// Random text built from `tokens`.
pub fn text_from(tokens: &'static [&'static str], max_tokens: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(tokens), 0..max_tokens).prop_map(|parts| parts.concat())
}

/// Java text whose interpolation nesting fits in the persisted line state.
pub fn java_text() -> impl Strategy<Value = String> {
    text_from(JAVA_TOKENS, 60).prop_filter("at most four open braces", |text| {
        text.matches('{').count() <= 4
    })
}

pub fn vim_text() -> impl Strategy<Value = String> {
    text_from(VIM_TOKENS, 60)
}

pub fn highlighted(lexer: &dyn Lexer, text: &str) -> TextDocument {
    let mut doc = TextDocument::new(text);
    highlight_all(lexer, &mut doc);
    doc
}

/// Forget everything from the start of `line` on, as an edit would.
pub fn invalidate_from(doc: &mut TextDocument, line: usize) {
    let start = doc.line_start(line);
    let len = doc.len();
    doc.set_style_range(start..len, Style::Default);
    for l in line..doc.line_count() {
        doc.set_line_state(l, 0);
        doc.set_fold_level(l, FoldLevel::BASE.pack());
    }
}

pub fn line_states(doc: &TextDocument) -> Vec<u32> {
    (0..doc.line_count()).map(|line| doc.line_state(line)).collect()
}

/// A document that records every write.
pub struct Recording {
    pub inner: TextDocument,
    pub style_writes: Vec<(std::ops::Range<usize>, Style)>,
    pub fold_writes: usize,
}

impl Recording {
    pub fn new(inner: TextDocument) -> Self {
        Recording {
            inner,
            style_writes: Vec::new(),
            fold_writes: 0,
        }
    }
}

impl Document for Recording {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn byte_at(&self, pos: usize) -> u8 {
        self.inner.byte_at(pos)
    }

    fn style_at(&self, pos: usize) -> Style {
        self.inner.style_at(pos)
    }

    fn set_style_range(&mut self, range: std::ops::Range<usize>, style: Style) {
        self.style_writes.push((range.clone(), style));
        self.inner.set_style_range(range, style);
    }

    fn line_count(&self) -> usize {
        self.inner.line_count()
    }

    fn line_of(&self, pos: usize) -> usize {
        self.inner.line_of(pos)
    }

    fn line_start(&self, line: usize) -> usize {
        self.inner.line_start(line)
    }

    fn line_state(&self, line: usize) -> u32 {
        self.inner.line_state(line)
    }

    fn set_line_state(&mut self, line: usize, state: u32) {
        self.inner.set_line_state(line, state);
    }

    fn fold_level(&self, line: usize) -> u32 {
        self.inner.fold_level(line)
    }

    fn set_fold_level(&mut self, line: usize, level: u32) {
        self.fold_writes += 1;
        self.inner.set_fold_level(line, level);
    }
}
