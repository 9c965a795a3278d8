//! `lex` and `fold`: highlight a file and print the result.

use std::fmt::Write as _;
use std::path::Path;

use tint_core::TextDocument;
use tint_lexers::highlight_all;

use crate::error::CliError;
use crate::language::Language;

/// Arguments shared by `lex` and `fold`.
#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    pub path: String,
    pub language: Option<Language>,
}

pub fn parse_options(args: &[String]) -> Result<Options, CliError> {
    let mut path = None;
    let mut language = None;
    for arg in args {
        if let Some(name) = arg.strip_prefix("--lang=") {
            language = Some(name.parse()?);
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        }
    }
    let path = path.ok_or(CliError::MissingArgument("file path"))?;
    Ok(Options { path, language })
}

/// Read and highlight the file named by `options`.
fn load(options: &Options) -> Result<TextDocument, CliError> {
    let language = match options.language {
        Some(language) => language,
        None => Language::detect(Path::new(&options.path))
            .ok_or_else(|| CliError::UndetectedLanguage(options.path.clone()))?,
    };
    let text = std::fs::read_to_string(&options.path).map_err(|source| CliError::Io {
        path: options.path.clone(),
        source,
    })?;
    tracing::debug!(path = %options.path, ?language, bytes = text.len(), "highlighting");

    let mut doc = TextDocument::new(text);
    highlight_all(language.lexer().as_ref(), &mut doc);
    Ok(doc)
}

/// One line per style run: byte range, style name, quoted text.
pub fn render_spans(doc: &TextDocument) -> String {
    let mut out = String::new();
    for span in doc.spans() {
        let text = doc.text().get(span.start..span.end).unwrap_or("");
        let _ = writeln!(
            out,
            "{:>6}..{:<6} {:<20} {:?}",
            span.start,
            span.end,
            span.style.name(),
            text
        );
    }
    out
}

/// One line per document line: number, depths, header marker.
pub fn render_folds(doc: &TextDocument) -> String {
    let mut out = String::new();
    for (line, level) in doc.fold_levels().into_iter().enumerate() {
        let marker = if level.is_header() { "+" } else { " " };
        let _ = writeln!(
            out,
            "{:>5} {:#05x} {:#05x} {marker} {}",
            line + 1,
            level.current,
            level.next,
            doc.line_text(line).trim_end_matches(['\r', '\n'])
        );
    }
    out
}

pub fn lex_file(args: &[String]) -> Result<(), CliError> {
    let options = parse_options(args)?;
    let doc = load(&options)?;
    print!("{}", render_spans(&doc));
    Ok(())
}

pub fn fold_file(args: &[String]) -> Result<(), CliError> {
    let options = parse_options(args)?;
    let doc = load(&options)?;
    print!("{}", render_folds(&doc));
    Ok(())
}
