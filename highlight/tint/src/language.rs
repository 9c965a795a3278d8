use std::path::Path;
use std::str::FromStr;

use tint_lexers::{JavaLexer, Lexer, VimLexer};

use crate::error::CliError;

/// Languages the CLI can highlight.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Language {
    Java,
    Vim,
}

impl Language {
    /// Guess the language from a file name.
    pub fn detect(path: &Path) -> Option<Language> {
        let name = path.file_name()?.to_str()?;
        if matches!(name, "vimrc" | "_vimrc" | ".vimrc") {
            return Some(Language::Vim);
        }
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "java" | "bsh" | "aidl" => Some(Language::Java),
            "vim" => Some(Language::Vim),
            _ => None,
        }
    }

    /// A lexer with the built-in word lists.
    pub fn lexer(self) -> Box<dyn Lexer> {
        match self {
            Language::Java => Box::new(JavaLexer::default()),
            Language::Vim => Box::new(VimLexer::default()),
        }
    }
}

impl FromStr for Language {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "vim" => Ok(Language::Vim),
            _ => Err(CliError::UnknownLanguage(s.to_string())),
        }
    }
}
