use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown language '{0}' (expected java or vim)")]
    UnknownLanguage(String),
    #[error("cannot tell the language of '{0}'; pass --lang=java or --lang=vim")]
    UndetectedLanguage(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
}

impl CliError {
    /// Usage errors are followed by the help text.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::UnknownCommand(_) | CliError::UnknownOption(_) | CliError::MissingArgument(_)
        )
    }
}
