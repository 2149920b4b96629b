//! Error types for the session shell.

use std::io;

use menu_store::{MenuError, SeedError};
use thiserror::Error;

/// Errors raised while splitting a command line into words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordsError {
    /// A quoted word was never closed.
    #[error("unterminated {quote} quote")]
    UnterminatedQuote {
        /// The opening quote character.
        quote: char,
    },
    /// The line ends with a lone backslash.
    #[error("line ends with a dangling escape")]
    TrailingEscape,
}

/// Errors surfaced by the shell.
///
/// Errors from a single command line are reported and the session carries
/// on; startup errors end the process.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The line could not be split into words.
    #[error(transparent)]
    Words(#[from] WordsError),
    /// The words did not form a valid command, or help was requested.
    #[error("{0}")]
    Usage(#[from] clap::Error),
    /// The store rejected the command.
    #[error(transparent)]
    Menu(#[from] MenuError),
    /// Settings could not be loaded.
    #[error("failed to load settings: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// The seed menu could not be loaded.
    #[error(transparent)]
    Seed(#[from] SeedError),
    /// Output could not be serialised as JSON.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Returns `true` when the error carries help text rather than a failure.
    #[must_use]
    pub fn is_help(&self) -> bool {
        matches!(
            self,
            Self::Usage(err) if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_error_formats_quote() {
        let err = WordsError::UnterminatedQuote { quote: '"' };
        assert_eq!(err.to_string(), "unterminated \" quote");
    }

    #[test]
    fn menu_errors_are_transparent() {
        let err = ShellError::from(MenuError::Validation(
            menu_store::DishValidationError::EmptyName,
        ));
        assert_eq!(err.to_string(), "invalid dish: dish name must not be empty");
        assert!(!err.is_help());
    }
}
