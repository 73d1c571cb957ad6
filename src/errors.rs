use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

/// Error type that captures ledger, reporting and export failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid amount `{input}`: {reason}")]
    Parse { input: String, reason: String },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Division by zero while computing {0}")]
    DivisionByZero(&'static str),
    #[error("Financial goal not found: {0}")]
    GoalNotFound(String),
    #[error("Unable to write `{}`: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl BudgetError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        BudgetError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        BudgetError::InvalidArgument(message.into())
    }
}

pub type Result<T> = StdResult<T, BudgetError>;

/// Failure that stops the CLI shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Terminal error: {0}")]
    Terminal(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Terminal(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Terminal(err.to_string())
    }
}
