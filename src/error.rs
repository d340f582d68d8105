use std::path::PathBuf;
use thiserror::Error;

/// Defines the application-level errors that can occur.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not read {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line} is malformed ({reason}): {text}")]
    MalformedRecord {
        line: u64,
        text: String,
        reason: RecordError,
    },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons a single input line is rejected. The first failing check wins.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    #[error("wrong number of fields")]
    WrongFieldCount,
    #[error("invalid date")]
    InvalidDate,
    #[error("invalid amount")]
    InvalidAmount,
}

/// Errors raised when querying a built ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account not found: {0}")]
    UnknownAccount(String),
}

/// Errors raised while interpreting user commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Sorry, I don't understand.")]
    Unrecognized(String),
}
