//! Reads a ledger of transfers between people, totals it per account and
//! answers `list all` / `list <account>` queries.

pub mod balance;
pub mod command;
pub mod error;
pub mod events;
pub mod ingest;
pub mod ledger;
pub mod models;
pub mod parser;
pub mod report;
pub mod session;

pub use command::Command;
pub use error::{AppError, CommandError, LedgerError, RecordError};
pub use events::{IngestEvent, IngestObserver, LogObserver};
pub use ingest::{IngestConfig, Ingestor, Policy};
pub use ledger::Ledger;
pub use models::{Account, BalanceSummary, StatementRow, Transaction};
pub use report::Format;
pub use session::Session;
