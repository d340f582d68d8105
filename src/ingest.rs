use crate::error::AppError;
use crate::events::{IngestEvent, IngestObserver};
use crate::models::Transaction;
use crate::parser;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// What to do with a record that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Policy {
    /// The first malformed record aborts the run.
    Strict,
    /// Malformed records are reported and skipped.
    #[default]
    Tolerant,
}

/// Settings for reading a transaction source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestConfig {
    pub policy: Policy,
    pub delimiter: char,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            policy: Policy::Tolerant,
            delimiter: ',',
        }
    }
}

/// Lazily turns the lines of a source into transactions, in source order.
///
/// The header row is always discarded. Every other line, blank ones
/// included, goes through the record parser. This is a single-pass iterator
/// over the underlying reader: once drained (or after a fatal error) it
/// yields nothing more and cannot be restarted.
pub struct Ingestor<R, O> {
    lines: Lines<R>,
    line: u64,
    config: IngestConfig,
    observer: O,
    halted: bool,
}

impl<O: IngestObserver> Ingestor<BufReader<File>, O> {
    /// Opens the file at `path` for ingestion.
    pub fn from_path(path: &Path, config: IngestConfig, observer: O) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|source| AppError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file), &path.display().to_string(), config, observer))
    }
}

impl<R: BufRead, O: IngestObserver> Ingestor<R, O> {
    /// Wraps any buffered reader. `source` names it in the start event.
    pub fn from_reader(reader: R, source: &str, config: IngestConfig, mut observer: O) -> Self {
        observer.on_event(&IngestEvent::Started {
            source,
            policy: config.policy,
        });

        Self {
            lines: reader.lines(),
            line: 0,
            config,
            observer,
            halted: false,
        }
    }

    /// Reads the next physical line, numbering it from 1.
    fn next_line(&mut self) -> Option<std::io::Result<String>> {
        let text = self.lines.next()?;
        self.line += 1;
        Some(text)
    }
}

impl<R: BufRead, O: IngestObserver> Iterator for Ingestor<R, O> {
    type Item = Result<Transaction, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        loop {
            let text = match self.next_line()? {
                Ok(text) => text,
                Err(e) => {
                    self.halted = true;
                    return Some(Err(e.into()));
                }
            };
            let line = self.line;
            if line == 1 {
                continue;
            }

            match parser::parse_line(&text, self.config.delimiter) {
                Ok(transaction) => {
                    self.observer.on_event(&IngestEvent::Parsed {
                        line,
                        transaction: &transaction,
                    });
                    return Some(Ok(transaction));
                }
                Err(reason) => match self.config.policy {
                    Policy::Tolerant => {
                        self.observer.on_event(&IngestEvent::Rejected {
                            line,
                            text: &text,
                            reason,
                        });
                    }
                    Policy::Strict => {
                        self.halted = true;
                        return Some(Err(AppError::MalformedRecord { line, text, reason }));
                    }
                },
            }
        }
    }
}
