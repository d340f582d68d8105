use crate::error::RecordError;
use crate::ingest::Policy;
use crate::models::Transaction;
use log::{debug, error, info};

/// Something that happened while ingesting a source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IngestEvent<'a> {
    Started { source: &'a str, policy: Policy },
    Parsed { line: u64, transaction: &'a Transaction },
    /// A line skipped under the tolerant policy.
    Rejected { line: u64, text: &'a str, reason: RecordError },
}

/// Receives ingestion events. The ingestor never prints on its own.
pub trait IngestObserver {
    fn on_event(&mut self, event: &IngestEvent<'_>);
}

impl<T: IngestObserver + ?Sized> IngestObserver for &mut T {
    fn on_event(&mut self, event: &IngestEvent<'_>) {
        (**self).on_event(event)
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl IngestObserver for LogObserver {
    fn on_event(&mut self, event: &IngestEvent<'_>) {
        match event {
            IngestEvent::Started { source, policy } => {
                info!("Loading transactions from {} ({:?} parsing)", source, policy)
            }
            IngestEvent::Parsed { line, transaction } => {
                debug!("Line {}: parsed {:?}", line, transaction)
            }
            IngestEvent::Rejected { line, text, reason } => {
                error!("Line {}: skipping record, {}: {}", line, reason, text)
            }
        }
    }
}
