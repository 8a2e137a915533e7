//! Ticket sources.
//!
//! The board pulls its collection through the `TicketSource` trait so the
//! transport can be swapped: the HTTP endpoint in production, a JSON file for
//! offline use, fixtures in tests. Decoding is lenient per entry: a payload
//! with some malformed tickets still yields the well-formed ones, with every
//! skip recorded alongside.

pub mod file;
pub mod http;

use serde::Deserialize;

use crate::error::{CorkboardError, Result};
use crate::types::Ticket;

pub use file::FileTicketSource;
pub use http::HttpTicketSource;

/// Common interface for ticket sources
#[async_trait::async_trait]
pub trait TicketSource: Send + Sync {
    /// Fetch the full ticket collection
    async fn fetch_tickets(&self) -> Result<TicketBatch>;

    /// Short origin label for the board header and log lines
    fn describe(&self) -> String;
}

/// A payload entry that failed to decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTicket {
    /// Position of the entry in the `tickets` array
    pub index: usize,
    pub reason: String,
}

/// Result of decoding a ticket payload, including both successes and failures
#[derive(Debug, Clone, Default)]
pub struct TicketBatch {
    pub tickets: Vec<Ticket>,
    pub skipped: Vec<SkippedTicket>,
}

impl TicketBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a successfully decoded ticket
    pub fn add_ticket(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    /// Record an entry that could not be decoded
    pub fn add_skip(&mut self, index: usize, reason: impl Into<String>) {
        self.skipped.push(SkippedTicket {
            index,
            reason: reason.into(),
        });
    }

    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Wire shape of the listing response
#[derive(Deserialize)]
struct TicketEnvelope {
    tickets: Vec<serde_json::Value>,
}

/// Decode the endpoint payload, keeping every well-formed entry.
///
/// The envelope itself must be an object with a `tickets` array; anything
/// else is a payload error. Individual entries that fail to decode become
/// skips, never errors, so one corrupt ticket cannot take down the batch.
pub fn decode_ticket_payload(body: &str) -> Result<TicketBatch> {
    let envelope: TicketEnvelope = serde_json::from_str(body).map_err(|e| {
        CorkboardError::Payload(format!("expected an object with a `tickets` array: {e}"))
    })?;

    let mut batch = TicketBatch::new();
    for (index, entry) in envelope.tickets.into_iter().enumerate() {
        match serde_json::from_value::<Ticket>(entry) {
            Ok(ticket) => batch.add_ticket(ticket),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed ticket entry");
                batch.add_skip(index, e.to_string());
            }
        }
    }

    Ok(batch)
}
