//! File ticket source.
//!
//! Reads the same payload shape the endpoint serves from a local JSON file.
//! Useful offline and for demos; tests lean on it to drive the board without
//! a network.

use std::path::PathBuf;

use crate::error::Result;

use super::{TicketBatch, TicketSource, decode_ticket_payload};

pub struct FileTicketSource {
    path: PathBuf,
}

impl FileTicketSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl TicketSource for FileTicketSource {
    async fn fetch_tickets(&self) -> Result<TicketBatch> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        let batch = decode_ticket_payload(&body)?;

        tracing::info!(
            path = %self.path.display(),
            count = batch.tickets.len(),
            skipped = batch.skipped.len(),
            "ticket file loaded"
        );
        Ok(batch)
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file")
            .to_string()
    }
}
