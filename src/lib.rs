pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ordering;
pub mod source;
pub mod tui;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test_guards;

pub use config::{Config, DEFAULT_ENDPOINT};
pub use error::{CorkboardError, Result};
pub use ordering::derive_order;
pub use source::{FileTicketSource, HttpTicketSource, SkippedTicket, TicketBatch, TicketSource};
pub use types::{DisplayConfig, Grouping, SortKey, Ticket};
