//! Interactive terminal interface
//!
//! The board view renders tickets as status columns with grouping, sorting,
//! fuzzy filtering, and keyboard-driven card moves. Components under
//! [`components`] are the reusable building blocks; [`filter`] holds the
//! fuzzy matching shared between the board and the `tickets` command.

pub mod board;
pub mod components;
pub mod filter;
pub mod theme;

pub use board::{KanbanBoard, KanbanBoardProps};
pub use filter::{FilteredTicket, filter_tickets};
pub use theme::Theme;
