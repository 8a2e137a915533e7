//! Shared TUI components
//!
//! This module contains reusable UI components for the kanban board view.

pub mod empty_state;
pub mod filter_box;
pub mod footer;
pub mod select;
pub mod shortcuts;
pub mod ticket_card;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use filter_box::{InlineFilterBox, InlineFilterBoxProps};
pub use footer::{
    Footer, FooterProps, Shortcut, board_shortcuts, empty_shortcuts, filter_shortcuts,
    grab_shortcuts,
};
pub use select::{Select, SelectProps, Selectable, options_for};
pub use shortcuts::ShortcutsBuilder;
pub use ticket_card::{TicketCard, TicketCardProps};
pub use toast::{Toast, ToastLevel, render_toast};
