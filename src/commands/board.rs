//! Kanban board command (`corkboard board`)
//!
//! Fetches the ticket collection and renders it as an interactive
//! column-per-status board.

use std::path::PathBuf;

use iocraft::prelude::*;

use super::build_source;
use crate::error::{CorkboardError, Result};
use crate::tui::KanbanBoard;
use crate::types::{DisplayConfig, Grouping, SortKey};

/// Options for the board command
pub struct BoardOptions {
    pub endpoint: Option<String>,
    pub from_file: Option<PathBuf>,
    pub group_by: Option<Grouping>,
    pub sort_by: Option<SortKey>,
}

/// Launch the kanban board TUI
pub async fn cmd_board(options: BoardOptions) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        return Err(CorkboardError::Other(
            "the board needs an interactive terminal (use `corkboard tickets` for piped output)"
                .to_string(),
        ));
    }

    let source = build_source(options.endpoint.as_deref(), options.from_file.as_deref())?;
    let config = DisplayConfig {
        grouping: options.group_by.unwrap_or_default(),
        sort: options.sort_by.unwrap_or_default(),
    };

    tracing::info!(source = %source.describe(), "starting board");

    element!(KanbanBoard(source: Some(source), config))
        .fullscreen()
        .await
        .map_err(|e| CorkboardError::Other(format!("TUI error: {e}")))
}
