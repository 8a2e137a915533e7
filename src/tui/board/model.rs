//! Board state, reducer, and view model
//!
//! Separates interaction state (BoardState) from the rendered view
//! (BoardViewModel) so the board logic is testable without the iocraft
//! framework. The collection in `BoardState` is always held in display
//! order: the reducer applies the grouping/sort derivation when tickets
//! load and whenever a selector changes, so manual grab moves persist
//! until the next selector change.

use std::collections::{HashMap, HashSet};

use unicase::UniCase;

use crate::ordering::derive_order;
use crate::tui::components::{
    EmptyStateKind, Selectable, Shortcut, Toast, board_shortcuts, empty_shortcuts,
    filter_shortcuts, grab_shortcuts,
};
use crate::tui::filter::filter_tickets;
use crate::types::{DisplayConfig, Grouping, SortKey, Ticket};

/// Where the board is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// A fetch is in flight (also the initial state before the first load)
    #[default]
    Loading,
    /// The last fetch completed
    Ready,
    /// The last fetch failed; the message is shown to the user
    Failed(String),
}

/// A grab in progress: the ticket being moved and the collection as it
/// was at grab time, restored verbatim on cancel.
#[derive(Debug, Clone)]
pub struct GrabState {
    /// Id of the grabbed ticket
    pub ticket_id: String,
    /// The collection at the moment of the grab
    pub snapshot: Vec<Ticket>,
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// All tickets, in display order
    pub tickets: Vec<Ticket>,
    /// Active grouping and sort selectors
    pub config: DisplayConfig,
    /// Fetch lifecycle state
    pub phase: FetchPhase,
    /// Number of malformed entries skipped by the last fetch
    pub skipped: usize,
    /// Wall-clock time of the last successful fetch, preformatted
    pub fetched_at: Option<String>,
    /// Current filter query string
    pub filter_query: String,
    /// Whether the filter box is focused
    pub filter_focused: bool,
    /// Index of the currently selected column
    pub current_column: usize,
    /// Index of the currently selected row within the column
    pub current_row: usize,
    /// Scroll offset per status column (first visible card index)
    pub column_scroll_offsets: HashMap<UniCase<String>, usize>,
    /// Grab in progress, if any
    pub grab: Option<GrabState>,
    /// Optional toast notification to display
    pub toast: Option<Toast>,
}

/// All possible actions on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    // Navigation
    /// Move selection to the previous column
    MoveLeft,
    /// Move selection to the next column
    MoveRight,
    /// Move selection up within the column
    MoveUp,
    /// Move selection down within the column
    MoveDown,
    /// Jump to top of column
    GoToTop,
    /// Jump to bottom of column
    GoToBottom,
    /// Page down within column
    PageDown,
    /// Page up within column
    PageUp,

    // Display selectors
    /// Set the grouping selector, keeping the sort selector
    SetGrouping(Grouping),
    /// Set the sort selector, keeping the grouping selector
    SetSort(SortKey),
    /// Advance the grouping selector to its next value
    CycleGrouping,
    /// Step the grouping selector back to its previous value
    CycleGroupingBack,
    /// Advance the sort selector to its next value
    CycleSort,
    /// Step the sort selector back to its previous value
    CycleSortBack,

    // Filter
    /// Focus the filter box
    FocusFilter,
    /// Update the filter query text
    UpdateFilter(String),
    /// Exit filter mode, keeping the query
    ExitFilter,
    /// Clear the filter query, exit filter mode, dismiss any toast
    ClearFilterAndExit,

    // Grab
    /// Grab the ticket under the cursor, snapshotting the collection
    Grab,
    /// Move the grabbed ticket to the previous column
    GrabMoveLeft,
    /// Move the grabbed ticket to the next column
    GrabMoveRight,
    /// Move the grabbed ticket up past its visible neighbor
    GrabMoveUp,
    /// Move the grabbed ticket down past its visible neighbor
    GrabMoveDown,
    /// Commit the grab, keeping the moves made so far
    Drop,
    /// Abandon the grab, restoring the snapshot order-for-order
    CancelGrab,

    // Data lifecycle
    /// A fetch completed; the payload replaces the collection
    TicketsLoaded {
        /// Decoded tickets, in payload order
        tickets: Vec<Ticket>,
        /// Number of malformed entries the decode skipped
        skipped: usize,
        /// Preformatted fetch timestamp for the header
        fetched_at: String,
    },
    /// A fetch failed; the prior collection stays in place
    FetchFailed(String),

    // Handled by the component (side effects)
    /// Copy the selected ticket's id to the clipboard
    CopyTicketId,
    /// Quit the application
    Quit,
    /// Re-fetch from the ticket source
    Reload,
}

/// Computed view model for rendering
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    /// One column per distinct status in the collection
    pub columns: Vec<ColumnViewModel>,
    /// Filter box state
    pub filter: FilterViewModel,
    /// Currently selected ticket (if any)
    pub selected_ticket: Option<Ticket>,
    /// Toast notification to display
    pub toast: Option<Toast>,
    /// Empty state to display (if any)
    pub empty_state: Option<EmptyStateKind>,
    /// Detail line for the empty state (error text or filter query)
    pub empty_state_detail: Option<String>,
    /// Active grouping selector
    pub grouping: Grouping,
    /// Active sort selector
    pub sort: SortKey,
    /// Keyboard shortcuts to display in the footer
    pub shortcuts: Vec<Shortcut>,
    /// Whether a grab is in progress
    pub is_grabbing: bool,
    /// Number of tickets passing the filter
    pub total_visible_tickets: usize,
    /// Number of tickets in the whole collection
    pub total_all_tickets: usize,
    /// Malformed entries skipped by the last fetch
    pub skipped: usize,
    /// Timestamp of the last successful fetch
    pub fetched_at: Option<String>,
}

/// View model for a single column
#[derive(Debug, Clone)]
pub struct ColumnViewModel {
    /// Status label this column represents, as the server spelled it
    pub label: String,
    /// Whether this column is currently selected
    pub is_active: bool,
    /// Number of visible tickets in this column
    pub ticket_count: usize,
    /// Cards to display in this column
    pub cards: Vec<CardViewModel>,
    /// Scroll offset for this column (first visible row index)
    pub scroll_offset: usize,
    /// Number of rows actually rendered after scrolling
    pub visible_row_count: usize,
    /// Number of tickets above the visible area
    pub hidden_above: usize,
    /// Number of tickets below the visible area
    pub hidden_below: usize,
}

/// View model for a single ticket card
#[derive(Debug, Clone)]
pub struct CardViewModel {
    /// The ticket to render
    pub ticket: Ticket,
    /// Whether this card is under the cursor
    pub is_selected: bool,
    /// Whether this card is the grabbed ticket
    pub is_grabbed: bool,
}

/// View model for the filter box
#[derive(Debug, Clone)]
pub struct FilterViewModel {
    /// Current filter query
    pub query: String,
    /// Whether the filter box is focused
    pub is_focused: bool,
    /// Number of matching tickets
    pub result_count: usize,
}

/// One column of the board: its display label and the flat collection
/// indices of the tickets it holds, in collection order.
#[derive(Debug, Clone)]
struct ColumnLayout {
    label: String,
    indices: Vec<usize>,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Partition the collection into columns, one per distinct status, in
/// first-appearance order. Status labels compare case-insensitively; the
/// first spelling seen becomes the column label.
fn column_layout(tickets: &[Ticket]) -> Vec<ColumnLayout> {
    let mut columns: Vec<ColumnLayout> = Vec::new();
    for (idx, ticket) in tickets.iter().enumerate() {
        let found = columns
            .iter_mut()
            .find(|c| UniCase::new(c.label.as_str()) == UniCase::new(ticket.status.as_str()));
        match found {
            Some(column) => column.indices.push(idx),
            None => columns.push(ColumnLayout {
                label: ticket.status.clone(),
                indices: vec![idx],
            }),
        }
    }
    columns
}

/// Column layout with the filter applied. Columns whose tickets are all
/// filtered out stay present with no visible cards, so the column set is
/// stable while the user types.
fn visible_column_layout(state: &BoardState) -> Vec<ColumnLayout> {
    let columns = column_layout(&state.tickets);
    if state.filter_query.is_empty() {
        return columns;
    }
    let matching: HashSet<String> = filter_tickets(&state.tickets, &state.filter_query)
        .into_iter()
        .map(|ft| ft.ticket.id.clone())
        .collect();
    columns
        .into_iter()
        .map(|mut column| {
            column
                .indices
                .retain(|&i| matching.contains(&state.tickets[i].id));
            column
        })
        .collect()
}

/// Distinct status labels present in the collection, in first-appearance
/// order.
pub fn column_labels(tickets: &[Ticket]) -> Vec<String> {
    column_layout(tickets).into_iter().map(|c| c.label).collect()
}

/// Get the visible ticket at a column/row position, filter applied.
pub fn visible_ticket_at(state: &BoardState, column: usize, row: usize) -> Option<Ticket> {
    let columns = visible_column_layout(state);
    let idx = *columns.get(column)?.indices.get(row)?;
    state.tickets.get(idx).cloned()
}

fn scroll_key(label: &str) -> UniCase<String> {
    UniCase::new(label.to_string())
}

fn scroll_offset_for(state: &BoardState, label: &str) -> usize {
    state
        .column_scroll_offsets
        .get(&scroll_key(label))
        .copied()
        .unwrap_or(0)
}

/// Scroll offset that keeps the selected row vertically centered, clamped
/// to valid bounds near the top and bottom of the column.
fn adjust_column_scroll(selected_row: usize, column_height: usize, total_items: usize) -> usize {
    if column_height == 0 || total_items == 0 {
        return 0;
    }

    let half_height = column_height / 2;
    let ideal_offset = selected_row.saturating_sub(half_height);
    let max_offset = total_items.saturating_sub(column_height);
    ideal_offset.min(max_offset)
}

fn recenter_current_column(state: &mut BoardState, column_height: usize) {
    let columns = visible_column_layout(state);
    if let Some(column) = columns.get(state.current_column) {
        let offset = adjust_column_scroll(state.current_row, column_height, column.indices.len());
        state
            .column_scroll_offsets
            .insert(scroll_key(&column.label), offset);
    }
}

/// Clamp the cursor into the visible layout after anything that can shrink
/// it (filter edits, reloads, selector changes).
fn clamp_cursor(state: &mut BoardState, column_height: usize) {
    let columns = visible_column_layout(state);
    if columns.is_empty() {
        state.current_column = 0;
        state.current_row = 0;
        return;
    }
    state.current_column = state.current_column.min(columns.len() - 1);
    let len = columns[state.current_column].indices.len();
    state.current_row = state.current_row.min(len.saturating_sub(1));
    recenter_current_column(state, column_height);
}

/// Point the cursor at a ticket by id, wherever it now lives.
fn move_cursor_to_ticket(state: &mut BoardState, id: &str, column_height: usize) {
    let columns = visible_column_layout(state);
    for (col_idx, column) in columns.iter().enumerate() {
        if let Some(row) = column
            .indices
            .iter()
            .position(|&i| state.tickets[i].id == id)
        {
            state.current_column = col_idx;
            state.current_row = row;
            recenter_current_column(state, column_height);
            return;
        }
    }
    clamp_cursor(state, column_height);
}

/// Re-derive the display order for a new selector configuration. Manual
/// grab moves made under the old configuration do not survive this.
fn apply_config(state: &mut BoardState, config: DisplayConfig, column_height: usize) {
    state.config = config;
    state.tickets = derive_order(&state.tickets, config);
    state.column_scroll_offsets.clear();
    clamp_cursor(state, column_height);
}

/// Splice the grabbed ticket past its visible neighbor within its column,
/// using true collection indices. No neighbor in that direction is a no-op.
fn move_grabbed_within_column(state: &mut BoardState, column_height: usize, down: bool) {
    let Some(grab) = &state.grab else { return };
    let id = grab.ticket_id.clone();

    let columns = visible_column_layout(state);
    let Some((col_idx, row)) = find_visible_position(&columns, &state.tickets, &id) else {
        return;
    };
    let column = &columns[col_idx];

    let neighbor_row = if down {
        (row + 1 < column.indices.len()).then_some(row + 1)
    } else {
        row.checked_sub(1)
    };
    let Some(neighbor_row) = neighbor_row else { return };

    let grabbed_idx = column.indices[row];
    let neighbor_idx = column.indices[neighbor_row];

    // Remove at the grabbed index, reinsert at the neighbor's index. That
    // lands immediately after the neighbor moving down and immediately
    // before it moving up.
    let ticket = state.tickets.remove(grabbed_idx);
    state.tickets.insert(neighbor_idx, ticket);

    state.current_column = col_idx;
    state.current_row = neighbor_row;
    recenter_current_column(state, column_height);
}

/// Re-home the grabbed ticket into the adjacent column by rewriting its
/// status to that column's label. At the board edge this is a no-op.
fn move_grabbed_across_columns(state: &mut BoardState, column_height: usize, right: bool) {
    let Some(grab) = &state.grab else { return };
    let id = grab.ticket_id.clone();

    let columns = column_layout(&state.tickets);
    let Some(col_idx) = columns
        .iter()
        .position(|c| c.indices.iter().any(|&i| state.tickets[i].id == id))
    else {
        return;
    };

    let dest_idx = if right {
        (col_idx + 1 < columns.len()).then_some(col_idx + 1)
    } else {
        col_idx.checked_sub(1)
    };
    let Some(dest_idx) = dest_idx else { return };
    let dest_label = columns[dest_idx].label.clone();

    if let Some(ticket) = state.tickets.iter_mut().find(|t| t.id == id) {
        ticket.status = dest_label;
    }
    move_cursor_to_ticket(state, &id, column_height);
}

fn find_visible_position(
    columns: &[ColumnLayout],
    tickets: &[Ticket],
    id: &str,
) -> Option<(usize, usize)> {
    for (col_idx, column) in columns.iter().enumerate() {
        if let Some(row) = column.indices.iter().position(|&i| tickets[i].id == id) {
            return Some((col_idx, row));
        }
    }
    None
}

/// Pure function: apply action to state (reducer pattern)
///
/// Takes the current state and an action, returning the new state. Contains
/// only pure state transitions; fetching, clipboard access, and process exit
/// live in the component. The `column_height` parameter is the number of
/// visible cards per column, used to keep scroll offsets centered.
pub fn reduce_board_state(
    mut state: BoardState,
    action: BoardAction,
    column_height: usize,
) -> BoardState {
    match action {
        // Navigation
        BoardAction::MoveLeft => {
            state.current_column = state.current_column.saturating_sub(1);
            let columns = visible_column_layout(&state);
            if let Some(column) = columns.get(state.current_column) {
                state.current_row = state.current_row.min(column.indices.len().saturating_sub(1));
            }
            recenter_current_column(&mut state, column_height);
        }
        BoardAction::MoveRight => {
            let columns = visible_column_layout(&state);
            if state.current_column + 1 < columns.len() {
                state.current_column += 1;
            }
            if let Some(column) = columns.get(state.current_column) {
                state.current_row = state.current_row.min(column.indices.len().saturating_sub(1));
            }
            recenter_current_column(&mut state, column_height);
        }
        BoardAction::MoveUp => {
            state.current_row = state.current_row.saturating_sub(1);
            recenter_current_column(&mut state, column_height);
        }
        BoardAction::MoveDown => {
            let columns = visible_column_layout(&state);
            let total = columns
                .get(state.current_column)
                .map(|c| c.indices.len())
                .unwrap_or(0);
            state.current_row = (state.current_row + 1).min(total.saturating_sub(1));
            recenter_current_column(&mut state, column_height);
        }
        BoardAction::GoToTop => {
            state.current_row = 0;
            let columns = visible_column_layout(&state);
            if let Some(column) = columns.get(state.current_column) {
                let label = column.label.clone();
                state.column_scroll_offsets.insert(scroll_key(&label), 0);
            }
        }
        BoardAction::GoToBottom => {
            let columns = visible_column_layout(&state);
            let total = columns
                .get(state.current_column)
                .map(|c| c.indices.len())
                .unwrap_or(0);
            state.current_row = total.saturating_sub(1);
            recenter_current_column(&mut state, column_height);
        }
        BoardAction::PageDown => {
            let columns = visible_column_layout(&state);
            let total = columns
                .get(state.current_column)
                .map(|c| c.indices.len())
                .unwrap_or(0);
            let jump = column_height / 2;
            state.current_row = (state.current_row + jump).min(total.saturating_sub(1));
            recenter_current_column(&mut state, column_height);
        }
        BoardAction::PageUp => {
            let jump = column_height / 2;
            state.current_row = state.current_row.saturating_sub(jump);
            recenter_current_column(&mut state, column_height);
        }

        // Display selectors
        BoardAction::SetGrouping(grouping) => {
            let config = state.config.with_grouping(grouping);
            apply_config(&mut state, config, column_height);
        }
        BoardAction::SetSort(sort) => {
            let config = state.config.with_sort(sort);
            apply_config(&mut state, config, column_height);
        }
        BoardAction::CycleGrouping => {
            let config = state.config.with_grouping(state.config.grouping.next());
            apply_config(&mut state, config, column_height);
        }
        BoardAction::CycleGroupingBack => {
            let config = state.config.with_grouping(state.config.grouping.prev());
            apply_config(&mut state, config, column_height);
        }
        BoardAction::CycleSort => {
            let config = state.config.with_sort(state.config.sort.next());
            apply_config(&mut state, config, column_height);
        }
        BoardAction::CycleSortBack => {
            let config = state.config.with_sort(state.config.sort.prev());
            apply_config(&mut state, config, column_height);
        }

        // Filter
        BoardAction::FocusFilter => {
            state.filter_focused = true;
        }
        BoardAction::UpdateFilter(query) => {
            state.filter_query = query;
            clamp_cursor(&mut state, column_height);
        }
        BoardAction::ExitFilter => {
            state.filter_focused = false;
        }
        BoardAction::ClearFilterAndExit => {
            state.filter_query = String::new();
            state.filter_focused = false;
            state.toast = None;
            clamp_cursor(&mut state, column_height);
        }

        // Grab
        BoardAction::Grab => {
            if let Some(ticket) = visible_ticket_at(&state, state.current_column, state.current_row)
            {
                state.grab = Some(GrabState {
                    ticket_id: ticket.id.clone(),
                    snapshot: state.tickets.clone(),
                });
            }
        }
        BoardAction::GrabMoveLeft => {
            move_grabbed_across_columns(&mut state, column_height, false);
        }
        BoardAction::GrabMoveRight => {
            move_grabbed_across_columns(&mut state, column_height, true);
        }
        BoardAction::GrabMoveUp => {
            move_grabbed_within_column(&mut state, column_height, false);
        }
        BoardAction::GrabMoveDown => {
            move_grabbed_within_column(&mut state, column_height, true);
        }
        BoardAction::Drop => {
            state.grab = None;
        }
        BoardAction::CancelGrab => {
            if let Some(grab) = state.grab.take() {
                state.tickets = grab.snapshot;
                move_cursor_to_ticket(&mut state, &grab.ticket_id, column_height);
            }
        }

        // Data lifecycle
        BoardAction::TicketsLoaded {
            tickets,
            skipped,
            fetched_at,
        } => {
            state.tickets = derive_order(&tickets, state.config);
            state.phase = FetchPhase::Ready;
            state.skipped = skipped;
            state.fetched_at = Some(fetched_at);
            state.grab = None;
            state.column_scroll_offsets.clear();
            if skipped > 0 {
                let noun = if skipped == 1 { "entry" } else { "entries" };
                state.toast = Some(Toast::warning(format!(
                    "Skipped {skipped} malformed ticket {noun}"
                )));
            }
            clamp_cursor(&mut state, column_height);
        }
        BoardAction::FetchFailed(message) => {
            state.phase = FetchPhase::Failed(message.clone());
            state.toast = Some(Toast::error(message));
        }
        BoardAction::Reload => {
            // The fetch itself runs in the component
            state.phase = FetchPhase::Loading;
        }

        // Handled by the component (clipboard, process exit)
        BoardAction::CopyTicketId | BoardAction::Quit => {}
    }
    state
}

/// Which empty state to show, if any, with its optional detail line.
pub fn compute_empty_state(
    state: &BoardState,
    total_visible: usize,
) -> (Option<EmptyStateKind>, Option<String>) {
    if state.tickets.is_empty() {
        return match &state.phase {
            FetchPhase::Loading => (Some(EmptyStateKind::Loading), None),
            FetchPhase::Failed(message) => {
                (Some(EmptyStateKind::FetchFailed), Some(message.clone()))
            }
            FetchPhase::Ready => (Some(EmptyStateKind::NoTickets), None),
        };
    }
    if total_visible == 0 && !state.filter_query.is_empty() {
        return (
            Some(EmptyStateKind::NoSearchResults),
            Some(state.filter_query.clone()),
        );
    }
    (None, None)
}

/// Pure function: compute view model from state
///
/// Produces everything the render pass needs: the column partition with
/// scroll windows, the selected ticket, the empty state, and the footer
/// shortcuts for the current input mode.
pub fn compute_board_view_model(state: &BoardState, column_height: usize) -> BoardViewModel {
    let total_all = state.tickets.len();
    let visible = visible_column_layout(state);
    let total_visible: usize = visible.iter().map(|c| c.indices.len()).sum();

    let grabbed_id = state.grab.as_ref().map(|g| g.ticket_id.as_str());

    let columns: Vec<ColumnViewModel> = visible
        .iter()
        .enumerate()
        .map(|(col_idx, column)| {
            let is_active = state.current_column == col_idx && !state.filter_focused;
            let total_count = column.indices.len();
            let scroll_offset = scroll_offset_for(state, &column.label);

            let start = scroll_offset.min(total_count);
            let end = (scroll_offset + column_height).min(total_count);

            let cards: Vec<CardViewModel> = column
                .indices
                .iter()
                .enumerate()
                .skip(start)
                .take(end - start)
                .map(|(row_idx, &ticket_idx)| {
                    let ticket = state.tickets[ticket_idx].clone();
                    let is_grabbed = grabbed_id == Some(ticket.id.as_str());
                    CardViewModel {
                        is_selected: is_active && row_idx == state.current_row,
                        is_grabbed,
                        ticket,
                    }
                })
                .collect();

            let visible_row_count = cards.len();

            ColumnViewModel {
                label: column.label.clone(),
                is_active,
                ticket_count: total_count,
                cards,
                scroll_offset,
                visible_row_count,
                hidden_above: start,
                hidden_below: total_count.saturating_sub(end),
            }
        })
        .collect();

    let selected_ticket = visible_ticket_at(state, state.current_column, state.current_row);
    let (empty_state, empty_state_detail) = compute_empty_state(state, total_visible);

    let show_full_empty_state = matches!(
        empty_state,
        Some(EmptyStateKind::Loading | EmptyStateKind::NoTickets | EmptyStateKind::FetchFailed)
    );

    let shortcuts = if state.grab.is_some() {
        grab_shortcuts()
    } else if state.filter_focused {
        filter_shortcuts()
    } else if show_full_empty_state {
        empty_shortcuts()
    } else {
        board_shortcuts()
    };

    BoardViewModel {
        columns,
        filter: FilterViewModel {
            query: state.filter_query.clone(),
            is_focused: state.filter_focused,
            result_count: total_visible,
        },
        selected_ticket,
        toast: state.toast.clone(),
        empty_state,
        empty_state_detail,
        grouping: state.config.grouping,
        sort: state.config.sort,
        shortcuts,
        is_grabbing: state.grab.is_some(),
        total_visible_tickets: total_visible,
        total_all_tickets: total_all,
        skipped: state.skipped,
        fetched_at: state.fetched_at.clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================
