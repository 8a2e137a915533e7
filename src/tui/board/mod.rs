//! Interactive kanban board (`corkboard board`)
//!
//! Renders the ticket collection as one column per status, with grouping
//! and sort selectors, fuzzy filtering, and keyboard-driven card moves.
//! All state transitions go through the reducer in [`model`]; this module
//! owns the fetch lifecycle, clipboard access, and the render tree.

pub mod handlers;
pub mod model;

use std::sync::Arc;

use iocraft::prelude::*;

use crate::error::{CorkboardError, Result};
use crate::source::TicketSource;
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, InlineFilterBox, Select, Selectable, TicketCard, Toast,
    options_for, render_toast,
};
use crate::tui::theme::theme;
use crate::types::{DisplayConfig, Grouping, SortKey};

use handlers::{input_mode, key_to_action};
use model::{
    BoardAction, BoardState, compute_board_view_model, reduce_board_state, visible_ticket_at,
};

/// Props for the KanbanBoard component
#[derive(Default, Props)]
pub struct KanbanBoardProps {
    /// Where the collection comes from. Without a source the board stays
    /// in its loading state, which the render tests rely on.
    pub source: Option<Arc<dyn TicketSource>>,
    /// Initial grouping and sort selectors
    pub config: DisplayConfig,
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use clipboard_rs::Clipboard;

    let ctx = clipboard_rs::ClipboardContext::new()
        .map_err(|e| CorkboardError::Clipboard(e.to_string()))?;
    ctx.set_text(text.to_string())
        .map_err(|e| CorkboardError::Clipboard(e.to_string()))
}

/// The kanban board component
#[component]
pub fn KanbanBoard(props: &KanbanBoardProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let initial_config = props.config;
    let mut board_state = hooks.use_state(move || BoardState {
        config: initial_config,
        ..BoardState::default()
    });
    let mut should_exit = hooks.use_state(|| false);
    let mut is_loading = hooks.use_state(|| false);
    let mut load_started = hooks.use_state(|| false);
    let mut needs_reload = hooks.use_state(|| false);

    // The terminal-event closure outlives any single render, so the current
    // column height travels through a state slot instead of a capture.
    let mut column_height_slot = hooks.use_state(|| 1usize);

    // header + selectors + filter + column headers + footer
    let available_height = height.saturating_sub(6);
    let cards_per_column = (available_height.saturating_sub(2) / 4).max(1) as usize;
    if column_height_slot.get() != cards_per_column {
        column_height_slot.set(cards_per_column);
    }

    let source = props.source.clone();
    let mut load_handler = hooks.use_async_handler(move |_: ()| {
        let source = source.clone();
        async move {
            let Some(source) = source else {
                is_loading.set(false);
                return;
            };
            let action = match source.fetch_tickets().await {
                Ok(batch) => {
                    let fetched_at = jiff::Zoned::now().strftime("%H:%M:%S").to_string();
                    BoardAction::TicketsLoaded {
                        tickets: batch.tickets,
                        skipped: batch.skipped.len(),
                        fetched_at,
                    }
                }
                Err(e) => BoardAction::FetchFailed(e.to_string()),
            };
            let current = board_state.read().clone();
            let next = reduce_board_state(current, action, column_height_slot.get());
            board_state.set(next);
            is_loading.set(false);
        }
    });

    // Initial fetch, once
    if !load_started.get() {
        load_started.set(true);
        is_loading.set(true);
        load_handler(());
    }

    // Reload requested from the event handler
    if needs_reload.get() && !is_loading.get() {
        needs_reload.set(false);
        is_loading.set(true);
        load_handler(());
    }

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let current = board_state.read().clone();
                let mode = input_mode(&current);
                let Some(action) = key_to_action(code, modifiers, mode) else {
                    return;
                };
                let column_height = column_height_slot.get();

                match action {
                    BoardAction::Quit => {
                        should_exit.set(true);
                    }
                    BoardAction::Reload => {
                        let next = reduce_board_state(current, BoardAction::Reload, column_height);
                        board_state.set(next);
                        needs_reload.set(true);
                    }
                    BoardAction::CopyTicketId => {
                        let mut next = current;
                        if let Some(ticket) =
                            visible_ticket_at(&next, next.current_column, next.current_row)
                        {
                            next.toast = match copy_to_clipboard(&ticket.id) {
                                Ok(()) => Some(Toast::success(format!("Copied {}", ticket.id))),
                                Err(e) => Some(Toast::error(e.to_string())),
                            };
                        }
                        board_state.set(next);
                    }
                    other => {
                        let next = reduce_board_state(current, other, column_height);
                        board_state.set(next);
                    }
                }
            }
            _ => {}
        }
    });

    // Exit if requested
    if should_exit.get() {
        system.exit();
    }

    let theme = theme();
    let state_snapshot = board_state.read().clone();
    let vm = compute_board_view_model(&state_snapshot, cards_per_column);

    let show_full_empty_state = matches!(
        vm.empty_state,
        Some(EmptyStateKind::Loading | EmptyStateKind::NoTickets | EmptyStateKind::FetchFailed)
    );
    let no_match = vm.empty_state == Some(EmptyStateKind::NoSearchResults);

    // Header summary, right-aligned
    let mut header_bits: Vec<String> = Vec::new();
    if is_loading.get() {
        header_bits.push("fetching...".to_string());
    } else if vm.total_visible_tickets == vm.total_all_tickets {
        header_bits.push(format!("{} tickets", vm.total_all_tickets));
    } else {
        header_bits.push(format!(
            "{}/{} tickets",
            vm.total_visible_tickets, vm.total_all_tickets
        ));
    }
    if vm.skipped > 0 {
        header_bits.push(format!("{} skipped", vm.skipped));
    }
    if let Some(at) = &vm.fetched_at {
        header_bits.push(format!("fetched {at}"));
    }
    if let Some(source) = &props.source {
        header_bits.push(source.describe());
    }
    let header_status = header_bits.join("  |  ");

    let filter_result_count =
        (!vm.filter.query.is_empty()).then_some(vm.filter.result_count);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            // Title bar
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: theme.highlight,
            ) {
                Text(
                    content: "Corkboard",
                    color: theme.highlight_text,
                    weight: Weight::Bold,
                )
                Text(
                    content: header_status,
                    color: theme.highlight_text,
                )
            }

            #(if show_full_empty_state {
                Some(element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(
                            kind: vm.empty_state.unwrap_or_default(),
                            detail: vm.empty_state_detail.clone(),
                        )
                    }
                })
            } else {
                Some(element! {
                    View(
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                        width: 100pct,
                        overflow: Overflow::Hidden,
                    ) {
                        // Grouping and sort selectors
                        View(
                            width: 100pct,
                            height: 1,
                            padding_left: 1,
                            padding_right: 1,
                            flex_direction: FlexDirection::Row,
                            gap: 2,
                        ) {
                            Select(
                                label: Some("Group"),
                                options: options_for::<Grouping>(),
                                selected_index: vm.grouping.index(),
                            )
                            Select(
                                label: Some("Sort"),
                                options: options_for::<SortKey>(),
                                selected_index: vm.sort.index(),
                            )
                        }

                        // Filter bar
                        View(
                            width: 100pct,
                            height: 1,
                            padding_left: 1,
                            padding_right: 1,
                        ) {
                            InlineFilterBox(
                                value: vm.filter.query.clone(),
                                has_focus: vm.filter.is_focused,
                                result_count: filter_result_count,
                                on_change: move |query: String| {
                                    let current = board_state.read().clone();
                                    let next = reduce_board_state(
                                        current,
                                        BoardAction::UpdateFilter(query),
                                        column_height_slot.get(),
                                    );
                                    board_state.set(next);
                                },
                            )
                        }

                        #(if no_match {
                            Some(element! {
                                View(flex_grow: 1.0, width: 100pct) {
                                    EmptyState(
                                        kind: EmptyStateKind::NoSearchResults,
                                        detail: vm.empty_state_detail.clone(),
                                    )
                                }
                            })
                        } else {
                            Some(element! {
                                View(
                                    flex_grow: 1.0,
                                    flex_direction: FlexDirection::Column,
                                    width: 100pct,
                                ) {
                                    // Column headers
                                    View(
                                        width: 100pct,
                                        height: 2,
                                        flex_direction: FlexDirection::Row,
                                    ) {
                                        #(vm.columns.iter().map(|column| {
                                            let status_color = theme.status_color(&column.label);
                                            let is_active = column.is_active;

                                            element! {
                                                View(
                                                    flex_grow: 1.0,
                                                    flex_shrink: 0.0,
                                                    flex_direction: FlexDirection::Column,
                                                    align_items: AlignItems::Center,
                                                    border_edges: Edges::Bottom,
                                                    border_style: BorderStyle::Single,
                                                    border_color: if is_active { theme.border_focused } else { theme.border },
                                                ) {
                                                    Text(
                                                        content: column.label.clone(),
                                                        color: if is_active { status_color } else { theme.text_dimmed },
                                                        weight: if is_active { Weight::Bold } else { Weight::Normal },
                                                    )
                                                    Text(
                                                        content: column.ticket_count.to_string(),
                                                        color: theme.text_dimmed,
                                                    )
                                                }
                                            }
                                        }))
                                    }

                                    // Column content
                                    View(
                                        flex_grow: 1.0,
                                        width: 100pct,
                                        flex_direction: FlexDirection::Row,
                                        overflow: Overflow::Hidden,
                                    ) {
                                        #(vm.columns.iter().map(|column| {
                                            element! {
                                                View(
                                                    flex_grow: 1.0,
                                                    flex_shrink: 0.0,
                                                    height: 100pct,
                                                    flex_direction: FlexDirection::Column,
                                                    padding_left: 1,
                                                    padding_right: 1,
                                                    border_edges: Edges::Right,
                                                    border_style: BorderStyle::Single,
                                                    border_color: theme.border,
                                                    overflow: Overflow::Hidden,
                                                ) {
                                                    #(if column.hidden_above > 0 {
                                                        Some(element! {
                                                            View(height: 1, padding_left: 1) {
                                                                Text(
                                                                    content: format!("  {} more above", column.hidden_above),
                                                                    color: theme.text_dimmed,
                                                                )
                                                            }
                                                        })
                                                    } else {
                                                        None
                                                    })

                                                    #(column.cards.iter().map(|card| {
                                                        element! {
                                                            View(margin_top: 1) {
                                                                TicketCard(
                                                                    ticket: card.ticket.clone(),
                                                                    is_selected: card.is_selected,
                                                                    is_grabbed: card.is_grabbed,
                                                                )
                                                            }
                                                        }
                                                    }))

                                                    View(flex_grow: 1.0)

                                                    #(if column.hidden_below > 0 {
                                                        Some(element! {
                                                            View(height: 1, padding_left: 1) {
                                                                Text(
                                                                    content: format!("  {} more below", column.hidden_below),
                                                                    color: theme.text_dimmed,
                                                                )
                                                            }
                                                        })
                                                    } else {
                                                        None
                                                    })
                                                }
                                            }
                                        }))
                                    }
                                }
                            })
                        })
                    }
                })
            })

            // Toast notification
            #(render_toast(&vm.toast))

            // Footer
            Footer(shortcuts: vm.shortcuts.clone())
        }
    }
}
