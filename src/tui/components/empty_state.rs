//! Empty state component
//!
//! Displays helpful messages while tickets are loading, when the board is
//! empty, or when a fetch has failed.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Tickets are being fetched
    #[default]
    Loading,
    /// Fetch succeeded but returned no tickets
    NoTickets,
    /// Fetch failed
    FetchFailed,
    /// No tickets match the active filter
    NoSearchResults,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Optional detail line (error text for FetchFailed, query for NoSearchResults)
    pub detail: Option<String>,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Fetching tickets...", ""),
        EmptyStateKind::NoTickets => (
            "i",
            "No Tickets",
            "The board is empty.",
            "Press 'r' to reload, or check the configured endpoint.",
        ),
        EmptyStateKind::FetchFailed => (
            "!",
            "Fetch Failed",
            "Could not load tickets from the configured source.",
            "Press 'r' to retry, or 'q' to quit.",
        ),
        EmptyStateKind::NoSearchResults => (
            "?",
            "No Matches",
            "No tickets match your filter.",
            "Try a different filter, or press Esc to clear.",
        ),
    };

    let accent = if props.kind == EmptyStateKind::FetchFailed {
        theme.priority_urgent
    } else {
        theme.border
    };
    let icon_color = if props.kind == EmptyStateKind::FetchFailed {
        theme.priority_urgent
    } else {
        theme.text_dimmed
    };
    let detail_color = if props.kind == EmptyStateKind::FetchFailed {
        theme.priority_urgent
    } else {
        theme.search_match
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            // Icon in a box
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: accent,
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: icon_color,
                    weight: Weight::Bold,
                )
            }

            // Title
            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            // Message
            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            // Detail line (if applicable)
            #(props.detail.as_ref().map(|detail| {
                let content = if props.kind == EmptyStateKind::NoSearchResults {
                    format!("Filter: \"{detail}\"")
                } else {
                    detail.clone()
                };
                element! {
                    View(margin_top: 1, max_width: 70) {
                        Text(
                            content: content,
                            color: detail_color,
                        )
                    }
                }
            }))

            // Hint
            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 2) {
                        Text(
                            content: hint,
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}
