//! Ticket card component for the kanban board
//!
//! A compact card view showing ticket id, title (truncated), priority badge,
//! and assignee.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Ticket;
use crate::utils::{truncate_string, wrap_text_lines};

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The ticket to display
    pub ticket: Ticket,
    /// Whether this card is under the cursor
    pub is_selected: bool,
    /// Whether this card is grabbed for a move
    pub is_grabbed: bool,
    /// Available width for the card content (in characters)
    pub width: Option<u32>,
}

/// Format the priority badge shown on the card bottom row
pub fn priority_badge(level: i64, name: &str) -> String {
    if name.is_empty() {
        format!("P{level}")
    } else {
        format!("P{level} {name}")
    }
}

/// Compact ticket card for kanban board columns
///
/// Layout:
/// ```text
/// +-------------------+
/// | CAM-4             |
/// | Add multi-select  |
/// | in the dropdown   |
/// | P4 Urgent  anoop  |
/// +-------------------+
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let ticket = &props.ticket;

    // Colors
    let border_color = if props.is_grabbed {
        theme.border_grabbed
    } else if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let bg_color = if props.is_selected && !props.is_grabbed {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if props.is_selected && !props.is_grabbed {
        theme.highlight_text
    } else {
        theme.text
    };

    // Priority badge
    let badge = priority_badge(ticket.priority_level, &ticket.priority_name);
    let priority_color = if props.is_selected && !props.is_grabbed {
        theme.highlight_text
    } else {
        theme.priority_color(ticket.priority_level)
    };

    // Calculate available width for text rows
    // Card has padding_left: 1, padding_right: 1, and border chars (2 total)
    // So available text width = card_width - 4
    let default_width = 20u32;
    let card_width = props.width.unwrap_or(default_width);
    let text_width = card_width.saturating_sub(4) as usize;
    let text_width = text_width.max(8);

    // Wrap title to up to 3 lines
    let title_lines = wrap_text_lines(&ticket.title, text_width, 3);

    // Assignee shares the bottom row with the badge
    let assignee_width = text_width.saturating_sub(badge.chars().count() + 2);
    let assignee = truncate_string(&ticket.assigned_user, assignee_width);

    // Grab indicator takes precedence over the cursor indicator
    let indicator = if props.is_grabbed {
        "◆"
    } else if props.is_selected {
        ">"
    } else {
        " "
    };

    element! {
        View(
            width: 100pct,
            min_height: 3,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            // ID row with indicator
            View(flex_direction: FlexDirection::Row) {
                Text(
                    content: indicator,
                    color: if props.is_grabbed { theme.border_grabbed } else { text_color },
                    weight: Weight::Bold,
                )
                Text(
                    content: ticket.id.clone(),
                    color: if props.is_selected && !props.is_grabbed { theme.highlight_text } else { theme.id_color },
                    weight: Weight::Bold,
                )
            }
            // Title rows (up to 3 lines)
            #(title_lines.iter().map(|line| {
                element! {
                    Text(
                        content: line.clone(),
                        color: text_color,
                    )
                }
            }))
            // Priority and assignee row
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: badge,
                    color: priority_color,
                    weight: if ticket.priority_level >= 4 { Weight::Bold } else { Weight::Normal },
                )
                Text(
                    content: assignee,
                    color: if props.is_selected && !props.is_grabbed { theme.highlight_text } else { theme.text_dimmed },
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_badge_with_name() {
        assert_eq!(priority_badge(4, "Urgent"), "P4 Urgent");
        assert_eq!(priority_badge(0, "No priority"), "P0 No priority");
    }

    #[test]
    fn test_priority_badge_without_name() {
        assert_eq!(priority_badge(2, ""), "P2");
    }
}
