//! Filter input component
//!
//! A single-line text input with a "/" prefix for narrowing the board.
//! Edits are reported through `on_change` so the board reducer stays the
//! single owner of the query text.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the InlineFilterBox component
#[derive(Default, Props)]
pub struct InlineFilterBoxProps {
    /// Current query text, owned by the caller
    pub value: String,
    /// Whether the filter box has focus
    pub has_focus: bool,
    /// Called with the full query text after each edit
    pub on_change: HandlerMut<'static, String>,
    /// Match count to show right of the input, when a query is active
    pub result_count: Option<usize>,
}

/// Inline filter input for the board header area
#[component]
pub fn InlineFilterBox(props: &mut InlineFilterBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            height: 1,
        ) {
            View(
                margin_right: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(
                    content: "/",
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }

            View(flex_grow: 1.0) {
                TextInput(
                    value: props.value.clone(),
                    has_focus: has_focus,
                    on_change: props.on_change.take(),
                    color: theme.text,
                )
            }

            #(props.result_count.map(|count| {
                let noun = if count == 1 { "match" } else { "matches" };
                element! {
                    Text(
                        content: format!("{count} {noun}"),
                        color: theme.text_dimmed,
                    )
                }
            }))
        }
    }
}
