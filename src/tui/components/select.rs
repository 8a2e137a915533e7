//! Compact inline selector component for enum fields
//!
//! Displays as: Label: ◀ value ▶. The value is cycled from the keyboard
//! (b/B for grouping, s/S for sort) rather than by clicking the arrows.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{Grouping, SortKey};

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    /// List of options to choose from
    pub options: Vec<String>,
    /// Index of the currently selected option
    pub selected_index: usize,
    /// Whether the selector has focus
    pub has_focus: bool,
    /// Optional color for the value
    pub value_color: Option<Color>,
}

/// Compact inline selector component with arrow indicators
///
/// Renders as: Label: ◀ value ▶
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let label_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let arrow_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let value_color = props.value_color.unwrap_or(theme.text);

    let current_value = props
        .options
        .get(props.selected_index)
        .cloned()
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(
                    content: format!("{}:", label),
                    color: label_color,
                )
            }))
            Text(
                content: "◀",
                color: arrow_color,
            )
            Text(
                content: current_value,
                color: value_color,
            )
            Text(
                content: "▶",
                color: arrow_color,
            )
        }
    }
}

/// Helper trait for types that can be used with Select
pub trait Selectable: Sized + Clone + Copy + 'static {
    /// Get all possible values for this type
    fn all_values() -> Vec<Self>;
    /// Get the display string for this value
    fn display(&self) -> String;
    /// Get the index of this value in all_values
    fn index(&self) -> usize;
    /// Get the value at the given index
    fn from_index(index: usize) -> Option<Self>;
    /// Get the next value (wrapping)
    fn next(&self) -> Self {
        let values = Self::all_values();
        let next_idx = (self.index() + 1) % values.len();
        values[next_idx]
    }
    /// Get the previous value (wrapping)
    fn prev(&self) -> Self {
        let values = Self::all_values();
        let prev_idx = if self.index() == 0 {
            values.len() - 1
        } else {
            self.index() - 1
        };
        values[prev_idx]
    }
}

impl Selectable for Grouping {
    fn all_values() -> Vec<Self> {
        vec![Grouping::Status, Grouping::User, Grouping::Priority]
    }

    fn display(&self) -> String {
        self.to_string()
    }

    fn index(&self) -> usize {
        match self {
            Grouping::Status => 0,
            Grouping::User => 1,
            Grouping::Priority => 2,
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Grouping::Status),
            1 => Some(Grouping::User),
            2 => Some(Grouping::Priority),
            _ => None,
        }
    }
}

impl Selectable for SortKey {
    fn all_values() -> Vec<Self> {
        vec![SortKey::Priority, SortKey::Title]
    }

    fn display(&self) -> String {
        self.to_string()
    }

    fn index(&self) -> usize {
        match self {
            SortKey::Priority => 0,
            SortKey::Title => 1,
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SortKey::Priority),
            1 => Some(SortKey::Title),
            _ => None,
        }
    }
}

/// Get option strings for a selectable type
pub fn options_for<T: Selectable>() -> Vec<String> {
    T::all_values().iter().map(|v| v.display()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_selectable() {
        assert_eq!(Grouping::Status.index(), 0);
        assert_eq!(Grouping::Status.next(), Grouping::User);
        assert_eq!(Grouping::Status.prev(), Grouping::Priority);
        assert_eq!(Grouping::from_index(2), Some(Grouping::Priority));
        assert_eq!(Grouping::from_index(9), None);
    }

    #[test]
    fn test_sort_key_selectable() {
        assert_eq!(SortKey::Priority.index(), 0);
        assert_eq!(SortKey::Priority.next(), SortKey::Title);
        assert_eq!(SortKey::Title.next(), SortKey::Priority);
        assert_eq!(SortKey::Title.prev(), SortKey::Priority);
    }

    #[test]
    fn test_options_for() {
        let grouping_opts = options_for::<Grouping>();
        assert_eq!(grouping_opts, vec!["status", "user", "priority"]);

        let sort_opts = options_for::<SortKey>();
        assert_eq!(sort_opts, vec!["priority", "title"]);
    }
}
