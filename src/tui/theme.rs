//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the CLI output (commands/mod.rs).

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors keyed by well-known column labels
    pub status_backlog: Color,
    pub status_todo: Color,
    pub status_in_progress: Color,
    pub status_done: Color,
    pub status_cancelled: Color,
    pub status_other: Color,

    // Priority colors
    pub priority_urgent: Color,
    pub priority_high: Color,
    pub priority_default: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub border_grabbed: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Status colors (matching commands/mod.rs)
            status_backlog: Color::Magenta,
            status_todo: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_done: Color::Green,
            status_cancelled: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            status_other: Color::White,

            // Priority colors
            priority_urgent: Color::Red,
            priority_high: Color::Yellow,
            priority_default: Color::White,

            // UI colors
            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            border_grabbed: Color::Magenta,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a status label.
    ///
    /// Statuses arrive as free-form strings, so matching is by lowercased
    /// label with a fallback for anything unrecognized.
    pub fn status_color(&self, status: &str) -> Color {
        match status.to_lowercase().as_str() {
            "backlog" => self.status_backlog,
            "todo" | "to do" => self.status_todo,
            "in progress" | "in-progress" => self.status_in_progress,
            "done" | "complete" | "completed" => self.status_done,
            "cancelled" | "canceled" => self.status_cancelled,
            _ => self.status_other,
        }
    }

    /// Get the color for a numeric priority level (higher is more urgent)
    pub fn priority_color(&self, level: i64) -> Color {
        match level {
            l if l >= 4 => self.priority_urgent,
            3 => self.priority_high,
            _ => self.priority_default,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_is_case_insensitive() {
        let theme = Theme::default();
        assert_eq!(theme.status_color("In Progress"), theme.status_in_progress);
        assert_eq!(theme.status_color("in progress"), theme.status_in_progress);
        assert_eq!(theme.status_color("DONE"), theme.status_done);
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let theme = Theme::default();
        assert_eq!(theme.status_color("Triage"), theme.status_other);
    }

    #[test]
    fn test_priority_color_by_level() {
        let theme = Theme::default();
        assert_eq!(theme.priority_color(4), theme.priority_urgent);
        assert_eq!(theme.priority_color(7), theme.priority_urgent);
        assert_eq!(theme.priority_color(3), theme.priority_high);
        assert_eq!(theme.priority_color(0), theme.priority_default);
    }
}
