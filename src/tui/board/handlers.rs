//! Keyboard handling for the kanban board view
//!
//! Maps key events to abstract board actions, enabling unit testing of the
//! key bindings without any iocraft dependencies. Which keys are live
//! depends on the input mode: normal navigation, filter entry, or an
//! in-progress grab.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::{BoardAction, BoardState};

/// The board's three input modes. Filter entry wins over a grab, though the
/// key bindings never let both be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Filter,
    Grab,
}

/// Derive the input mode from the current state.
pub fn input_mode(state: &BoardState) -> InputMode {
    if state.filter_focused {
        InputMode::Filter
    } else if state.grab.is_some() {
        InputMode::Grab
    } else {
        InputMode::Normal
    }
}

/// Convert a key event to a BoardAction (pure function)
///
/// Returns `None` if the key doesn't map to any action in the given mode.
/// In filter mode, character input returns `None` so the text input
/// component can consume it.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    mode: InputMode,
) -> Option<BoardAction> {
    // Ctrl-q / Ctrl-c quit from any mode
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(BoardAction::Quit),
            _ => None,
        };
    }

    match mode {
        InputMode::Filter => match code {
            KeyCode::Esc => Some(BoardAction::ClearFilterAndExit),
            KeyCode::Enter | KeyCode::Tab => Some(BoardAction::ExitFilter),
            _ => None,
        },

        InputMode::Grab => match code {
            KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::GrabMoveLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::GrabMoveRight),
            KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::GrabMoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::GrabMoveUp),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => Some(BoardAction::Drop),
            KeyCode::Esc => Some(BoardAction::CancelGrab),
            KeyCode::Char('q') => Some(BoardAction::Quit),
            _ => None,
        },

        InputMode::Normal => match code {
            // Navigation
            KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::MoveLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::MoveRight),
            KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::MoveUp),
            KeyCode::Char('g') => Some(BoardAction::GoToTop),
            KeyCode::Char('G') => Some(BoardAction::GoToBottom),
            KeyCode::PageDown => Some(BoardAction::PageDown),
            KeyCode::PageUp => Some(BoardAction::PageUp),

            // Display selectors
            KeyCode::Char('b') => Some(BoardAction::CycleGrouping),
            KeyCode::Char('B') => Some(BoardAction::CycleGroupingBack),
            KeyCode::Char('s') => Some(BoardAction::CycleSort),
            KeyCode::Char('S') => Some(BoardAction::CycleSortBack),

            // Grab
            KeyCode::Char(' ') | KeyCode::Char('m') => Some(BoardAction::Grab),

            // Actions
            KeyCode::Char('/') => Some(BoardAction::FocusFilter),
            KeyCode::Char('y') => Some(BoardAction::CopyTicketId),
            KeyCode::Char('r') => Some(BoardAction::Reload),
            KeyCode::Char('q') => Some(BoardAction::Quit),
            KeyCode::Esc => Some(BoardAction::ClearFilterAndExit),

            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::board::model::GrabState;

    #[test]
    fn test_input_mode_from_state() {
        let state = BoardState::default();
        assert_eq!(input_mode(&state), InputMode::Normal);

        let state = BoardState {
            filter_focused: true,
            ..BoardState::default()
        };
        assert_eq!(input_mode(&state), InputMode::Filter);

        let state = BoardState {
            grab: Some(GrabState {
                ticket_id: "1".to_string(),
                snapshot: Vec::new(),
            }),
            ..BoardState::default()
        };
        assert_eq!(input_mode(&state), InputMode::Grab);
    }

    #[test]
    fn test_key_to_action_navigation() {
        assert_eq!(
            key_to_action(KeyCode::Char('h'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::MoveLeft)
        );
        assert_eq!(
            key_to_action(KeyCode::Left, KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::MoveLeft)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('l'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::MoveRight)
        );
        assert_eq!(
            key_to_action(KeyCode::Right, KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::MoveRight)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Down, KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('k'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::MoveUp)
        );
        assert_eq!(
            key_to_action(KeyCode::Up, KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::MoveUp)
        );
    }

    #[test]
    fn test_key_to_action_scroll_navigation() {
        assert_eq!(
            key_to_action(KeyCode::Char('g'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::GoToTop)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('G'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::GoToBottom)
        );
        assert_eq!(
            key_to_action(KeyCode::PageDown, KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::PageDown)
        );
        assert_eq!(
            key_to_action(KeyCode::PageUp, KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::PageUp)
        );
    }

    #[test]
    fn test_key_to_action_selectors() {
        assert_eq!(
            key_to_action(KeyCode::Char('b'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::CycleGrouping)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('B'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::CycleGroupingBack)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::CycleSort)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('S'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::CycleSortBack)
        );
    }

    #[test]
    fn test_key_to_action_app_actions() {
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('/'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::FocusFilter)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('y'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::CopyTicketId)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('r'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::Reload)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::ClearFilterAndExit)
        );
    }

    #[test]
    fn test_key_to_action_grab_entry() {
        assert_eq!(
            key_to_action(KeyCode::Char(' '), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::Grab)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('m'), KeyModifiers::NONE, InputMode::Normal),
            Some(BoardAction::Grab)
        );
    }

    #[test]
    fn test_key_to_action_unknown_key() {
        assert_eq!(
            key_to_action(KeyCode::Char('x'), KeyModifiers::NONE, InputMode::Normal),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::F(1), KeyModifiers::NONE, InputMode::Normal),
            None
        );
    }

    #[test]
    fn test_key_to_action_grab_mode_moves() {
        assert_eq!(
            key_to_action(KeyCode::Char('h'), KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::GrabMoveLeft)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('l'), KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::GrabMoveRight)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::GrabMoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('k'), KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::GrabMoveUp)
        );
        assert_eq!(
            key_to_action(KeyCode::Down, KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::GrabMoveDown)
        );
    }

    #[test]
    fn test_key_to_action_grab_mode_drop_and_cancel() {
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::Drop)
        );
        assert_eq!(
            key_to_action(KeyCode::Char(' '), KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::Drop)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('m'), KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::Drop)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::CancelGrab)
        );
    }

    #[test]
    fn test_key_to_action_grab_mode_blocks_selectors() {
        // Selector and filter keys are inert while a card is grabbed
        assert_eq!(
            key_to_action(KeyCode::Char('b'), KeyModifiers::NONE, InputMode::Grab),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::NONE, InputMode::Grab),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('/'), KeyModifiers::NONE, InputMode::Grab),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('g'), KeyModifiers::NONE, InputMode::Grab),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('r'), KeyModifiers::NONE, InputMode::Grab),
            None
        );
    }

    #[test]
    fn test_key_to_action_grab_mode_quit_still_works() {
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, InputMode::Grab),
            Some(BoardAction::Quit)
        );
    }

    #[test]
    fn test_key_to_action_filter_mode_escape() {
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, InputMode::Filter),
            Some(BoardAction::ClearFilterAndExit)
        );
    }

    #[test]
    fn test_key_to_action_filter_mode_enter_and_tab() {
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, InputMode::Filter),
            Some(BoardAction::ExitFilter)
        );
        assert_eq!(
            key_to_action(KeyCode::Tab, KeyModifiers::NONE, InputMode::Filter),
            Some(BoardAction::ExitFilter)
        );
    }

    #[test]
    fn test_key_to_action_filter_mode_regular_key() {
        // Regular keys in filter mode return None (handled by the text input)
        assert_eq!(
            key_to_action(KeyCode::Char('a'), KeyModifiers::NONE, InputMode::Filter),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, InputMode::Filter),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, InputMode::Filter),
            None
        );
    }

    #[test]
    fn test_key_to_action_ctrl_q_quits_in_every_mode() {
        for mode in [InputMode::Normal, InputMode::Filter, InputMode::Grab] {
            assert_eq!(
                key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, mode),
                Some(BoardAction::Quit)
            );
            assert_eq!(
                key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL, mode),
                Some(BoardAction::Quit)
            );
        }
    }
}
