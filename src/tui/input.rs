//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, PopupState};
use crate::model::Category;
use crate::view::products::column_count;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Drop all product lists and fetch every category again.
    Reload,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { .. } => return handle_help(state, key),
        PopupState::None => {}
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { scroll } = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
        }
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        // Clamped during render
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10),
        KeyCode::Home => *scroll = 0,
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    state.status_message = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
        }
        KeyCode::Char('r') | KeyCode::Char('R')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            return KeyAction::Reload;
        }
        KeyCode::F(5) => return KeyAction::Reload,
        KeyCode::Char('?') => state.popup = PopupState::Help { scroll: 0 },

        // Tab navigation
        KeyCode::Tab => state.switch_tab(state.current_tab.next()),
        KeyCode::BackTab => state.switch_tab(state.current_tab.prev()),
        KeyCode::Char('1') => state.switch_tab(Category::Gloves),
        KeyCode::Char('2') => state.switch_tab(Category::Beanies),
        KeyCode::Char('3') => state.switch_tab(Category::Facemasks),

        // Row navigation, clamped during render
        KeyCode::Up | KeyCode::Char('k') => state.current().select_up(),
        KeyCode::Down | KeyCode::Char('j') => state.current().select_down(),

        // Paging
        KeyCode::Right | KeyCode::Char('n') | KeyCode::PageDown => state.current().next_page(),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp => state.current().prev_page(),
        KeyCode::Home => state.current().first_page(),
        KeyCode::End => state.current().last_page(),

        // Sorting
        KeyCode::Char('s') => state.current().next_sort_column(column_count()),
        KeyCode::Char('S') => state.current().clear_sort(),
        KeyCode::Char('r') => {
            let tab = state.current();
            if tab.sort_column.is_some() {
                tab.toggle_sort_direction();
            } else {
                state.status_message = Some("Press 's' to pick a sort column first".to_string());
            }
        }

        // Filter
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Filter;
            state.filter_input = state.current().filter.clone().unwrap_or_default();
        }
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in filter mode.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            state.current().set_filter(None);
        }
        KeyCode::Enter => {
            // Filter is already applied in real-time
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            apply_current_filter(state);
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            apply_current_filter(state);
        }
        _ => {}
    }
    KeyAction::None
}

fn apply_current_filter(state: &mut AppState) {
    let filter = Some(state.filter_input.clone());
    state.current().set_filter(filter);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn state() -> AppState {
        AppState::new(Category::Gloves, 10, "test".to_string())
    }

    #[test]
    fn number_keys_switch_tabs() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('3'))), KeyAction::None);
        assert_eq!(state.current_tab, Category::Facemasks);
        let _ = handle_key(&mut state, key(KeyCode::Char('2')));
        assert_eq!(state.current_tab, Category::Beanies);
        let _ = handle_key(&mut state, key(KeyCode::Char('1')));
        assert_eq!(state.current_tab, Category::Gloves);
    }

    #[test]
    fn tab_and_backtab_wrap_around() {
        let mut state = state();
        let _ = handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current_tab, Category::Facemasks);
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Category::Gloves);
    }

    #[test]
    fn ctrl_r_requests_reload_and_plain_r_does_not() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, ctrl('r')), KeyAction::Reload);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('r'))), KeyAction::None);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn paging_keys_move_current_tab_only() {
        let mut state = state();
        let _ = handle_key(&mut state, key(KeyCode::Right));
        let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        assert_eq!(state.tab(Category::Gloves).page, 2);
        let _ = handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.tab(Category::Gloves).page, 1);
        assert_eq!(state.tab(Category::Beanies).page, 0);

        let _ = handle_key(&mut state, key(KeyCode::Home));
        assert_eq!(state.tab(Category::Gloves).page, 0);
        let _ = handle_key(&mut state, key(KeyCode::End));
        assert_eq!(state.tab(Category::Gloves).page, usize::MAX);
    }

    #[test]
    fn sort_keys() {
        let mut state = state();
        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.tab(Category::Gloves).sort_column, Some(0));
        let _ = handle_key(&mut state, key(KeyCode::Char('r')));
        assert!(!state.tab(Category::Gloves).sort_ascending);
        let _ = handle_key(&mut state, key(KeyCode::Char('S')));
        assert_eq!(state.tab(Category::Gloves).sort_column, None);
        assert!(state.tab(Category::Gloves).sort_ascending);
    }

    #[test]
    fn filter_mode_applies_and_cancels() {
        let mut state = state();

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.input_mode, InputMode::Filter);

        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.tab(Category::Gloves).filter.as_deref(), Some("a"));

        // 'q' is text while filtering
        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(state.popup, PopupState::None);
        assert_eq!(state.tab(Category::Gloves).filter.as_deref(), Some("aq"));

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.tab(Category::Gloves).filter, None);

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        let _ = handle_key(&mut state, key(KeyCode::Char('x')));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.tab(Category::Gloves).filter.as_deref(), Some("x"));
    }

    #[test]
    fn quit_requires_confirmation_and_quits_on_qq() {
        let mut state = state();

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let mut state = state();
        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        let action = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, ctrl('c')), KeyAction::Quit);

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(handle_key(&mut state, ctrl('c')), KeyAction::Quit);
    }

    #[test]
    fn help_popup_swallows_navigation() {
        let mut state = state();
        let _ = handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });

        let _ = handle_key(&mut state, key(KeyCode::Down));
        let _ = handle_key(&mut state, key(KeyCode::Char('2')));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });
        assert_eq!(state.current_tab, Category::Gloves);

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert!(!state.popup.is_open());
    }
}
