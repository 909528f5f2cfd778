//! Key map: a pure function from a key event and where keys currently go to an [Intent].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todo_core::Filter;

use crate::utils::PAGE_LINES;

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// New-task field.
    Input,
    /// Task list navigation.
    List,
    /// A task row is being renamed.
    Editing,
    /// Logs screen.
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub mode: KeyMode,
    /// Filter tabs and clear-completed exist.
    pub filters: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Quit,
    ToggleLogs,
    CloseLogs,
    LogsUp(usize),
    LogsDown(usize),
    SwitchFocus,
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ClearLine,
    KillToEnd,
    /// Enter: add the new task, or save the row being edited.
    Submit,
    CancelEdit,
    SelectUp(usize),
    SelectDown(usize),
    SelectFirst,
    SelectLast,
    ToggleSelected,
    EditSelected,
    DeleteSelected,
    SetFilter(Filter),
    NextFilter,
    PrevFilter,
    ClearCompleted,
}

pub fn key_intent(key: KeyEvent, ctx: KeyContext) -> Option<Intent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Intent::Quit),
        KeyCode::Char('d') if ctrl => return Some(Intent::ToggleLogs),
        _ => {}
    }
    match ctx.mode {
        KeyMode::Logs => logs_key(key),
        KeyMode::Input => text_key(key).or(match key.code {
            KeyCode::Enter => Some(Intent::Submit),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc | KeyCode::Down => Some(Intent::SwitchFocus),
            _ => None,
        }),
        KeyMode::Editing => text_key(key).or(match key.code {
            KeyCode::Enter => Some(Intent::Submit),
            KeyCode::Esc => Some(Intent::CancelEdit),
            _ => None,
        }),
        KeyMode::List => list_key(key, ctx.filters),
    }
}

/// Line editing shared by the new-task field and row renaming.
fn text_key(key: KeyEvent) -> Option<Intent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let intent = match key.code {
        KeyCode::Char('u') if ctrl => Intent::ClearLine,
        KeyCode::Char('k') if ctrl => Intent::KillToEnd,
        KeyCode::Char('a') if ctrl => Intent::Home,
        KeyCode::Char('e') if ctrl => Intent::End,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => Intent::Insert(c),
        KeyCode::Backspace => Intent::Backspace,
        KeyCode::Delete => Intent::Delete,
        KeyCode::Left => Intent::Left,
        KeyCode::Right => Intent::Right,
        KeyCode::Home => Intent::Home,
        KeyCode::End => Intent::End,
        _ => return None,
    };
    Some(intent)
}

fn list_key(key: KeyEvent, filters: bool) -> Option<Intent> {
    let intent = match key.code {
        KeyCode::Char('q') => Intent::Quit,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('i') | KeyCode::Char('a') => Intent::SwitchFocus,
        KeyCode::Up | KeyCode::Char('k') => Intent::SelectUp(1),
        KeyCode::Down | KeyCode::Char('j') => Intent::SelectDown(1),
        KeyCode::PageUp => Intent::SelectUp(PAGE_LINES),
        KeyCode::PageDown => Intent::SelectDown(PAGE_LINES),
        KeyCode::Home | KeyCode::Char('g') => Intent::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => Intent::SelectLast,
        KeyCode::Char(' ') | KeyCode::Char('x') => Intent::ToggleSelected,
        KeyCode::Char('e') | KeyCode::Enter => Intent::EditSelected,
        KeyCode::Char('d') | KeyCode::Delete => Intent::DeleteSelected,
        KeyCode::Char(c @ '1'..='3') if filters => {
            let index = c as usize - '1' as usize;
            Intent::SetFilter(Filter::from_index(index)?)
        }
        KeyCode::Right | KeyCode::Char('l') if filters => Intent::NextFilter,
        KeyCode::Left | KeyCode::Char('h') if filters => Intent::PrevFilter,
        KeyCode::Char('c') if filters => Intent::ClearCompleted,
        _ => return None,
    };
    Some(intent)
}

fn logs_key(key: KeyEvent) -> Option<Intent> {
    let intent = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Intent::CloseLogs,
        KeyCode::Up | KeyCode::Char('k') => Intent::LogsUp(1),
        KeyCode::Down | KeyCode::Char('j') => Intent::LogsDown(1),
        KeyCode::PageUp => Intent::LogsUp(PAGE_LINES),
        KeyCode::PageDown => Intent::LogsDown(PAGE_LINES),
        _ => return None,
    };
    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn ctx(mode: KeyMode) -> KeyContext {
        KeyContext { mode, filters: true }
    }

    #[test]
    fn global_keys_work_everywhere() {
        for mode in [KeyMode::Input, KeyMode::List, KeyMode::Editing, KeyMode::Logs] {
            assert_eq!(key_intent(ctrl('c'), ctx(mode)), Some(Intent::Quit));
            assert_eq!(key_intent(ctrl('d'), ctx(mode)), Some(Intent::ToggleLogs));
        }
    }

    #[test]
    fn input_mode_types_letters() {
        assert_eq!(key_intent(key(KeyCode::Char('q')), ctx(KeyMode::Input)), Some(Intent::Insert('q')));
        assert_eq!(key_intent(key(KeyCode::Char(' ')), ctx(KeyMode::Input)), Some(Intent::Insert(' ')));
        assert_eq!(key_intent(key(KeyCode::Enter), ctx(KeyMode::Input)), Some(Intent::Submit));
        assert_eq!(key_intent(ctrl('u'), ctx(KeyMode::Input)), Some(Intent::ClearLine));
        assert_eq!(key_intent(key(KeyCode::Tab), ctx(KeyMode::Input)), Some(Intent::SwitchFocus));
    }

    #[test]
    fn unbound_ctrl_chars_are_not_typed() {
        assert_eq!(key_intent(ctrl('z'), ctx(KeyMode::Input)), None);
    }

    #[test]
    fn editing_mode_enter_saves_esc_cancels() {
        assert_eq!(key_intent(key(KeyCode::Enter), ctx(KeyMode::Editing)), Some(Intent::Submit));
        assert_eq!(key_intent(key(KeyCode::Esc), ctx(KeyMode::Editing)), Some(Intent::CancelEdit));
        assert_eq!(key_intent(key(KeyCode::Char('d')), ctx(KeyMode::Editing)), Some(Intent::Insert('d')));
    }

    #[test]
    fn list_mode_commands() {
        let list = ctx(KeyMode::List);
        assert_eq!(key_intent(key(KeyCode::Char(' ')), list), Some(Intent::ToggleSelected));
        assert_eq!(key_intent(key(KeyCode::Char('e')), list), Some(Intent::EditSelected));
        assert_eq!(key_intent(key(KeyCode::Delete), list), Some(Intent::DeleteSelected));
        assert_eq!(key_intent(key(KeyCode::Down), list), Some(Intent::SelectDown(1)));
        assert_eq!(key_intent(key(KeyCode::Char('q')), list), Some(Intent::Quit));
        assert_eq!(
            key_intent(key(KeyCode::Char('3')), list),
            Some(Intent::SetFilter(Filter::Completed))
        );
        assert_eq!(key_intent(key(KeyCode::Char('c')), list), Some(Intent::ClearCompleted));
    }

    #[test]
    fn filter_keys_absent_without_tabs() {
        let basic = KeyContext {
            mode: KeyMode::List,
            filters: false,
        };
        assert_eq!(key_intent(key(KeyCode::Char('2')), basic), None);
        assert_eq!(key_intent(key(KeyCode::Right), basic), None);
        assert_eq!(key_intent(key(KeyCode::Char('c')), basic), None);
    }

    #[test]
    fn logs_mode_scrolls_and_closes() {
        let logs = ctx(KeyMode::Logs);
        assert_eq!(key_intent(key(KeyCode::PageUp), logs), Some(Intent::LogsUp(PAGE_LINES)));
        assert_eq!(key_intent(key(KeyCode::Esc), logs), Some(Intent::CloseLogs));
        assert_eq!(key_intent(key(KeyCode::Char('x')), logs), None);
    }
}
