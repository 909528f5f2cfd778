//! TUI state: the app controller plus focus, selection, screen and logs.
//!
//! [TuiState] holds everything the view needs. Keys become [Intent]s via
//! [crate::keys::key_intent]; intents and clicks are applied here, mostly by
//! dispatching [Action]s into the [TodoApp].

use std::time::Instant;

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use todo_core::{Action, FieldTarget, TaskId, TextInput, TodoApp};

use crate::keys::{key_intent, Intent, KeyContext, KeyMode};
use crate::paint::{hit_at, Hit, HitTarget};
use crate::theme::{Appearance, TodoPalette};
use crate::utils::MAX_TRACE_LINES;

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Logs,
}

/// Where keys go on the main screen when no row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

#[derive(Debug)]
pub struct TuiState {
    pub app: TodoApp,
    pub focus: Focus,
    /// Highlighted task; always a visible one, or None when the list is empty.
    pub selected: Option<TaskId>,
    /// First list row shown, as clamped by the last paint.
    pub list_scroll: usize,
    pub screen: Screen,
    pub palette: TodoPalette,
    /// Status text for the header right side.
    pub status: String,
    /// When set, status is transient and auto-clears.
    pub status_set_at: Option<Instant>,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Click map from the last paint.
    pub hits: Vec<Hit>,
    /// Log lines. Newest at end.
    pub trace_lines: Vec<String>,
    /// First log line shown.
    pub trace_scroll: usize,
    /// Follow new log lines until the user scrolls up.
    pub trace_follow: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: TodoApp, appearance: Appearance) -> Self {
        let mut state = Self {
            app,
            focus: Focus::Input,
            selected: None,
            list_scroll: 0,
            screen: Screen::Main,
            palette: TodoPalette::for_appearance(appearance),
            status: String::new(),
            status_set_at: None,
            needs_redraw: true,
            hits: Vec::new(),
            trace_lines: Vec::new(),
            trace_scroll: 0,
            trace_follow: true,
            quit: false,
        };
        state.sync();
        state
    }

    /// Where keys go right now.
    pub fn key_mode(&self) -> KeyMode {
        if self.screen == Screen::Logs {
            KeyMode::Logs
        } else if self.app.editing_row().is_some() {
            KeyMode::Editing
        } else if self.focus == Focus::Input {
            KeyMode::Input
        } else {
            KeyMode::List
        }
    }

    /// Field that shows the terminal cursor.
    pub fn focused_field(&self) -> Option<FieldTarget> {
        match self.key_mode() {
            KeyMode::Editing => self.app.editing_row().map(FieldTarget::Rename),
            KeyMode::Input => Some(FieldTarget::NewTask),
            KeyMode::List | KeyMode::Logs => None,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => self.needs_redraw = true,
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctx = KeyContext {
            mode: self.key_mode(),
            filters: self.app.variant().has_filters(),
        };
        if let Some(intent) = key_intent(key, ctx) {
            self.apply(intent);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match (self.screen, mouse.kind) {
            (Screen::Logs, MouseEventKind::ScrollUp) => self.apply(Intent::LogsUp(3)),
            (Screen::Logs, MouseEventKind::ScrollDown) => self.apply(Intent::LogsDown(3)),
            (Screen::Main, MouseEventKind::ScrollUp) => self.apply(Intent::SelectUp(1)),
            (Screen::Main, MouseEventKind::ScrollDown) => self.apply(Intent::SelectDown(1)),
            (Screen::Main, MouseEventKind::Down(MouseButton::Left)) => self.click(mouse.column, mouse.row),
            _ => {}
        }
    }

    /// Resolve a left click against the last painted hit map.
    pub fn click(&mut self, x: u16, y: u16) {
        match hit_at(&self.hits, x, y) {
            Some(HitTarget::Action(action)) => {
                if let Action::ToggleTask(id) | Action::EditTask(id) | Action::DeleteTask(id) = action {
                    self.selected = Some(id);
                    self.focus = Focus::List;
                }
                self.activate(action);
            }
            Some(HitTarget::Field(FieldTarget::NewTask)) => {
                self.finish_edit();
                self.focus = Focus::Input;
            }
            Some(HitTarget::Field(FieldTarget::Rename(_))) => {}
            Some(HitTarget::Row(id)) => {
                self.selected = Some(id);
                self.focus = Focus::List;
            }
            None => return,
        }
        self.needs_redraw = true;
        self.sync();
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Quit => self.quit = true,
            Intent::ToggleLogs => {
                self.screen = match self.screen {
                    Screen::Main => Screen::Logs,
                    Screen::Logs => Screen::Main,
                };
            }
            Intent::CloseLogs => self.screen = Screen::Main,
            Intent::LogsUp(n) => {
                self.trace_scroll = self.trace_scroll.saturating_sub(n);
                self.trace_follow = false;
            }
            Intent::LogsDown(n) => self.trace_scroll = self.trace_scroll.saturating_add(n),
            Intent::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Input => Focus::List,
                    Focus::List => Focus::Input,
                };
            }
            Intent::Insert(c) => self.edit_buffer(|b| b.insert(c)),
            Intent::Backspace => self.edit_buffer(TextInput::backspace),
            Intent::Delete => self.edit_buffer(TextInput::delete),
            Intent::Left => self.edit_buffer(TextInput::left),
            Intent::Right => self.edit_buffer(TextInput::right),
            Intent::Home => self.edit_buffer(TextInput::home),
            Intent::End => self.edit_buffer(TextInput::end),
            Intent::ClearLine => self.edit_buffer(TextInput::clear),
            Intent::KillToEnd => self.edit_buffer(TextInput::kill_to_end),
            Intent::Submit => match self.app.editing_row() {
                Some(id) => self.activate(Action::SaveTask(id)),
                None => self.activate(Action::AddClicked),
            },
            Intent::CancelEdit => {
                if let Some(id) = self.app.editing_row() {
                    self.activate(Action::CancelEdit(id));
                }
            }
            Intent::SelectUp(n) => self.move_selection(-(n as isize)),
            Intent::SelectDown(n) => self.move_selection(n as isize),
            Intent::SelectFirst => self.selected = self.app.visible_ids().first().copied(),
            Intent::SelectLast => self.selected = self.app.visible_ids().last().copied(),
            Intent::ToggleSelected => self.on_selected(Action::ToggleTask),
            Intent::EditSelected => self.on_selected(Action::EditTask),
            Intent::DeleteSelected => self.on_selected(Action::DeleteTask),
            Intent::SetFilter(filter) => self.activate(Action::SelectFilter(filter)),
            Intent::NextFilter => self.activate(Action::SelectFilter(self.app.filter().next())),
            Intent::PrevFilter => self.activate(Action::SelectFilter(self.app.filter().prev())),
            Intent::ClearCompleted => self.activate(Action::ClearCompleted),
        }
        self.needs_redraw = true;
        self.sync();
    }

    /// Dispatch one action, with the terminal's rule that a single row edits at a time.
    pub fn activate(&mut self, action: Action) {
        let before = self.app.len();
        match action {
            Action::SelectFilter(_) => {
                // the edited row may be filtered out of view
                self.finish_edit();
                self.app.dispatch(action);
            }
            Action::EditTask(id) => {
                self.finish_edit();
                self.app.dispatch(action);
                self.selected = Some(id);
            }
            Action::AddClicked => {
                self.app.dispatch(action);
                if let Some(row) = self.app.rows().last() {
                    let name = row.name().to_string();
                    self.set_status(format!("Added \"{name}\""));
                }
            }
            Action::ClearCompleted => {
                self.app.dispatch(action);
                let removed = before - self.app.len();
                self.set_status(format!("Cleared {removed} completed"));
            }
            _ => self.app.dispatch(action),
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_set_at = Some(Instant::now());
        self.needs_redraw = true;
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
        self.status_set_at = None;
        self.needs_redraw = true;
    }

    /// Append a log line; keeps at most [MAX_TRACE_LINES].
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            let drop = self.trace_lines.len() - MAX_TRACE_LINES;
            self.trace_lines.drain(..drop);
            self.trace_scroll = self.trace_scroll.saturating_sub(drop);
        }
        if self.trace_follow {
            self.trace_scroll = self.trace_lines.len();
        }
        if self.screen == Screen::Logs {
            self.needs_redraw = true;
        }
    }

    /// Save any row edit in progress.
    fn finish_edit(&mut self) {
        while let Some(id) = self.app.editing_row() {
            self.app.dispatch(Action::SaveTask(id));
        }
    }

    fn edit_buffer(&mut self, f: impl FnOnce(&mut TextInput)) {
        match self.app.editing_row() {
            Some(id) => {
                if let Some(row) = self.app.row_mut(id) {
                    f(row.edit_buffer_mut());
                }
            }
            None => f(self.app.input_mut()),
        }
    }

    fn on_selected(&mut self, action: fn(TaskId) -> Action) {
        if let Some(id) = self.selected {
            self.activate(action(id));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let ids = self.app.visible_ids();
        let Some(last) = ids.len().checked_sub(1) else {
            return;
        };
        let current = self
            .selected
            .and_then(|s| ids.iter().position(|id| *id == s))
            .unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.selected = Some(ids[next]);
    }

    /// Keep the selection on a visible task and pick up render requests.
    fn sync(&mut self) {
        let ids = self.app.visible_ids();
        let still_visible = self.selected.is_some_and(|s| ids.contains(&s));
        if !still_visible {
            self.selected = ids.first().copied();
        }
        if self.app.take_render_request() {
            self.needs_redraw = true;
        }
    }
}
