//! App controller: owns the task rows, the filter and the new-task field.
//!
//! Every mutation ends in [TodoApp::update], which recomputes the visible ids and
//! the remaining count and raises the re-render request. Rows report back over a
//! channel; [TodoApp::dispatch] drains it before returning, so an action and all
//! of its consequences are applied synchronously.

use std::sync::mpsc;

use serde::Serialize;
use todo_constant::{Labels, Locale};

use crate::filter::Filter;
use crate::input::TextInput;
use crate::row::{RowEvent, RowEvents, TaskRow};
use crate::task::{Task, TaskId};
use crate::variant::AppVariant;

/// What an interactive node does when activated (click or key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "arg", rename_all = "snake_case")]
pub enum Action {
    AddClicked,
    SelectFilter(Filter),
    ClearCompleted,
    ToggleTask(TaskId),
    EditTask(TaskId),
    SaveTask(TaskId),
    CancelEdit(TaskId),
    DeleteTask(TaskId),
}

#[derive(Debug)]
pub struct TodoApp {
    variant: AppVariant,
    labels: &'static Labels,
    rows: Vec<TaskRow>,
    filter: Filter,
    input: TextInput,
    events: RowEvents,
    events_rx: mpsc::Receiver<RowEvent>,
    next_id: u64,
    visible: Vec<TaskId>,
    remaining: usize,
    render_requested: bool,
}

impl Default for TodoApp {
    fn default() -> Self {
        Self::new(AppVariant::default(), Locale::default())
    }
}

impl TodoApp {
    pub fn new(variant: AppVariant, locale: Locale) -> Self {
        let (events, events_rx) = RowEvents::channel();
        Self {
            variant,
            labels: locale.labels(),
            rows: Vec::new(),
            filter: Filter::All,
            input: TextInput::new(),
            events,
            events_rx,
            next_id: 0,
            visible: Vec::new(),
            remaining: 0,
            render_requested: true,
        }
    }

    pub fn variant(&self) -> AppVariant {
        self.variant
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// New-task input field.
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        self.render_requested = true;
        &mut self.input
    }

    /// All rows in insertion order, visible or not.
    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.rows.iter().map(TaskRow::task)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: TaskId) -> Option<&TaskRow> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Mutable row access for edit-buffer typing. Call [TodoApp::pump_row_events]
    /// afterwards if the row may have sent events.
    pub fn row_mut(&mut self, id: TaskId) -> Option<&mut TaskRow> {
        self.render_requested = true;
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    /// Ids visible under the current filter, as of the last [TodoApp::update].
    pub fn visible_ids(&self) -> &[TaskId] {
        &self.visible
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &TaskRow> {
        self.visible.iter().filter_map(|id| self.row(*id))
    }

    /// Number of tasks not completed, whatever the filter.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// True when state changed since the last [TodoApp::take_render_request].
    pub fn render_requested(&self) -> bool {
        self.render_requested
    }

    pub fn take_render_request(&mut self) -> bool {
        std::mem::replace(&mut self.render_requested, false)
    }

    /// Append a task. Empty and duplicate names are accepted.
    pub fn add_task(&mut self, name: impl Into<String>) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        let row = TaskRow::new(id, name, self.events.clone());
        tracing::info!(%id, name = %row.name(), "task added");
        self.rows.push(row);
        self.update();
        id
    }

    /// Add button: the input text becomes a task and the field is cleared.
    pub fn add_clicked(&mut self) -> TaskId {
        let name = self.input.take();
        self.add_task(name)
    }

    /// Remove by identity. Unknown ids are ignored.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.rows.iter().position(|r| r.id() == id)?;
        let task = self.rows.remove(pos).into_task();
        tracing::info!(%id, name = %task.name, "task removed");
        self.update();
        Some(task)
    }

    pub fn on_task_status_changed(&mut self, id: TaskId) {
        tracing::debug!(%id, "task status changed");
        self.update();
    }

    /// Select a filter tab. The basic variant has no tabs and always shows everything.
    pub fn on_filter_changed(&mut self, filter: Filter) {
        if !self.variant.has_filters() {
            tracing::debug!(%filter, "filter ignored in basic variant");
            return;
        }
        self.filter = filter;
        tracing::debug!(%filter, "filter changed");
        self.update();
    }

    /// Remove every completed task; survivors keep their order. Returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let done: Vec<TaskId> = self
            .rows
            .iter()
            .filter(|r| r.is_completed())
            .map(TaskRow::id)
            .collect();
        let removed = done
            .into_iter()
            .filter(|id| self.remove_task(*id).is_some())
            .count();
        tracing::info!(removed, "cleared completed tasks");
        self.update();
        removed
    }

    /// Recompute visibility and the remaining count, then request a render.
    pub fn update(&mut self) {
        let filter = self.filter;
        self.visible = self
            .rows
            .iter()
            .filter(|r| filter.admits(r.task()))
            .map(TaskRow::id)
            .collect();
        self.remaining = self.rows.iter().filter(|r| !r.is_completed()).count();
        self.render_requested = true;
    }

    /// Apply pending row events. Returns how many were handled.
    pub fn pump_row_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                RowEvent::StatusChanged(id) => self.on_task_status_changed(id),
                RowEvent::Delete(id) => {
                    self.remove_task(id);
                }
            }
            handled += 1;
        }
        handled
    }

    /// Apply one UI action and everything it triggers.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::AddClicked => {
                self.add_clicked();
            }
            Action::SelectFilter(filter) => self.on_filter_changed(filter),
            Action::ClearCompleted => {
                self.clear_completed();
            }
            Action::ToggleTask(id) => self.with_row(id, TaskRow::toggle_completed),
            Action::EditTask(id) => self.with_row(id, TaskRow::begin_edit),
            Action::SaveTask(id) => self.with_row(id, TaskRow::commit_buffer),
            Action::CancelEdit(id) => self.with_row(id, TaskRow::cancel_edit),
            Action::DeleteTask(id) => self.with_row(id, |r| r.request_delete()),
        }
        self.pump_row_events();
        self.render_requested = true;
    }

    /// First row currently in edit mode.
    pub fn editing_row(&self) -> Option<TaskId> {
        self.rows.iter().find(|r| r.is_editing()).map(TaskRow::id)
    }

    fn with_row(&mut self, id: TaskId, f: impl FnOnce(&mut TaskRow)) {
        match self.rows.iter_mut().find(|r| r.id() == id) {
            Some(row) => f(row),
            None => tracing::debug!(%id, "action for unknown task ignored"),
        }
    }
}
