//! One task row: owns its task, a display/edit mode and the edit buffer.
//!
//! A row never touches the list it lives in. Deletion and status changes are
//! reported to the owner through the [RowEvents] handle given at construction;
//! the owner drains them (see [crate::app::TodoApp::pump_row_events]).

use std::sync::mpsc;

use crate::input::TextInput;
use crate::task::{Task, TaskId};

/// Message from a row to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    /// Completed flag flipped; owner recomputes counts and visibility.
    StatusChanged(TaskId),
    /// Row asks to be removed.
    Delete(TaskId),
}

/// Sending half handed to every row by its owner.
#[derive(Debug, Clone)]
pub struct RowEvents {
    tx: mpsc::Sender<RowEvent>,
}

impl RowEvents {
    pub fn new(tx: mpsc::Sender<RowEvent>) -> Self {
        Self { tx }
    }

    /// Handle plus the receiver the owner drains.
    pub fn channel() -> (Self, mpsc::Receiver<RowEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }

    fn send(&self, event: RowEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!(?event, "row event dropped: owner is gone");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Display,
    Editing,
}

#[derive(Debug)]
pub struct TaskRow {
    task: Task,
    mode: RowMode,
    edit: TextInput,
    events: RowEvents,
}

impl TaskRow {
    /// Row in display mode with a not-completed task.
    pub fn new(id: TaskId, name: impl Into<String>, events: RowEvents) -> Self {
        Self {
            task: Task::new(id, name),
            mode: RowMode::Display,
            edit: TextInput::new(),
            events,
        }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn into_task(self) -> Task {
        self.task
    }

    pub fn name(&self) -> &str {
        &self.task.name
    }

    pub fn is_completed(&self) -> bool {
        self.task.completed
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn edit_buffer(&self) -> &TextInput {
        &self.edit
    }

    pub fn edit_buffer_mut(&mut self) -> &mut TextInput {
        &mut self.edit
    }

    /// Flip completed and tell the owner.
    pub fn toggle_completed(&mut self) {
        self.task.completed = !self.task.completed;
        tracing::debug!(id = %self.task.id, completed = self.task.completed, "task toggled");
        self.events.send(RowEvent::StatusChanged(self.task.id));
    }

    /// Copy the name into the edit buffer and show the edit view.
    pub fn begin_edit(&mut self) {
        self.edit.set(self.task.name.clone());
        self.mode = RowMode::Editing;
    }

    /// Store `new_name` and go back to the display view. Completed flag is untouched.
    pub fn commit_edit(&mut self, new_name: impl Into<String>) {
        self.task.name = new_name.into();
        self.edit.clear();
        self.mode = RowMode::Display;
        tracing::debug!(id = %self.task.id, name = %self.task.name, "task renamed");
    }

    /// Commit whatever is in the edit buffer.
    pub fn commit_buffer(&mut self) {
        let name = self.edit.take();
        self.commit_edit(name);
    }

    /// Leave edit mode without renaming.
    pub fn cancel_edit(&mut self) {
        self.edit.clear();
        self.mode = RowMode::Display;
    }

    /// Ask the owner to remove this row.
    pub fn request_delete(&self) {
        self.events.send(RowEvent::Delete(self.task.id));
    }
}
