//! todo-core — everything about the to-do list that is not terminal I/O.
//!
//! - [task] / [filter] / [variant] — plain data.
//! - [input] — editable single-line text buffer shared by the new-task field and row editing.
//! - [row] — one task row: completed flag, display/edit mode, events to the parent.
//! - [app] — [TodoApp], the controller that owns the list and the filter.
//! - [view] — pure [render] from app state to a [ViewNode] tree.

pub mod app;
pub mod error;
pub mod filter;
pub mod input;
pub mod row;
pub mod task;
pub mod variant;
pub mod view;

pub use app::{Action, TodoApp};
pub use error::{Result, TodoError};
pub use filter::Filter;
pub use input::TextInput;
pub use row::{RowEvent, RowEvents, RowMode, TaskRow};
pub use task::{Task, TaskId};
pub use variant::AppVariant;
pub use view::{render, FieldTarget, Icon, TextRole, ViewNode};
