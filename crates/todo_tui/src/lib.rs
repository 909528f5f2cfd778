//! todo-tui — terminal front end for todo.tui.
//!
//! Theming in `theme`; layout in `layouts`. [paint] turns the view tree from
//! [todo_core::render] into lines and a click map; [keys] maps keys to intents;
//! state and view in [state] and [view]. Run with [run_tui].

pub mod keys;
pub mod layouts;
pub mod paint;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use run::{run_tui, TuiOptions};
pub use state::{Focus, Screen, TuiState};
pub use theme::Appearance;
pub use view::draw as draw_view;
