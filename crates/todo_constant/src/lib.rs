//! Shared constants for todo.tui.
//!
//! - [app] — name, version, data directory.
//! - [labels] — every user-visible string, per locale.

pub mod app;
pub mod labels;

pub use labels::{Labels, Locale};
