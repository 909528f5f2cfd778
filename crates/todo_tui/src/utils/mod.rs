//! Shared utilities for the terminal UI.
//!
//! - **[constants]** — Spacing and sizing constants.
//! - **[layout]** — Rect padding.
//! - **[format]** — Display-width aware truncation.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{column_window, display_width, pad_to_width, truncate_ellipsis};
pub use layout::{horizontal_padding, horizontal_padding_with, padding};
