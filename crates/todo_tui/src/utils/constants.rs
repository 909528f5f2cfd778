//! TUI spacing and sizing constants.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Columns between inline widgets on one row.
pub const INLINE_GAP: u16 = 1;

/// Max log lines kept for the logs screen (older lines dropped).
pub const MAX_TRACE_LINES: usize = 2000;

/// Lines moved by PageUp / PageDown.
pub const PAGE_LINES: usize = 10;
