//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]** — Split the screen into header, body, footer.
//! - **[style]** — Map palette [Rgb](crate::theme::Rgb) to ratatui styles.
//! - **[head]** — Header strip with title and status dot.
//! - **[shortcut]** — Context-aware key hint line (footer).

mod head;
mod shortcut;
mod split;
mod style;

pub use head::{header_line, render_header, HEADER_STATUS_READY};
pub use shortcut::shortcut_line;
pub use split::{main_splits, main_splits_with_padding, vertical_split, MainSplits, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use style::{
    background_style, border_style, danger_style, rgb_to_color, selected_style, success_style, text_muted_style,
    text_style, warning_style,
};
