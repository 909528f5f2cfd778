//! Todo theme: semantic color palette for the terminal UI.
//!
//! # Example
//!
//! ```
//! use todo_tui::theme::{Appearance, TodoPalette};
//!
//! let palette = TodoPalette::for_appearance(Appearance::Light);
//! let (r, g, b) = palette.text.tuple();
//! assert!(r < 128 && g < 128 && b < 128);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::TodoPalette;
pub use rgb::Rgb;
