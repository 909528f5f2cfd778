//! Palette: the colors the to-do screen paints with, grouped by role.

use super::Appearance;
use super::rgb::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct TodoPalette {
    pub background: Rgb,
    /// Behind text fields.
    pub surface_background: Rgb,
    pub border: Rgb,
    /// Highlight behind the selected task row.
    pub element_selected: Rgb,

    pub text: Rgb,
    /// Completed tasks, the remaining count, inactive tabs.
    pub text_muted: Rgb,
    /// Hint shown in an empty text field.
    pub text_placeholder: Rgb,

    /// Add, edit and save icons; the selected tab.
    pub accent: Rgb,
    /// Delete icon, error status.
    pub danger: Rgb,
    /// Checked box, ready dot.
    pub success: Rgb,
    pub warning: Rgb,

    pub status_bar_background: Rgb,
}

impl TodoPalette {
    pub fn dark() -> Self {
        Self {
            background: Rgb(20, 18, 24),
            surface_background: Rgb(33, 31, 38),
            border: Rgb(73, 69, 79),
            element_selected: Rgb(52, 46, 66),
            text: Rgb(230, 224, 233),
            text_muted: Rgb(147, 143, 153),
            text_placeholder: Rgb(121, 116, 126),
            accent: Rgb(208, 188, 255),
            danger: Rgb(242, 184, 181),
            success: Rgb(166, 214, 156),
            warning: Rgb(236, 196, 120),
            status_bar_background: Rgb(29, 27, 32),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Rgb(254, 247, 255),
            surface_background: Rgb(243, 237, 247),
            border: Rgb(202, 196, 208),
            element_selected: Rgb(232, 222, 248),
            text: Rgb(29, 27, 32),
            text_muted: Rgb(96, 93, 102),
            text_placeholder: Rgb(121, 116, 126),
            accent: Rgb(103, 80, 164),
            danger: Rgb(179, 38, 30),
            success: Rgb(56, 118, 29),
            warning: Rgb(150, 100, 0),
            status_bar_background: Rgb(247, 242, 250),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}
