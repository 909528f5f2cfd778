//! Split the terminal area into header, body, and footer regions.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Fixed height for the header (title line + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer (shortcut hint line).
pub const FOOTER_HEIGHT: u16 = 1;

/// Regions for the main screen: header, body (the painted view tree), footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    /// May have zero height if the terminal is too small.
    pub body: Rect,
    pub footer: Rect,
}

/// Split `area` into header (fixed top), body (middle), footer (fixed bottom).
pub fn main_splits(area: Rect) -> MainSplits {
    let header_h = HEADER_HEIGHT.min(area.height);
    let footer_h = FOOTER_HEIGHT.min(area.height - header_h);
    let body_h = area.height - header_h - footer_h;

    let (header, rest) = vertical_split(area, header_h);
    let (body, footer) = vertical_split(rest, body_h);
    MainSplits { header, body, footer }
}

/// Same as [main_splits] but body gets horizontal padding.
pub fn main_splits_with_padding(area: Rect) -> MainSplits {
    let raw = main_splits(area);
    MainSplits {
        body: horizontal_padding(raw.body),
        ..raw
    }
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let top = Rect { height: top_h, ..area };
    let bottom = Rect {
        y: area.y.saturating_add(top_h),
        height: area.height - top_h,
        ..area
    };
    (top, bottom)
}
