//! Header strip: title left, status with colored dot right.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::style::{background_style, border_style, danger_style, success_style, text_muted_style, text_style, warning_style};
use crate::theme::TodoPalette;
use crate::utils::{display_width, horizontal_padding};

/// Status shown when nothing else is set.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Title (bold) left, then right-aligned `● status`.
/// Dot is red when `has_error`, yellow when `attention`, green otherwise.
pub fn header_line(
    title: &str,
    status: &str,
    attention: bool,
    has_error: bool,
    palette: &TodoPalette,
    width: u16,
) -> Line<'static> {
    let dot_style = if has_error {
        danger_style(palette.danger)
    } else if attention {
        warning_style(palette.warning)
    } else {
        success_style(palette.success)
    };
    let left_len = display_width(title) + 1;
    let right_len = 2 + display_width(status);
    let gap = (width as usize).saturating_sub(left_len + right_len);
    Line::from(vec![
        Span::styled(title.to_string(), text_style(palette.text).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap + 1)),
        Span::styled("● ".to_string(), dot_style),
        Span::styled(status.to_string(), text_muted_style(palette.text_muted)),
    ])
}

/// Two-line header: content line, then bottom border.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &TodoPalette,
    title: &str,
    status: &str,
    attention: bool,
    has_error: bool,
) {
    let inner = horizontal_padding(area);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(background_style(palette.status_bar_background));
    let line = header_line(title, status, attention, has_error, palette, inner.width);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(line).style(background_style(palette.status_bar_background)),
        Rect { height: inner.height.min(1), ..inner },
    );
}
