//! Shortcut hint line (footer), muted, depends on where keys currently go.

use ratatui::text::{Line, Span};

use super::style::text_muted_style;
use crate::keys::KeyMode;
use crate::theme::TodoPalette;

/// Hints for the current key mode. Filter and clear hints only when `filters` is true.
pub fn shortcut_line(palette: &TodoPalette, mode: KeyMode, filters: bool) -> Line<'static> {
    let hint = match mode {
        KeyMode::Input => "Enter: add  ·  Tab: list  ·  Ctrl+U: clear  ·  Ctrl+D: logs  ·  Ctrl+C: quit",
        KeyMode::Editing => "Enter: save  ·  Esc: cancel  ·  Ctrl+U: clear",
        KeyMode::List if filters => {
            "↑↓: move  ·  Space: done  ·  e: edit  ·  d: delete  ·  1-3/←→: filter  ·  c: clear done  ·  Tab: input  ·  q: quit"
        }
        KeyMode::List => "↑↓: move  ·  Space: done  ·  e: edit  ·  d: delete  ·  Tab: input  ·  q: quit",
        KeyMode::Logs => "↑↓/PgUp/PgDn: scroll  ·  Esc/Ctrl+D: close",
    };
    Line::from(vec![Span::styled(hint.to_string(), text_muted_style(palette.text_muted))])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn input_mode_hints_add() {
        let line = shortcut_line(&TodoPalette::dark(), KeyMode::Input, true);
        assert!(text(&line).contains("Enter: add"));
    }

    #[test]
    fn list_hints_filters_only_when_available() {
        let palette = TodoPalette::dark();
        assert!(text(&shortcut_line(&palette, KeyMode::List, true)).contains("filter"));
        assert!(!text(&shortcut_line(&palette, KeyMode::List, false)).contains("filter"));
    }

    #[test]
    fn editing_hints_cancel() {
        let line = shortcut_line(&TodoPalette::dark(), KeyMode::Editing, false);
        assert!(text(&line).contains("Esc: cancel"));
    }
}
