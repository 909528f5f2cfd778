//! TUI view: header (fixed top), painted todo tree, shortcut line (fixed bottom).

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use todo_constant::app::DISPLAY_NAME;
use todo_core::render;

use crate::layouts::{
    background_style, border_style, main_splits_with_padding, render_header, shortcut_line, text_muted_style,
    HEADER_STATUS_READY,
};
use crate::paint::{paint, PaintOptions};
use crate::state::{Focus, Screen, TuiState};

/// Draw the main screen or the logs screen depending on `state.screen`.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    match state.screen {
        Screen::Logs => draw_logs(frame, state, area),
        Screen::Main => draw_main(frame, state, area),
    }
}

/// Logs screen: scrollable tracing output. Ctrl+D to close.
fn draw_logs(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let palette = &state.palette;
    let block = Block::default()
        .title(" Logs (Ctrl+D to close) ")
        .borders(Borders::ALL)
        .border_style(border_style(palette.border))
        .style(background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let viewport_height = inner.height as usize;
    let max_scroll = state.trace_lines.len().saturating_sub(viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);
    if state.trace_scroll == max_scroll {
        state.trace_follow = true;
    }

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(state.trace_scroll)
        .take(viewport_height)
        .map(|s| Line::from(Span::styled(s.clone(), text_muted_style(palette.text_muted))))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_main(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let splits = main_splits_with_padding(area);
    frame.render_widget(Block::default().style(background_style(state.palette.background)), area);

    let status = if state.status.is_empty() {
        HEADER_STATUS_READY
    } else {
        state.status.as_str()
    };
    let editing = state.app.editing_row().is_some();
    render_header(frame, splits.header, &state.palette, DISPLAY_NAME, status, editing, false);

    let tree = render(&state.app);
    let opts = PaintOptions {
        selected: state.selected.filter(|_| state.focus == Focus::List || editing),
        focused_field: state.focused_field(),
        list_scroll: state.list_scroll,
    };
    let painted = paint(&tree, &state.palette, splits.body, opts);
    frame.render_widget(Paragraph::new(painted.lines), splits.body);
    if let Some((x, y)) = painted.cursor {
        frame.set_cursor_position((x, y));
    }
    state.list_scroll = painted.list_scroll;
    state.hits = painted.hits;

    let hints = shortcut_line(&state.palette, state.key_mode(), state.app.variant().has_filters());
    frame.render_widget(Paragraph::new(hints), splits.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use todo_core::{Action, TodoApp};

    use crate::paint::HitTarget;
    use crate::theme::Appearance;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn draw_main_fills_hit_map() {
        let mut app = TodoApp::default();
        let id = app.add_task("Buy milk");
        let mut state = TuiState::new(app, Appearance::Dark);
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| draw(f, &mut state, f.area())).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("todo.tui"));
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Enter: add"));
        assert!(state.hits.iter().any(|h| h.target == HitTarget::Action(Action::ToggleTask(id))));
    }

    #[test]
    fn click_on_painted_checkbox_toggles() {
        let mut app = TodoApp::default();
        let id = app.add_task("Buy milk");
        let mut state = TuiState::new(app, Appearance::Dark);
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| draw(f, &mut state, f.area())).unwrap();
        let hit = state
            .hits
            .iter()
            .find(|h| h.target == HitTarget::Action(Action::ToggleTask(id)))
            .copied()
            .unwrap();
        state.click(hit.rect.x, hit.rect.y);
        assert!(state.app.row(id).unwrap().is_completed());
        assert_eq!(state.focus, Focus::List);
    }

    #[test]
    fn draw_logs_screen() {
        let mut state = TuiState::new(TodoApp::default(), Appearance::Light);
        state.push_trace_line("INFO task added".to_string());
        state.screen = Screen::Logs;
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|f| draw(f, &mut state, f.area())).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Logs"));
        assert!(text.contains("INFO task added"));
    }
}
