//! TUI run loop: terminal setup, event handling, draw.
//!
//! Single-threaded: the loop polls crossterm with a short timeout, so log
//! lines and status timeouts are handled between key presses.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use todo_constant::Locale;
use todo_core::{AppVariant, TodoApp};

use crate::state::TuiState;
use crate::theme::Appearance;
use crate::view;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How to start the TUI.
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    pub variant: AppVariant,
    pub locale: Locale,
    pub appearance: Appearance,
    /// Tasks added before the first frame.
    pub tasks: Vec<String>,
}

impl TuiOptions {
    /// Controller seeded with [TuiOptions::tasks].
    pub fn build_app(&self) -> TodoApp {
        let mut app = TodoApp::new(self.variant, self.locale);
        for name in &self.tasks {
            app.add_task(name.clone());
        }
        app
    }
}

/// Run the TUI: alternate screen, raw mode, event loop.
/// If `log_rx` is provided, log lines are shown on the logs screen (Ctrl+D).
pub fn run_tui(options: TuiOptions, log_rx: Option<mpsc::Receiver<String>>) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    or_undo(execute!(stdout, EnterAlternateScreen, EnableMouseCapture), leave_screen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_undo(Terminal::new(backend), leave_screen)?;

    let mut state = TuiState::new(options.build_app(), options.appearance);
    state.push_trace_line(format!(
        "[log] TUI started ({}, {}). Ctrl+D toggles this screen.",
        options.variant, options.locale
    ));
    tracing::info!(variant = %options.variant, locale = %options.locale, tasks = options.tasks.len(), "tui started");
    let result = run_loop(&mut terminal, &mut state, log_rx);

    let restored = restore_terminal(&mut terminal);
    tracing::info!(tasks = state.app.len(), remaining = state.app.remaining(), "tui stopped");
    result.and(restored)
}

/// Run `undo` when setup step `result` failed.
fn or_undo<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    result.inspect_err(|_| undo())
}

/// Best-effort undo of raw mode, alternate screen and mouse capture.
fn leave_screen() {
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    log_rx: Option<mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    loop {
        // Multi-line log records become separate lines.
        if let Some(rx) = &log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }

        if let Some(set_at) = state.status_set_at
            && set_at.elapsed() > STATUS_TIMEOUT
        {
            state.clear_status();
        }

        if state.needs_redraw {
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        if event::poll(POLL_INTERVAL)? {
            state.handle_event(event::read()?);
        }
        if state.quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_seed_tasks_in_order() {
        let options = TuiOptions {
            tasks: vec!["a".into(), "b".into()],
            ..TuiOptions::default()
        };
        let app = options.build_app();
        let names: Vec<&str> = app.tasks().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(app.remaining(), 2);
    }

    #[test]
    fn failed_setup_step_runs_undo() {
        let mut undone = 0;
        let failed: Result<(), io::Error> = or_undo(Err(io::Error::other("no tty")), || undone += 1);
        assert!(failed.is_err());
        assert_eq!(undone, 1);

        let ok = or_undo(Ok::<_, io::Error>(7), || undone += 1);
        assert_eq!(ok.unwrap(), 7);
        assert_eq!(undone, 1);
    }
}
