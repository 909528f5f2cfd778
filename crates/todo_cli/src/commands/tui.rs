//! `todo tui` — run the interactive to-do list.

use std::io::IsTerminal;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::{bail, Result};
use todo_observability::{command_span, init, record_error, LogSink};
use todo_tui::{run_tui, Appearance, TuiOptions};

use crate::cli::AppArgs;
use crate::output;

pub fn handle(app: AppArgs, appearance: Appearance, verbose: u8) -> Result<()> {
    if !std::io::stdout().is_terminal() || !std::io::stdin().is_terminal() {
        bail!(
            "todo tui requires an interactive terminal (TTY). \
             Run it from a terminal, or use `todo tree` for headless output."
        );
    }

    // Log lines go to the logs screen (Ctrl+D); console output would corrupt the UI.
    let (log_tx, log_rx) = mpsc::channel::<String>();
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.send(line);
    });
    let obs_config = super::observability(verbose, "info")
        .with_console(false)
        .with_log_sink(log_sink);
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {e}"));
    }

    let span = command_span!("tui", app.variant.as_str());
    let _guard = span.enter();

    let options = TuiOptions {
        variant: app.variant,
        locale: app.locale,
        appearance,
        tasks: app.tasks,
    };
    run_tui(options, Some(log_rx)).inspect_err(|e| record_error(e))
}
