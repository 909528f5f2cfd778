//! Tracing layer that forwards formatted log lines to a sink (e.g. the TUI logs screen).

use std::fmt::Write;

use tracing::field::Visit;
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Longest line handed to the sink; longer ones are cut and annotated.
const MAX_LEN: usize = 4_000;

/// Builds a single line from an event: "[LEVEL] target: message key=value ..."
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(128),
        }
    }

    fn sep(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.sep();
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.sep();
        if field.name() == "message" {
            write!(self.buf, "{:?}", value).ok();
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }
}

/// Layer that sends each formatted event to the given sink when present. The sink must not block.
pub fn sink_layer(sink: Option<LogSink>) -> SinkLayer {
    SinkLayer { sink }
}

#[derive(Clone)]
pub struct SinkLayer {
    sink: Option<LogSink>,
}

/// One log line for `event`, without the sink.
fn format_event(event: &tracing::Event<'_>) -> String {
    let meta = event.metadata();
    let mut visitor = LineVisitor::new();
    event.record(&mut visitor);
    let line = if visitor.buf.is_empty() {
        format!("[{}] {}", meta.level(), meta.target())
    } else {
        format!("[{}] {}: {}", meta.level(), meta.target(), visitor.buf)
    };
    if line.chars().count() > MAX_LEN {
        let trunc: String = line.chars().take(MAX_LEN).collect();
        format!("{}… ({} chars)", trunc, line.chars().count())
    } else {
        line
    }
}

impl<S> Layer<S> for SinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if let Some(ref sink) = self.sink {
            sink(format_event(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    fn capture(f: impl FnOnce()) -> Vec<String> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let sink: LogSink = Arc::new(move |line| sink_lines.lock().unwrap().push(line));
        let subscriber = Registry::default().with(sink_layer(Some(sink)));
        tracing::subscriber::with_default(subscriber, f);
        let out = lines.lock().unwrap().clone();
        out
    }

    #[test]
    fn formats_level_target_message_and_fields() {
        let lines = capture(|| tracing::info!(target: "todo_core::app", id = 3, "task added"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[INFO] todo_core::app: "));
        assert!(lines[0].contains("task added"));
        assert!(lines[0].contains("id=3"));
    }

    #[test]
    fn string_fields_are_quoted() {
        let lines = capture(|| tracing::warn!(target: "t", name = "milk", "renamed"));
        assert!(lines[0].starts_with("[WARN] t: "));
        assert!(lines[0].contains("name=\"milk\""));
    }

    #[test]
    fn long_lines_are_cut() {
        let long = "x".repeat(MAX_LEN + 10);
        let lines = capture(|| tracing::info!(target: "t", "{}", long));
        assert!(lines[0].ends_with("chars)"));
        assert!(lines[0].chars().count() < MAX_LEN + 30);
    }

    #[test]
    fn no_sink_is_silent() {
        let subscriber = Registry::default().with(sink_layer(None));
        tracing::subscriber::with_default(subscriber, || tracing::info!("nobody listens"));
    }
}
