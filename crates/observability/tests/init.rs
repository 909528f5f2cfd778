use std::sync::{Arc, Mutex};

use todo_observability::{init, LogSink, ObservabilityConfig, ObservabilityError};

#[test]
fn init_routes_events_to_sink_and_refuses_second_init() {
    let lines = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink_lines = Arc::clone(&lines);
    let sink: LogSink = Arc::new(move |line| sink_lines.lock().unwrap().push(line));

    let config = ObservabilityConfig::new("todo-test")
        .with_console(false)
        .with_log_level("debug")
        .with_log_sink(sink);
    init(config).unwrap();

    tracing::info!(target: "todo_core::app", "task added");
    tracing::trace!(target: "todo_core::app", "filtered out");
    let got = lines.lock().unwrap().clone();
    assert!(got.iter().any(|l| l == "[INFO] todo_core::app: task added"));
    assert!(!got.iter().any(|l| l.contains("filtered out")));

    let again = init(ObservabilityConfig::new("todo-test").with_console(false));
    assert!(matches!(again, Err(ObservabilityError::InitFailed(_))));
}
