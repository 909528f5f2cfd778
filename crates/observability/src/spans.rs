//! Utility functions for tracing

/// Create a span for one CLI command
///
/// # Example
///
/// ```rust
/// use todo_observability::command_span;
///
/// let span = command_span!("tree", "full");
/// let _guard = span.enter();
/// // ... command body ...
/// ```
#[macro_export]
macro_rules! command_span {
    ($command:expr, $variant:expr) => {
        tracing::info_span!(
            "todo.command",
            command = $command,
            variant = $variant,
            error = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and log it
///
/// # Example
///
/// ```rust
/// use todo_observability::record_error;
///
/// let parsed: Result<u32, _> = "x".parse::<u32>();
/// if let Err(e) = &parsed {
///     record_error(e);
/// }
/// ```
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", tracing::field::display(error));
    tracing::error!(error = %error, "command failed");
}
