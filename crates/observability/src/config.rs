//! Configuration for tracing setup

use std::sync::Arc;

/// Sink for formatted log lines (e.g. the TUI logs screen). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Env var holding the log filter; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "TODO_LOG";

/// Env var that turns console output off when `0` or `false`.
pub const LOG_CONSOLE_ENV: &str = "TODO_LOG_CONSOLE";

/// Observability configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name recorded when tracing starts
    pub service_name: String,

    /// Log level filter (e.g., "info", "todo_core=debug").
    /// Falls back to `RUST_LOG`, then "info", when not set
    pub log_level: Option<String>,

    /// Format events to stderr
    pub enable_console: bool,

    /// Optional sink for each formatted log line
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "todo".to_string(),
            log_level: None,
            enable_console: true,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("log_level", &self.log_level)
            .field("enable_console", &self.enable_console)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Set log level only when none was configured yet
    pub fn with_default_log_level(mut self, level: impl Into<String>) -> Self {
        if self.log_level.is_none() {
            self.log_level = Some(level.into());
        }
        self
    }

    /// Sink for formatted log lines. Called from the tracing layer; must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `TODO_LOG` or `RUST_LOG` → log_level
    /// - `TODO_LOG_CONSOLE` → enable_console (`0` / `false` disables)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [ObservabilityConfig::from_env] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = lookup(LOG_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|v| !v.trim().is_empty());
        let enable_console = lookup(LOG_CONSOLE_ENV)
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off"))
            .unwrap_or(true);
        Self {
            log_level,
            enable_console,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn todo_log_wins_over_rust_log() {
        let config = ObservabilityConfig::from_lookup(lookup(&[("TODO_LOG", "debug"), ("RUST_LOG", "warn")]));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rust_log_fallback_and_blank_ignored() {
        let config = ObservabilityConfig::from_lookup(lookup(&[("RUST_LOG", "warn")]));
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        let config = ObservabilityConfig::from_lookup(lookup(&[("TODO_LOG", "  ")]));
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn console_can_be_disabled() {
        assert!(ObservabilityConfig::from_lookup(lookup(&[])).enable_console);
        assert!(!ObservabilityConfig::from_lookup(lookup(&[("TODO_LOG_CONSOLE", "false")])).enable_console);
    }

    #[test]
    fn default_level_does_not_override() {
        let config = ObservabilityConfig::new("todo")
            .with_log_level("trace")
            .with_default_log_level("warn");
        assert_eq!(config.log_level.as_deref(), Some("trace"));
        let config = ObservabilityConfig::new("todo").with_default_log_level("warn");
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn debug_hides_sink() {
        let config = ObservabilityConfig::new("todo").with_log_sink(std::sync::Arc::new(|_: String| {}));
        assert!(format!("{config:?}").contains("Some(LogSink)"));
    }
}
