//! Command dispatch.

pub mod tree;
pub mod tui;

use anyhow::Result;
use todo_constant::app::NAME;
use todo_observability::ObservabilityConfig;

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tui { app, appearance } => tui::handle(app, appearance, cli.verbose),
        Command::Tree { app, filter, done } => tree::handle(app, filter, &done, cli.verbose),
    }
}

/// Logging config: `-v` beats `TODO_LOG` / `RUST_LOG`, which beat `default_level`.
fn observability(verbose: u8, default_level: &str) -> ObservabilityConfig {
    with_verbosity(ObservabilityConfig::from_env(), verbose, default_level)
}

fn with_verbosity(config: ObservabilityConfig, verbose: u8, default_level: &str) -> ObservabilityConfig {
    let config = ObservabilityConfig {
        service_name: NAME.to_string(),
        ..config
    };
    match verbose {
        0 => config.with_default_log_level(default_level),
        1 => config.with_log_level("debug"),
        _ => config.with_log_level("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_level(level: &str) -> ObservabilityConfig {
        let level = level.to_string();
        ObservabilityConfig::from_lookup(move |key| (key == "TODO_LOG").then(|| level.clone()))
    }

    #[test]
    fn verbose_overrides_level() {
        assert_eq!(observability(1, "warn").log_level.as_deref(), Some("debug"));
        assert_eq!(observability(3, "warn").log_level.as_deref(), Some("trace"));
    }

    #[test]
    fn verbose_beats_env_which_beats_default() {
        let level = |config: ObservabilityConfig| config.log_level;
        assert_eq!(level(with_verbosity(env_level("error"), 1, "warn")).as_deref(), Some("debug"));
        assert_eq!(level(with_verbosity(env_level("error"), 0, "warn")).as_deref(), Some("error"));
        let unset = ObservabilityConfig::from_lookup(|_| None);
        assert_eq!(level(with_verbosity(unset, 0, "warn")).as_deref(), Some("warn"));
    }

    #[test]
    fn service_name_is_the_binary_name() {
        assert_eq!(with_verbosity(ObservabilityConfig::default(), 0, "info").service_name, NAME);
    }
}
