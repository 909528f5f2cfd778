//! Tracing initialization: registry, env filter, optional console and sink layers.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::sink_layer::sink_layer;

/// Filter used when neither the config nor the environment names one.
pub const DEFAULT_LEVEL: &str = "info";

/// Install the global subscriber described by `config`.
///
/// Fails with [ObservabilityError::Config] on an unparsable filter and with
/// [ObservabilityError::InitFailed] when a global subscriber is already set.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = match &config.log_level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::Config(format!("invalid log filter '{level}': {e}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    };

    // stderr keeps stdout free for command output
    let fmt_layer = config
        .enable_console
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let sink = sink_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(sink)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(
        service.name = %config.service_name,
        console = config.enable_console,
        sink = config.log_sink.is_some(),
        "tracing initialized"
    );
    Ok(())
}
