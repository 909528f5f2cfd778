//! todo-observability - tracing setup shared by the `todo` binary and the TUI.
//!
//! # Features
//!
//! - `EnvFilter` from an explicit level or `TODO_LOG` / `RUST_LOG`
//! - Optional console output on stderr (stdout stays clean for `-o json`)
//! - Optional log sink: every event as one line, for the TUI logs screen
//! - Small helpers for command spans and error recording
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("todo").with_log_level("debug");
//! init(config)?;
//!
//! tracing::info!("started");
//! # Ok::<(), todo_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `TODO_LOG` or `RUST_LOG` - Log level filter
//! - `TODO_LOG_CONSOLE` - `0`/`false` disables console output

pub mod config;
pub mod error;
pub mod sink_layer;
pub mod spans;
pub mod telemetry;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use spans::record_error;
pub use telemetry::init;
