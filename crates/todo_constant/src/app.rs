//! Application metadata constants

pub const NAME: &str = "todo";
pub const DISPLAY_NAME: &str = "todo.tui";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Terminal to-do list with filters and inline editing";

/// Directory under the home dir holding the optional `env` file.
pub const DATA_DIR: &str = ".todo";
/// Env file name inside [DATA_DIR].
pub const ENV_FILE: &str = "env";
