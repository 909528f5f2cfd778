//! CLI argument definitions using clap derive macros.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use todo_constant::app::{DESCRIPTION, NAME, VERSION};
use todo_constant::Locale;
use todo_core::{AppVariant, Filter};
use todo_tui::Appearance;

#[derive(Parser)]
#[command(name = NAME, about = DESCRIPTION, version = VERSION, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Debug logging (-vv for trace). TODO_LOG / RUST_LOG apply otherwise
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

/// Flags shared by every command that builds the app.
#[derive(Args, Debug, Clone)]
pub struct AppArgs {
    /// App stage: basic (list only) or full (filter tabs, counter, clear completed)
    #[arg(long, env = "TODO_VARIANT", default_value = "full")]
    pub variant: AppVariant,

    /// Label language: en or ja
    #[arg(long, env = "TODO_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Task added at startup, in order (repeatable)
    #[arg(long = "task", value_name = "NAME")]
    pub tasks: Vec<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive to-do list
    Tui {
        #[command(flatten)]
        app: AppArgs,

        /// Color scheme: dark or light
        #[arg(long, env = "TODO_APPEARANCE", default_value = "dark")]
        appearance: Appearance,
    },
    /// Build the app headlessly and print its UI tree
    Tree {
        #[command(flatten)]
        app: AppArgs,

        /// Filter tab to select: all, active or completed
        #[arg(long, default_value = "all")]
        filter: Filter,

        /// Mark the task at this 1-based position completed (repeatable)
        #[arg(long = "done", value_name = "INDEX")]
        done: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn metadata_comes_from_constants() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), NAME);
        assert_eq!(cmd.get_version(), Some(VERSION));
        assert_eq!(cmd.get_about().map(|s| s.to_string()), Some(DESCRIPTION.to_string()));
    }

    #[test]
    fn parses_tree_flags() {
        let cli = Cli::try_parse_from([
            "todo", "-o", "json", "tree", "--variant", "basic", "--locale", "ja", "--task", "a", "--task", "b",
            "--done", "2", "--filter", "done",
        ])
        .unwrap();
        assert!(matches!(cli.output, OutputFormat::Json));
        let Command::Tree { app, filter, done } = cli.command else {
            panic!("expected tree");
        };
        assert_eq!(app.variant, AppVariant::Basic);
        assert_eq!(app.locale, Locale::Ja);
        assert_eq!(app.tasks, ["a", "b"]);
        assert_eq!(filter, Filter::Completed);
        assert_eq!(done, [2]);
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["todo", "tree", "--variant", "huge"]).is_err());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["todo", "tui", "-vv", "--appearance", "light"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Tui {
                appearance: Appearance::Light,
                ..
            }
        ));
    }
}
