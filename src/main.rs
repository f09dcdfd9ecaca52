//! tabstrip CLI
//!
//! Interactive accessible tab widget, plus a headless replay that prints the
//! accessibility tree.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tabstrip::error::Result;
use tabstrip::logging;
use tabstrip::snapshot::{format_snapshot, parse_events, replay};
use tabstrip::tui::run::run;
use tabstrip::types::{Config, OutputFormat, TabSet};

#[derive(Parser)]
#[command(name = "tabstrip")]
#[command(about = "Keyboard-accessible tab widget for the terminal")]
#[command(version)]
struct Cli {
    /// Append log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive tab widget (default)
    Run,

    /// Replay events headlessly and print the accessibility tree
    Snapshot {
        /// Comma-separated events: key names (ArrowLeft, End, x), click:N, focus:N
        #[arg(long, default_value = "")]
        events: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config {
        log_file: cli.log_file,
        log_level: cli.log_level,
    };

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(&config),
        Commands::Snapshot { events, format } => cmd_snapshot(&config, &events, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_run(config: &Config) -> Result<()> {
    logging::init(config, true)?;
    run(TabSet::user_options())
}

fn cmd_snapshot(config: &Config, events: &str, format: OutputFormat) -> Result<()> {
    logging::init(config, false)?;

    let tabs = TabSet::user_options();
    let events = parse_events(events, tabs.len())?;
    let snapshot = replay(tabs, &events);
    print!("{}", format_snapshot(&snapshot, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_run() {
        let cli = Cli::try_parse_from(["tabstrip"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn snapshot_takes_events_and_format() {
        let cli = Cli::try_parse_from([
            "tabstrip",
            "snapshot",
            "--events",
            "ArrowLeft,click:1",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Snapshot { events, format }) => {
                assert_eq!(events, "ArrowLeft,click:1");
                assert_eq!(OutputFormat::from(format), OutputFormat::Json);
            }
            _ => panic!("Expected Snapshot"),
        }
        assert_eq!(cli.log_level, "debug");
    }
}
