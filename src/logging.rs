//! `tracing` subscriber setup.
//!
//! The interactive session owns the terminal, so it logs to a file or not at
//! all. Headless commands log to stderr. `RUST_LOG` is merged with the
//! configured level.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::types::Config;

/// Filter directive from the configured level and an optional `RUST_LOG`.
///
/// A `RUST_LOG` that already names this crate wins; otherwise it is
/// combined with the crate's default directive.
pub fn combined_directive(level: &str, env_override: Option<&str>) -> String {
    let default_directive = format!("tabstrip={}", level.to_lowercase());
    match env_override.map(str::trim) {
        None | Some("") => default_directive,
        Some(env) if env.contains("tabstrip") => env.to_string(),
        Some(env) => format!("{env},{default_directive}"),
    }
}

fn build_filter(config: &Config) -> Result<EnvFilter> {
    let env_override = std::env::var("RUST_LOG").ok();
    let directive = combined_directive(&config.log_level, env_override.as_deref());
    EnvFilter::try_new(&directive).map_err(|e| Error::Logging(format!("{directive}: {e}")))
}

/// Open (or create) the log file in append mode.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Install the global subscriber.
///
/// With `interactive` set and no log file configured, nothing is installed.
pub fn init(config: &Config, interactive: bool) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match (&config.log_file, interactive) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        (None, true) => return Ok(()),
        (None, false) => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_targets_crate() {
        assert_eq!(combined_directive("INFO", None), "tabstrip=info");
        assert_eq!(combined_directive("debug", Some("  ")), "tabstrip=debug");
    }

    #[test]
    fn env_override_naming_crate_wins() {
        assert_eq!(
            combined_directive("info", Some("tabstrip=trace")),
            "tabstrip=trace"
        );
    }

    #[test]
    fn unrelated_env_override_is_combined() {
        assert_eq!(
            combined_directive("warn", Some("ratatui=debug")),
            "ratatui=debug,tabstrip=warn"
        );
    }

    #[test]
    fn combined_directives_parse() {
        for directive in [
            combined_directive("info", None),
            combined_directive("trace", Some("crossterm=warn")),
        ] {
            assert!(EnvFilter::try_new(&directive).is_ok(), "{directive}");
        }
    }

    #[test]
    fn log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabstrip.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_log_path_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tabstrip.log");
        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(err, Error::LogFile { .. }));
        assert!(err.to_string().contains("tabstrip.log"));
    }
}
