//! # CLI Argument Definitions
//!
//! Command-line surface of `mkts`, defined with `clap`. The parsed [`Cli`] is turned into
//! explicit scaffold options in `main`; nothing reads arguments globally.

use clap::{ArgAction, Parser, ValueEnum};
use mkts_logger::Rotation;
use std::path::PathBuf;

/// Scaffold a new TypeScript project.
#[derive(Debug, Parser)]
#[command(name = "mkts")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scaffold a new TypeScript project")]
pub(crate) struct Cli {
    /// Project name, used as both the folder and the package name.
    pub(crate) name: Option<String>,

    /// Initialize a git repository with an ignore file.
    #[arg(long)]
    pub(crate) git: bool,

    /// Init the coding challenge template.
    #[arg(long)]
    pub(crate) cc: bool,

    /// Skip installing dependencies through the package manager.
    #[arg(long)]
    pub(crate) no_install: bool,

    /// Settings file (TOML, JSON or YAML) overriding package manager, dependencies and VCS.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub(crate) verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Also write rolling log files into this directory.
    #[arg(long, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,

    /// Write log files as JSON lines.
    #[arg(long, requires = "log_dir")]
    pub(crate) log_json: bool,

    /// How often log files roll over [default: daily].
    #[arg(long, value_name = "PERIOD", requires = "log_dir")]
    pub(crate) log_rotation: Option<LogRotation>,

    /// Number of rolled log files to keep [default: 10].
    #[arg(long, value_name = "N", requires = "log_dir")]
    pub(crate) log_max_files: Option<usize>,

    /// Tracing filter directives (e.g. `mkts_scaffold=debug`); replaces `RUST_LOG`.
    #[arg(long, value_name = "DIRECTIVES")]
    pub(crate) log_filter: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogRotation {
    Minutely,
    Hourly,
    Daily,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => Self::MINUTELY,
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

impl Cli {
    /// The project name, unless it is missing or blank.
    pub(crate) fn project_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
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
    fn parses_name_and_flags() {
        let cli = Cli::parse_from(["mkts", "demo", "--git", "--cc", "-vv"]);
        assert_eq!(cli.project_name(), Some("demo"));
        assert!(cli.git);
        assert!(cli.cc);
        assert!(!cli.no_install);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn flags_default_to_off() {
        let cli = Cli::parse_from(["mkts", "demo"]);
        assert!(!cli.git);
        assert!(!cli.cc);
        assert!(cli.config.is_none());
    }

    #[test]
    fn blank_name_counts_as_missing() {
        assert_eq!(Cli::parse_from(["mkts"]).project_name(), None);
        assert_eq!(Cli::parse_from(["mkts", "  "]).project_name(), None);
    }

    #[test]
    fn log_file_options_require_a_directory() {
        assert!(Cli::try_parse_from(["mkts", "demo", "--log-json"]).is_err());
        assert!(Cli::try_parse_from(["mkts", "demo", "--log-max-files", "3"]).is_err());

        let cli = Cli::try_parse_from([
            "mkts",
            "demo",
            "--log-dir",
            "logs",
            "--log-json",
            "--log-rotation",
            "hourly",
            "--log-max-files",
            "3",
        ])
        .expect("parse");
        assert!(cli.log_json);
        assert_eq!(cli.log_rotation, Some(LogRotation::Hourly));
        assert_eq!(cli.log_max_files, Some(3));
    }

    #[test]
    fn rotation_maps_onto_appender_rotation() {
        assert_eq!(Rotation::from(LogRotation::Never), Rotation::NEVER);
        assert_eq!(Rotation::from(LogRotation::Daily), Rotation::DAILY);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["mkts", "demo", "-v", "-q"]).is_err());
    }
}
