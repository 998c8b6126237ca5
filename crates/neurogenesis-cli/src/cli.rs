use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "ngen")]
#[command(about = "ngen - Neurogenesis - flat-file notes with a JSON index")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses RUST_LOG or defaults to 'warn'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/neurogenesis/config.json)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Notes directory (overrides config file and NEUROGENESIS_NOTES_DIR)
    #[arg(short = 'd', long, global = true)]
    pub notes_dir: Option<PathBuf>,
}

impl Cli {
    /// Level requested on the command line, if any
    pub fn requested_log_level(&self) -> Option<LevelFilter> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level.into()),
            (None, true) => Some(LevelFilter::DEBUG),
            (None, false) => None,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create a new note and refresh the database
    #[command(visible_alias = "create")]
    New {
        /// Title for the new note
        #[arg(long)]
        title: Option<String>,
    },

    /// Rescan the notes directory and rewrite the database
    #[command(visible_alias = "rebuild")]
    Refresh,

    /// Print the database JSON as stored
    #[command(name = "get_nodes", visible_alias = "read-index", alias = "get-nodes")]
    GetNodes,

    /// Show the effective configuration
    Config,
}
