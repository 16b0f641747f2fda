//! CLI argument definitions for the Cardioscreen service.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cardioscreen",
    version,
    about = "Cardioscreen - heart disease risk screening service",
    long_about = "Serve the heart disease screening form and prediction endpoint.\n\n\
                  Submissions are validated against the thirteen-parameter clinical\n\
                  schema, encoded into a feature vector, and classified."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// When to emit ANSI colors (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Exact log level; wins over -v/-q.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log record rendering (pretty, compact, or json).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the screening web server.
    Serve(ServeArgs),

    /// List the clinical fields and their validation rules.
    Fields,
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long = "host", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long = "port", default_value_t = 8080)]
    pub port: u16,

    /// Age at or above which the stand-in classifier flags elevated risk.
    #[arg(long = "age-threshold", value_name = "YEARS")]
    pub age_threshold: Option<f64>,
}

/// `--log-level` values.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// `--log-format` values.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
