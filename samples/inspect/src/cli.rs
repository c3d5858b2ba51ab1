use std::path::PathBuf;

use clap::ValueHint;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,tmdump=info,inspect=info",
        env = "TMDUMP_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Summarize a mesh dump
    Mesh {
        /// Dump to read
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Only list the first N triangles
        #[arg(short, long, value_name = "N")]
        step: Option<usize>,
        /// Require the index column of every section to count up from 1
        #[arg(long)]
        strict: bool,
        /// Reject dumps without a NEIGHBORS section
        #[arg(long)]
        require_neighbors: bool,
        /// Write the parsed mesh back out to this path
        #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
        rewrite: Option<PathBuf>,
    },
    /// Summarize a quadtree dump
    Qtree {
        /// Dump to read
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Write the parsed quadtree back out to this path
        #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
        rewrite: Option<PathBuf>,
    },
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
