//! Logging infrastructure for ado-pr.
//!
//! Logging is off unless a level is requested. Events from this crate go to
//! stderr or to a file, as compact text or JSON lines. The settings are read
//! from the raw argument list before clap runs, so configuration resolution
//! itself can be traced.

use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Environment variable for the log level.
pub const LOG_LEVEL_ENV: &str = "ADO_PR_LOG_LEVEL";
/// Environment variable for the log file.
pub const LOG_FILE_ENV: &str = "ADO_PR_LOG_FILE";
/// Environment variable for the log format.
pub const LOG_FORMAT_ENV: &str = "ADO_PR_LOG_FORMAT";

/// Verbosity of the crate's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

impl LogLevel {
    /// Level name as understood by `EnvFilter` directives.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Shape of the emitted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// `None` disables logging.
    pub level: Option<LogLevel>,
    /// `None` logs to stderr.
    pub file: Option<PathBuf>,
    pub format: LogFormat,
}

impl LogConfig {
    /// Filter directive limiting output to this crate.
    pub fn filter_directive(&self) -> Option<String> {
        self.level.map(|level| format!("ado_pr={}", level.as_str()))
    }
}

/// Keeps the background log writer alive; pending records are flushed on drop.
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Installs the global subscriber described by `config`.
///
/// Returns `None` when logging is disabled or the log file cannot be opened.
///
/// # Example
///
/// ```rust,no_run
/// use ado_pr::logging::{LogConfig, LogLevel, LogFormat, init_logging};
/// use std::path::PathBuf;
///
/// let _guard = init_logging(LogConfig {
///     level: Some(LogLevel::Debug),
///     file: Some(PathBuf::from("/tmp/ado-pr.log")),
///     format: LogFormat::Json,
/// });
/// ```
#[must_use = "the returned guard must be held until application exit"]
pub fn init_logging(config: LogConfig) -> Option<LogGuard> {
    let filter = EnvFilter::new(config.filter_directive()?);

    let to_file = config.file.is_some();
    let (writer, worker) = match &config.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()?;
            tracing_appender::non_blocking(file)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .json()
                    .with_span_events(FmtSpan::CLOSE)
                    .with_file(to_file)
                    .with_line_number(to_file),
            )
            .init(),
        LogFormat::Text if to_file => registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(writer).with_target(true).compact())
            .init(),
    }

    Some(LogGuard { _worker: worker })
}

/// Reads the logging flags from raw arguments, falling back to `ADO_PR_LOG_*`.
///
/// Unknown levels disable logging; unknown formats fall back to text.
#[must_use]
pub fn parse_early_log_config(args: &[String]) -> LogConfig {
    parse_early_log_config_with(args, |var| std::env::var(var).ok())
}

/// Same as [`parse_early_log_config`] with an explicit environment lookup.
#[must_use]
pub fn parse_early_log_config_with(
    args: &[String],
    env: impl Fn(&str) -> Option<String>,
) -> LogConfig {
    let setting = |flag: &str, var: &str| flag_value(args, flag).or_else(|| env(var));

    LogConfig {
        level: setting("--log-level", LOG_LEVEL_ENV).and_then(|s| s.parse().ok()),
        file: setting("--log-file", LOG_FILE_ENV)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from),
        format: setting("--log-format", LOG_FORMAT_ENV)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
    }
}

/// Value of `flag` given as `--flag value` or `--flag=value`.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter().enumerate().find_map(|(i, arg)| {
        if arg == flag {
            args.get(i + 1).cloned()
        } else {
            arg.strip_prefix(flag)
                .and_then(|rest| rest.strip_prefix('='))
                .map(str::to_string)
        }
    })
}
