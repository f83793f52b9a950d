//! # Logging Utilities
//!
//! Logging setup for the fsattr tools using `tracing`.
//!
//! `fsattr-core` only emits events; binaries call one of the `init_*`
//! functions here to install a subscriber.
//!
//! - Pretty output for terminals, JSON for log shippers
//! - Filters from `RUST_LOG` or an explicit level
//! - Optional file output through a non-blocking writer
//!
//! Console output goes to stderr: stdout belongs to the command's results.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fsattr_utils::init_logging;
//!
//! // Keep the guard alive until exit, or buffered file output is lost
//! let _guard = init_logging().expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Filter directives (e.g., `RUST_LOG=debug`, `RUST_LOG=fsattr_core=trace`)
//! - `FSATTR_LOG_FORMAT`: Output format (`json` or `pretty`, default: `pretty`)
//! - `FSATTR_LOG_FILE`: Optional log file. A directory receives `YYYY-MM-DD-fsattr.log`.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, io};

use chrono::Utc;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "FSATTR_LOG_FORMAT";

/// Environment variable selecting a log file or directory
pub const LOG_FILE_ENV: &str = "FSATTR_LOG_FILE";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default)
    #[default]
    Pretty,
    /// JSON format, one object per line
    Json,
}

impl FromStr for LogFormat
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {s}. Use 'pretty' or 'json'")),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel
{
    Error,
    Warn,
    /// Default
    Info,
    Debug,
    /// Includes one event per decoded attribute
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Unknown log level: {s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            )),
        }
    }
}

/// Resolved logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig
{
    /// Output format for every layer
    pub format: LogFormat,
    /// Explicit level; takes precedence over `RUST_LOG`
    pub level: Option<LogLevel>,
    /// Filter directives from `RUST_LOG`
    pub directives: Option<String>,
    /// Log file, in addition to the console
    pub file: Option<PathBuf>,
}

impl LogConfig
{
    /// Reads `RUST_LOG`, `FSATTR_LOG_FORMAT` and `FSATTR_LOG_FILE`.
    ///
    /// ## Errors
    ///
    /// [`LoggingError::InvalidFormat`] if `FSATTR_LOG_FORMAT` is set to
    /// something other than a known format.
    pub fn from_env() -> Result<Self, LoggingError>
    {
        Self::from_vars(
            env::var("RUST_LOG").ok(),
            env::var(LOG_FORMAT_ENV).ok(),
            env::var(LOG_FILE_ENV).ok(),
        )
    }

    /// Builds a configuration from raw variable values.
    ///
    /// ## Errors
    ///
    /// [`LoggingError::InvalidFormat`] for an unknown format.
    pub fn from_vars(
        rust_log: Option<String>,
        format: Option<String>,
        file: Option<String>,
    ) -> Result<Self, LoggingError>
    {
        let format = match format.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => value.parse().map_err(LoggingError::InvalidFormat)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            format,
            level: None,
            directives: rust_log.filter(|s| !s.trim().is_empty()),
            file: file.filter(|s| !s.trim().is_empty()).map(|s| resolve_log_file(Path::new(&s))),
        })
    }

    /// Sets an explicit level.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self
    {
        self.level = Some(level);
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self
    {
        self.format = format;
        self
    }

    /// The filter this configuration installs.
    ///
    /// Priority: explicit level, then `RUST_LOG` directives, then `info`.
    ///
    /// ## Errors
    ///
    /// [`LoggingError::InvalidFilter`] if the `RUST_LOG` directives do not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError>
    {
        if let Some(level) = self.level {
            return Ok(EnvFilter::new(Level::from(level).to_string()));
        }
        match &self.directives {
            Some(directives) => {
                EnvFilter::try_new(directives).map_err(|error| LoggingError::InvalidFilter(error.to_string()))
            }
            None => Ok(EnvFilter::new(Level::INFO.to_string())),
        }
    }
}

/// A directory receives a dated file; anything else is used as-is.
fn resolve_log_file(path: &Path) -> PathBuf
{
    if path.is_dir() {
        path.join(dated_file_name(&Utc::now().format("%Y-%m-%d").to_string()))
    } else {
        path.to_path_buf()
    }
}

fn dated_file_name(day: &str) -> String
{
    format!("{day}-fsattr.log")
}

/// Keeps the non-blocking file writer running
///
/// Dropping it flushes and stops the writer thread, so hold it until exit.
#[derive(Debug, Default)]
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard
{
    file: Option<WorkerGuard>,
    path: Option<PathBuf>,
}

impl LoggingGuard
{
    /// The log file in use, if any.
    pub fn file(&self) -> Option<&Path>
    {
        self.path.as_deref()
    }

    /// Whether a file writer is attached.
    pub fn has_file(&self) -> bool
    {
        self.file.is_some()
    }
}

/// Initialize logging from the environment
///
/// ## Example
///
/// ```rust,no_run
/// use fsattr_utils::init_logging;
///
/// let _guard = init_logging().expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
///
/// ## Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - `FSATTR_LOG_FORMAT` or `RUST_LOG` is invalid
/// - The log file cannot be created
pub fn init_logging() -> Result<LoggingGuard, LoggingError>
{
    init_logging_with_config(LogConfig::from_env()?)
}

/// Initialize logging with an explicit level and format
///
/// `FSATTR_LOG_FILE` is still honored.
///
/// ## Example
///
/// ```rust,no_run
/// use fsattr_utils::{LogFormat, LogLevel, init_logging_with_level};
///
/// let _guard = init_logging_with_level(LogLevel::Debug, LogFormat::Pretty)
///     .expect("Failed to initialize logging");
/// ```
///
/// ## Errors
///
/// Returns an error if logging is already initialized or the log file cannot
/// be created.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<LoggingGuard, LoggingError>
{
    let file = env::var(LOG_FILE_ENV).ok();
    let config = LogConfig::from_vars(None, None, file)?.with_level(level).with_format(format);
    init_logging_with_config(config)
}

/// Initialize logging from a resolved configuration
///
/// ## Errors
///
/// Returns an error if logging is already initialized, the filter is invalid,
/// or the log file cannot be created.
pub fn init_logging_with_config(config: LogConfig) -> Result<LoggingGuard, LoggingError>
{
    let (file_layer, guard) = match &config.file {
        Some(path) => {
            let (layer, worker) = file_layer(path, config.format, config.env_filter()?)?;
            (
                Some(layer),
                LoggingGuard {
                    file: Some(worker),
                    path: Some(path.clone()),
                },
            )
        }
        None => (None, LoggingGuard::default()),
    };

    let env_filter = config.env_filter()?;
    let console_layer = match config.format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true)
            .with_writer(io::stderr)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(io::stderr)
            .with_filter(env_filter)
            .boxed(),
    };

    Registry::default()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|error| LoggingError::InitializationFailed(error.to_string()))?;

    Ok(guard)
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn file_layer(path: &Path, format: LogFormat, env_filter: EnvFilter) -> Result<(BoxedLayer, WorkerGuard), LoggingError>
{
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidFile(path.display().to_string()))?;
    std::fs::create_dir_all(&directory)?;

    // The date is already in the name when it was picked by us
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let layer = match format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(env_filter)
            .boxed(),
    };

    Ok((layer, guard))
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log format
    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    /// `RUST_LOG` did not parse
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// The log file path has no file name
    #[error("Invalid log file: {0}")]
    InvalidFile(String),

    /// A global subscriber is already installed
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}
