//! Logging infrastructure for the pkgq library.
//!
//! A query tool mixes report output on stdout with diagnostics on stderr;
//! this module provides the stderr side: a small logger with three
//! verbosity levels, configurable from CLI flags or the environment.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Diagnostic verbosity, ordered from least to most verbose.
///
/// # Examples
///
/// ```
/// use pkgq::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Recognizes "quiet", "normal", and "verbose", case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgq::LogLevel;
    ///
    /// assert_eq!("quiet".parse::<LogLevel>().unwrap(), LogLevel::Quiet);
    /// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
    /// assert!("loud".parse::<LogLevel>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            other => Err(format!("invalid log level: {other}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// Messages below the configured level are dropped.
///
/// # Examples
///
/// ```
/// use pkgq::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("ChangeLog entry has no parseable date");
/// logger.debug("this is only printed at Verbose");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, required: LogLevel, tag: &str, message: &str) {
        if self.level >= required {
            eprintln!("{tag}: {message}");
        }
    }

    /// Logs an error message. Shown unless the level is Quiet.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Logs a warning message. Shown unless the level is Quiet.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational message. Shown only at Verbose.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug message. Shown only at Verbose.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger from CLI flags and the environment.
///
/// Precedence: the `verbose`/`quiet` flags first (verbose wins when both
/// are set), then the `PKGQ_LOG_MODE` environment variable, then Normal.
///
/// # Examples
///
/// ```
/// use pkgq::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var("PKGQ_LOG_MODE")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}
