//! Error type shared by every part of the runner.

use std::path::PathBuf;

/// Errors raised while fetching, scaffolding, running or submitting.
#[derive(Debug, thiserror::Error)]
pub enum AocError {
    /// Day outside 1..=25.
    #[error("Day number must be between 1 and 25 (got {0})")]
    InvalidDay(i64),

    /// Part other than 1 or 2.
    #[error("Part number must be 1 or 2 (got {0})")]
    InvalidPart(i64),

    /// Bad or missing configuration.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Session token or headers could not be loaded.
    #[error("authentication error: {message}")]
    Auth { message: String },

    /// The puzzle site answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An input file that should exist does not.
    #[error("input file not found: {} (create it with {hint})", .path.display())]
    MissingInput { path: PathBuf, hint: &'static str },

    /// No compiled-in solution for this day.
    #[error("no solution registered for day {day}; run with --add")]
    NoSolution { day: u8 },

    /// The solution only works on untouched input.
    #[error("Please use --raw flag in this puzzle")]
    RawRequired,

    /// Example answer did not match.
    #[error("Test failed for Day {day}, Part {part}: Expected {expected}, got {actual}.")]
    TestFailed {
        day: u8,
        part: u8,
        expected: String,
        actual: String,
    },

    /// The site's HTML did not have the expected shape.
    #[error("unexpected response: {message}")]
    Response { message: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AocError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AocError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AocError>;
