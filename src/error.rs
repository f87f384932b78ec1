// src/error.rs
//
// Every failure here is recoverable from the user's point of view: frontends
// report it and go back to idle.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection, TLS, timeout or body read failure.
    #[error("failed to connect to {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The server answered, but not with 200.
    #[error("{url} answered with HTTP {code}")]
    Status { url: String, code: u16 },

    /// No candidate encoding produced a usable table.
    #[error("could not read table with any of: {}", .tried.join(", "))]
    Decode { tried: Vec<&'static str> },

    #[error("table has no rows")]
    EmptyTable,

    #[error("column not found: {0}")]
    MissingColumn(String),

    /// An action was triggered before the data it needs exists.
    #[error("{0}")]
    MissingPrerequisite(&'static str),

    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
