//! # Fetch Cycle Errors
//!
//! Three kinds of failure can occur while loading listings:
//! * [`FetchError`]: the request never produced a usable body. The
//!   previously displayed list stays as it is.
//! * [`DecodeError`]: the body is not the expected JSON document. Treated as
//!   "zero records".
//! * [`ElementError`]: a single entry of `loans` has the wrong shape. Under
//!   the default policy the entry is skipped and counted.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("fetch task ended without delivering a result")]
    Interrupted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("body is not valid JSON: {0}")]
    Json(String),

    #[error("top-level value is not an object with a `loans` field")]
    MissingLoans,

    #[error("`loans` is not an array")]
    NotAnArray,

    #[error("loan #{index} is malformed: {reason}")]
    Element { index: usize, reason: ElementError },
}

/// Why a single element of `loans` could not become a record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ElementError(pub String);

impl From<serde_json::Error> for ElementError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
