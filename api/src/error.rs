//! Error types for the analytics client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures while fetching or decoding the analytics report.
///
/// The dashboard collapses all of these into a single error card, so the
/// variants exist for diagnostics and tests rather than for branching
/// recovery logic. Every variant renders to a one-line human-readable
/// message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered, but not with a success status.
    #[error("analytics request failed with status {status}")]
    Status { status: StatusCode },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("analytics endpoint unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not a valid analytics report.
    #[error("analytics response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Result type for client operations.
pub type FetchResult<T> = Result<T, FetchError>;
