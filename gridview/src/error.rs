//! Error types

use thiserror::Error;

/// Errors surfaced by the one-shot dataset load.
///
/// Interaction operations never fail: degenerate input (unknown column
/// keys, out-of-range positions, events before load) degrades to a logged
/// no-op instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Network error while fetching the dataset.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to read the dataset from disk.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload was not a JSON array of row objects.
    #[error("invalid row payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The source address could not be parsed.
    #[error("invalid source url: {0}")]
    InvalidUrl(String),
}
