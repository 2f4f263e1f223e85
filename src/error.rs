//! Error types for xmlify
//!
//! Rendering itself is infallible. Errors only come from building a
//! [`Filter`](crate::Filter) out of caller-supplied patterns and from the JSON
//! input adapter.

use thiserror::Error;

/// Main error type for xmlify
#[derive(Error, Debug)]
pub enum Error {
    /// The alternation built from a filter's keys is not a valid pattern.
    ///
    /// Filter keys are joined verbatim, so regex metacharacters in a key are
    /// interpreted as pattern syntax.
    #[error("invalid filter pattern `{pattern}`: {source}")]
    InvalidFilterPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The input handed to [`Node::from_json_str`](crate::Node::from_json_str)
    /// is not valid JSON.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for xmlify
pub type Result<T> = std::result::Result<T, Error>;
