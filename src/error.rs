//! Error types for rs-htmlclean.
//!
//! The cleaning steps themselves never fail; errors only come from the
//! configuration layer and the optional input guard.

/// Error type for cleaning operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input exceeded the configured `max_input_len`.
    #[error("Input too large: {len} bytes (limit {max})")]
    InputTooLarge {
        /// Length of the rejected input in bytes.
        len: usize,
        /// Configured limit in bytes.
        max: usize,
    },

    /// JSON configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;
