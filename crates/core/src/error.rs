//! Error types for redkit
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Errors produced by the server pass through unmodified: no retry, no
//! classification, no context wrapping. The only locally minted failure on
//! the command path is [`Error::KeyNotFound`], mapped from a nil reply when
//! reading a missing scalar.

use thiserror::Error;

/// Result type alias for redkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the redkit facade
#[derive(Debug, Error)]
pub enum Error {
    /// Error surfaced by the underlying client, unmodified: connection or
    /// network failure, WRONGTYPE, wrong argument counts, timeouts.
    #[error(transparent)]
    Redis(#[from] redis::RedisError),

    /// Read of a scalar key that does not exist (nil reply on GET)
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Address could not be parsed as `host:port`
    #[error("invalid address '{addr}': {reason}")]
    InvalidAddress {
        /// The address string as supplied
        addr: String,
        /// Why it did not parse
        reason: String,
    },

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_redis_passthrough() {
        let inner = redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"));
        let expected = inner.to_string();
        let err = Error::from(inner);
        // Transparent: the wrapped error's message, nothing prepended
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_error_display_key_not_found() {
        let err = Error::KeyNotFound("sessions:username".to_string());
        let msg = err.to_string();
        assert!(msg.contains("key not found"));
        assert!(msg.contains("sessions:username"));
    }

    #[test]
    fn test_error_display_invalid_address() {
        let err = Error::InvalidAddress {
            addr: "localhost".to_string(),
            reason: "expected host:port".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid address"));
        assert!(msg.contains("localhost"));
        assert!(msg.contains("expected host:port"));
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("failed to parse redkit.toml".to_string());
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("redkit.toml"));
    }
}
