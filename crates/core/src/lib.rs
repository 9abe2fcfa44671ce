//! Core types for redkit
//!
//! This crate defines the foundational types shared by every other crate:
//! - KeyPrefix: optional key-namespace prefix applied ahead of every operation
//! - Error: error type hierarchy
//!
//! Nothing here talks to the network; the connection factory lives in
//! `redkit-client` and the per-family facades in `redkit-primitives`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod keyspace;

// Re-export commonly used types
pub use error::{Error, Result};
pub use keyspace::KeyPrefix;
