//! redkit - typed keyspace facade over Redis
//!
//! redkit is a thin convenience layer over the `redis` crate: per-family
//! facades for scalar strings, lists, sets, hashes, bitmaps, and HyperLogLog
//! cardinality estimators, with an optional key-namespace prefix and an
//! optional expiration on writes. Every operation is a single round trip
//! delegated to the server's command set.
//!
//! # Quick Start
//!
//! ```ignore
//! use redkit::{Client, ClientConfig, Keyspace};
//!
//! // Connect to a local server, logical database 10
//! let config = ClientConfig::new("127.0.0.1:6379", None, 10);
//! let client = Client::connect(&config).await?;
//!
//! // Bind a key prefix; all keys below become "sessions:<key>"
//! let ks = Keyspace::new(&client, Some("sessions"));
//!
//! ks.strings().set("username", "user100", None).await?;
//! let name = ks.strings().get("username").await?;
//! ```
//!
//! # Architecture
//!
//! redkit holds no state of its own: facades carry a clone of the multiplexed
//! connection handle plus the prefix, and delegate everything else - pooling,
//! timeouts, wire protocol - to the underlying client.

// Re-export the public API from the member crates
pub use redkit_client::{Client, ClientConfig, CONFIG_FILE_NAME};
pub use redkit_core::{Error, KeyPrefix, Result};
pub use redkit_primitives::{Bitmaps, Hashes, HyperLogLog, Keyspace, Lists, Sets, Strings};
