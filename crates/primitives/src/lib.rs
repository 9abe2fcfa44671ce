//! Keyspace facade for redkit
//!
//! Provides one facade per remote command family, each a stateless wrapper
//! over the shared connection handle:
//! - **Strings**: scalar values (SET / GET / DEL)
//! - **Lists**: tail-append sequences (RPUSH / LRANGE / DEL)
//! - **Sets**: unordered unique members (SADD / SMEMBERS / DEL)
//! - **Hashes**: field-value mappings (HSET / HGETALL / DEL)
//! - **Bitmaps**: individual bits at arbitrary offsets (SETBIT / GETBIT)
//! - **HyperLogLog**: probabilistic cardinality (PFADD / PFCOUNT / PFMERGE)
//!
//! ## Design Principle: Stateless Facades
//!
//! Facades hold only a clone of the multiplexed connection handle and the
//! bound [`KeyPrefix`](redkit_core::KeyPrefix); all data lives in the remote
//! store. Every operation is a single awaited round trip (TTL-bearing writes
//! are two, see [`Keyspace`]), so facades can be cloned freely and used from
//! any number of tasks.
//!
//! ## Key Namespacing
//!
//! Every operation passes its key through the bound prefix before touching
//! the wire. Facades built from the same [`Keyspace`] share one prefix;
//! keyspaces with different prefixes over the same client do not see each
//! other's keys (modulo the documented colon-boundary collisions).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitmaps;
pub mod hashes;
pub mod hyperloglog;
pub mod keyspace;
pub mod lists;
pub mod sets;
pub mod strings;

mod expiry;

// Re-exports
pub use bitmaps::Bitmaps;
pub use hashes::Hashes;
pub use hyperloglog::HyperLogLog;
pub use keyspace::Keyspace;
pub use lists::Lists;
pub use sets::Sets;
pub use strings::Strings;
