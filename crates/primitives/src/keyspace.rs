//! Keyspace: prefix-bound entry point over the connection handle

use redis::aio::MultiplexedConnection;
use redkit_client::Client;
use redkit_core::{KeyPrefix, Result};

use crate::{Bitmaps, Hashes, HyperLogLog, Lists, Sets, Strings};

/// Prefix-aware wrapper exposing the per-family facades.
///
/// A keyspace binds an optional prefix to a client's connection handle and
/// hands out family facades that share both. It is stateless: multiple
/// keyspaces over one client are safe, including with different prefixes.
///
/// # Example
///
/// ```ignore
/// let client = Client::connect(&config).await?;
/// let ks = Keyspace::new(&client, Some("sessions"));
///
/// // Stored under the effective key "sessions:username"
/// ks.strings().set("username", "user100", None).await?;
/// ```
#[derive(Clone)]
pub struct Keyspace {
    con: MultiplexedConnection,
    prefix: KeyPrefix,
}

impl Keyspace {
    /// Bind `prefix` to the client's connection handle.
    pub fn new(client: &Client, prefix: Option<&str>) -> Self {
        Self {
            con: client.connection(),
            prefix: KeyPrefix::from_option(prefix.map(str::to_string)),
        }
    }

    /// The bound prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_str()
    }

    /// Effective key for `key` under this keyspace's prefix.
    ///
    /// Useful when addressing keys written through this keyspace from tools
    /// that see the raw keyspace (CLI, monitors, another facade).
    pub fn effective_key(&self, key: &str) -> String {
        self.prefix.apply(key)
    }

    /// Round-trip a PING on this keyspace's connection handle.
    pub async fn ping(&self) -> Result<String> {
        let mut con = self.con.clone();
        let pong: String = redis::cmd("PING").query_async(&mut con).await?;
        Ok(pong)
    }

    // ========== Family facades ==========

    /// Scalar string operations
    pub fn strings(&self) -> Strings {
        Strings::new(self.con.clone(), self.prefix.clone())
    }

    /// List operations
    pub fn lists(&self) -> Lists {
        Lists::new(self.con.clone(), self.prefix.clone())
    }

    /// Set operations
    pub fn sets(&self) -> Sets {
        Sets::new(self.con.clone(), self.prefix.clone())
    }

    /// Hash operations
    pub fn hashes(&self) -> Hashes {
        Hashes::new(self.con.clone(), self.prefix.clone())
    }

    /// Bitmap operations
    pub fn bitmaps(&self) -> Bitmaps {
        Bitmaps::new(self.con.clone(), self.prefix.clone())
    }

    /// Cardinality estimator operations
    pub fn hyperloglog(&self) -> HyperLogLog {
        HyperLogLog::new(self.con.clone(), self.prefix.clone())
    }
}
