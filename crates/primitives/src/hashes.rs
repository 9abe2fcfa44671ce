//! Hash operations (HSET / HGETALL / DEL)

use crate::expiry::apply_expiry;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, ToRedisArgs};
use redkit_core::{KeyPrefix, Result};
use std::collections::HashMap;
use std::time::Duration;

/// Facade for field-value mappings.
#[derive(Clone)]
pub struct Hashes {
    con: MultiplexedConnection,
    prefix: KeyPrefix,
}

impl Hashes {
    pub(crate) fn new(con: MultiplexedConnection, prefix: KeyPrefix) -> Self {
        Self { con, prefix }
    }

    /// Set the given field-value `entries` on the hash at `key`, optionally
    /// expiring after `ttl`.
    ///
    /// Fields named in `entries` are overwritten; fields not named are left
    /// untouched.
    pub async fn set<F, V>(&self, key: &str, entries: &[(F, V)], ttl: Option<Duration>) -> Result<()>
    where
        F: ToRedisArgs + Send + Sync,
        V: ToRedisArgs + Send + Sync,
    {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        let _: () = con.hset_multiple(&key, entries).await?;
        apply_expiry(&mut con, &key, ttl).await
    }

    /// The full field-value mapping of the hash at `key`.
    ///
    /// A missing key reads as an empty mapping.
    pub async fn all(&self, key: &str) -> Result<HashMap<String, String>> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        Ok(con.hgetall(&key).await?)
    }

    /// Delete the hash at `key`. Returns whether the key existed.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        let removed: usize = con.del(&key).await?;
        Ok(removed > 0)
    }
}
