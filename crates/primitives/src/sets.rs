//! Set operations (SADD / SMEMBERS / DEL)

use crate::expiry::apply_expiry;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, ToRedisArgs};
use redkit_core::{KeyPrefix, Result};
use std::collections::HashSet;
use std::time::Duration;

/// Facade for unordered collections of unique members.
#[derive(Clone)]
pub struct Sets {
    con: MultiplexedConnection,
    prefix: KeyPrefix,
}

impl Sets {
    pub(crate) fn new(con: MultiplexedConnection, prefix: KeyPrefix) -> Self {
        Self { con, prefix }
    }

    /// Add `members` to the set at `key`, creating it if absent, optionally
    /// expiring after `ttl`. Adding a member twice is idempotent.
    pub async fn add<V>(&self, key: &str, members: &[V], ttl: Option<Duration>) -> Result<()>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        let _: usize = con.sadd(&key, members).await?;
        apply_expiry(&mut con, &key, ttl).await
    }

    /// All members of the set at `key`.
    ///
    /// A missing key reads as an empty set.
    pub async fn members(&self, key: &str) -> Result<HashSet<String>> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        Ok(con.smembers(&key).await?)
    }

    /// Delete the set at `key`. Returns whether the key existed.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        let removed: usize = con.del(&key).await?;
        Ok(removed > 0)
    }
}
