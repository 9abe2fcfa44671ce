//! List operations (RPUSH / LRANGE / DEL)

use crate::expiry::apply_expiry;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, ToRedisArgs};
use redkit_core::{KeyPrefix, Result};
use std::time::Duration;

/// Facade for tail-append sequences.
#[derive(Clone)]
pub struct Lists {
    con: MultiplexedConnection,
    prefix: KeyPrefix,
}

impl Lists {
    pub(crate) fn new(con: MultiplexedConnection, prefix: KeyPrefix) -> Self {
        Self { con, prefix }
    }

    /// Append `values` to the tail of the list at `key`, creating it if
    /// absent, optionally expiring after `ttl`.
    pub async fn append<V>(&self, key: &str, values: &[V], ttl: Option<Duration>) -> Result<()>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        let _: usize = con.rpush(&key, values).await?;
        apply_expiry(&mut con, &key, ttl).await
    }

    /// The full list at `key`, in insertion order.
    ///
    /// A missing key reads as an empty list.
    pub async fn all(&self, key: &str) -> Result<Vec<String>> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        Ok(con.lrange(&key, 0, -1).await?)
    }

    /// Delete the list at `key`. Returns whether the key existed.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        let removed: usize = con.del(&key).await?;
        Ok(removed > 0)
    }
}
