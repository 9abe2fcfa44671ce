//! Scalar string operations (SET / GET / DEL)

use crate::expiry::apply_expiry;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, ToRedisArgs};
use redkit_core::{Error, KeyPrefix, Result};
use std::time::Duration;

/// Facade for scalar values.
///
/// Reads return owned strings; writes accept anything the underlying client
/// can serialize as a command argument.
#[derive(Clone)]
pub struct Strings {
    con: MultiplexedConnection,
    prefix: KeyPrefix,
}

impl Strings {
    pub(crate) fn new(con: MultiplexedConnection, prefix: KeyPrefix) -> Self {
        Self { con, prefix }
    }

    /// Set `key` to `value`, optionally expiring after `ttl`.
    ///
    /// The expiration is issued as a separate EXPIRE after the SET; the two
    /// round trips are not atomic.
    pub async fn set<V>(&self, key: &str, value: V, ttl: Option<Duration>) -> Result<()>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        let _: () = con.set(&key, value).await?;
        apply_expiry(&mut con, &key, ttl).await
    }

    /// Get the value at `key`.
    ///
    /// A missing key is an [`Error::KeyNotFound`] failure, mapped from the
    /// store's nil reply.
    pub async fn get(&self, key: &str) -> Result<String> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        let value: Option<String> = con.get(&key).await?;
        value.ok_or_else(|| Error::KeyNotFound(key))
    }

    /// Delete `key`. Returns whether the key existed.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        let removed: usize = con.del(&key).await?;
        Ok(removed > 0)
    }
}
