//! Cardinality estimator operations (PFADD / PFCOUNT / PFMERGE)
//!
//! HyperLogLogs approximate the number of distinct items added to them
//! within the store's error bound; counts are estimates, never exact.

use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, ToRedisArgs};
use redkit_core::{KeyPrefix, Result};

/// Facade for probabilistic cardinality estimators.
#[derive(Clone)]
pub struct HyperLogLog {
    con: MultiplexedConnection,
    prefix: KeyPrefix,
}

impl HyperLogLog {
    pub(crate) fn new(con: MultiplexedConnection, prefix: KeyPrefix) -> Self {
        Self { con, prefix }
    }

    /// Add `items` to the estimator at `key`, creating it if absent.
    ///
    /// Returns the store's reply as-is: 1 if the estimate changed, 0
    /// otherwise.
    pub async fn add<V>(&self, key: &str, items: &[V]) -> Result<i64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        Ok(con.pfadd(&key, items).await?)
    }

    /// Estimated cardinality of the union of the estimators at `keys`.
    ///
    /// With a single key this is that estimator's count; missing keys count
    /// as empty.
    pub async fn count(&self, keys: &[&str]) -> Result<u64> {
        let keys: Vec<String> = keys.iter().map(|k| self.prefix.apply(k)).collect();
        let mut con = self.con.clone();
        Ok(con.pfcount(keys).await?)
    }

    /// Union the estimators at `sources` into the one at `dest`, creating
    /// `dest` if absent.
    pub async fn merge(&self, dest: &str, sources: &[&str]) -> Result<()> {
        let dest = self.prefix.apply(dest);
        let sources: Vec<String> = sources.iter().map(|k| self.prefix.apply(k)).collect();
        let mut con = self.con.clone();
        let _: () = con.pfmerge(&dest, sources).await?;
        Ok(())
    }
}
