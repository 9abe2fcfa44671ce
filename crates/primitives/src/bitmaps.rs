//! Bitmap operations (SETBIT / GETBIT)
//!
//! Offsets are zero-based and unbounded on the high end; the store grows the
//! bitmap as needed. Clearing a bit is a SETBIT to zero.

use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use redkit_core::{KeyPrefix, Result};

/// Facade for individual bits at arbitrary offsets.
#[derive(Clone)]
pub struct Bitmaps {
    con: MultiplexedConnection,
    prefix: KeyPrefix,
}

impl Bitmaps {
    pub(crate) fn new(con: MultiplexedConnection, prefix: KeyPrefix) -> Self {
        Self { con, prefix }
    }

    /// Set the bit at `offset` to `bit`. Returns the previous bit value.
    pub async fn set(&self, key: &str, offset: usize, bit: bool) -> Result<bool> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        Ok(con.setbit(&key, offset, bit).await?)
    }

    /// The bit at `offset`.
    ///
    /// Bits never written read as zero.
    pub async fn get(&self, key: &str, offset: usize) -> Result<bool> {
        let key = self.prefix.apply(key);
        let mut con = self.con.clone();
        Ok(con.getbit(&key, offset).await?)
    }

    /// Clear the bit at `offset` (SETBIT to zero). Returns the previous bit
    /// value.
    pub async fn clear(&self, key: &str, offset: usize) -> Result<bool> {
        self.set(key, offset, false).await
    }
}
