//! Two-step expiration for TTL-bearing writes.
//!
//! A write with a TTL is issued as the family's write command followed by a
//! separate EXPIRE. The two round trips are not atomic: a process crash or
//! network failure between them leaves the key written without the intended
//! expiration. EXPIRE is the one expiration primitive shared by every
//! command family, so the same helper serves them all.

use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use redkit_core::Result;
use std::time::Duration;

/// Apply `ttl` to `key` when present.
///
/// Durations are rounded down to whole seconds (EXPIRE granularity).
pub(crate) async fn apply_expiry(
    con: &mut MultiplexedConnection,
    key: &str,
    ttl: Option<Duration>,
) -> Result<()> {
    if let Some(ttl) = ttl {
        let _: bool = con.expire(key, ttl.as_secs() as i64).await?;
    }
    Ok(())
}
