//! Connection factory for redkit
//!
//! Turns a [`ClientConfig`] into a handle capable of issuing commands
//! against the remote store. No validation, retry, or pooling happens here;
//! protocol negotiation, AUTH, and SELECT are performed by the underlying
//! client during connection setup.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;

pub use config::{ClientConfig, CONFIG_FILE_NAME};

use redis::aio::MultiplexedConnection;
use redkit_core::Result;
use tracing::info;

/// Handle to the remote store.
///
/// Wraps the underlying client's multiplexed connection: cheap to clone and
/// safe to share across tasks, so one handle serves any number of concurrent
/// logical operations. redkit adds no pooling, timeout, or reconnect logic
/// of its own.
#[derive(Clone)]
pub struct Client {
    con: MultiplexedConnection,
    addr: String,
    db: i64,
}

impl Client {
    /// Connect to the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`redkit_core::Error::InvalidAddress`] for a malformed
    /// `host:port`, and passes through any connection or handshake failure
    /// from the underlying client.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let info = config.connection_info()?;
        let client = redis::Client::open(info)?;
        let con = client.get_multiplexed_async_connection().await?;
        info!(addr = %config.addr, db = config.db, "connected");
        Ok(Self {
            con,
            addr: config.addr.clone(),
            db: config.db,
        })
    }

    /// Round-trip a PING and return the server's response.
    pub async fn ping(&self) -> Result<String> {
        let mut con = self.con.clone();
        let pong: String = redis::cmd("PING").query_async(&mut con).await?;
        Ok(pong)
    }

    /// Address this client was opened against.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Logical database index selected on this connection.
    pub fn db(&self) -> i64 {
        self.db
    }

    /// Clone of the underlying connection handle, for facade use.
    pub fn connection(&self) -> MultiplexedConnection {
        self.con.clone()
    }
}
