//! Client configuration via `redkit.toml`
//!
//! A config can be built programmatically or loaded from a TOML file placed
//! next to the application. On first run, `write_default_if_missing` creates
//! a commented default file. To change settings, edit the file and restart.

use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use redkit_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed next to the application.
pub const CONFIG_FILE_NAME: &str = "redkit.toml";

/// Connection parameters for the remote store.
///
/// # Example
///
/// ```toml
/// # Server address as host:port
/// addr = "127.0.0.1:6379"
///
/// # Logical database index (SELECT)
/// db = 0
///
/// # prefix = "myapp"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server address as `"host:port"`.
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Optional AUTH credential. `None` (or an empty string) sends no AUTH.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Logical database index selected on connect (non-negative).
    #[serde(default)]
    pub db: i64,
    /// Optional default keyspace prefix for facades built from this config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

fn default_addr() -> String {
    "127.0.0.1:6379".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            password: None,
            db: 0,
            prefix: None,
        }
    }
}

impl ClientConfig {
    /// Create a config from address, credential, and logical database index.
    pub fn new(addr: impl Into<String>, password: Option<String>, db: i64) -> Self {
        Self {
            addr: addr.into(),
            password,
            db,
            prefix: None,
        }
    }

    /// Map this config onto the underlying client's connection parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if `addr` is not `host:port`.
    pub fn connection_info(&self) -> Result<ConnectionInfo> {
        let (host, port) = parse_addr(&self.addr)?;
        Ok(ConnectionInfo {
            addr: ConnectionAddr::Tcp(host, port),
            redis: RedisConnectionInfo {
                db: self.db,
                username: None,
                // An empty credential means no AUTH, same as None
                password: self.password.as_ref().filter(|p| !p.is_empty()).cloned(),
                ..Default::default()
            },
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# redkit client configuration
#
# Server address as host:port
addr = "127.0.0.1:6379"

# Logical database index selected on connect (default: 0)
db = 0

# AUTH credential (default: none)
# password = "secret"

# Default keyspace prefix, joined to every key with a colon.
# Leave unset to address keys verbatim.
# prefix = "myapp"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// address it carries is malformed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: ClientConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        // Validate the address eagerly
        config.connection_info()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Split `"host:port"` into its parts.
fn parse_addr(addr: &str) -> Result<(String, u16)> {
    let (host, port) = addr.rsplit_once(':').ok_or_else(|| Error::InvalidAddress {
        addr: addr.to_string(),
        reason: "expected host:port".to_string(),
    })?;
    if host.is_empty() {
        return Err(Error::InvalidAddress {
            addr: addr.to_string(),
            reason: "empty host".to_string(),
        });
    }
    let port: u16 = port.parse().map_err(|_| Error::InvalidAddress {
        addr: addr.to_string(),
        reason: format!("invalid port '{}'", port),
    })?;
    Ok((host.to_string(), port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.addr, "127.0.0.1:6379");
        assert_eq!(config.db, 0);
        assert!(config.password.is_none());
        assert!(config.prefix.is_none());
    }

    #[test]
    fn connection_info_maps_fields() {
        let config = ClientConfig::new("redis.internal:6380", Some("secret".to_string()), 10);
        let info = config.connection_info().unwrap();
        assert_eq!(
            info.addr,
            ConnectionAddr::Tcp("redis.internal".to_string(), 6380)
        );
        assert_eq!(info.redis.db, 10);
        assert_eq!(info.redis.password.as_deref(), Some("secret"));
        assert!(info.redis.username.is_none());
    }

    #[test]
    fn empty_password_means_no_auth() {
        let config = ClientConfig::new("127.0.0.1:6379", Some(String::new()), 0);
        let info = config.connection_info().unwrap();
        assert!(info.redis.password.is_none());
    }

    #[test]
    fn address_without_port_is_rejected() {
        let config = ClientConfig::new("localhost", None, 0);
        assert!(matches!(
            config.connection_info(),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn address_with_bad_port_is_rejected() {
        let config = ClientConfig::new("localhost:sixthousand", None, 0);
        assert!(matches!(
            config.connection_info(),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn address_with_empty_host_is_rejected() {
        let config = ClientConfig::new(":6379", None, 0);
        assert!(matches!(
            config.connection_info(),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn default_toml_parses_correctly() {
        let config: ClientConfig = toml::from_str(ClientConfig::default_toml()).unwrap();
        assert_eq!(config.addr, "127.0.0.1:6379");
        assert_eq!(config.db, 0);
    }

    #[test]
    fn from_file_with_missing_field_uses_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "db = 3\n").unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.addr, "127.0.0.1:6379");
        assert_eq!(config.db, 3);
    }

    #[test]
    fn from_file_rejects_malformed_address() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "addr = \"no-port-here\"\n").unwrap();

        assert!(matches!(
            ClientConfig::from_file(&path),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());

        ClientConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.addr, "127.0.0.1:6379");
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "addr = \"10.0.0.1:6379\"\n").unwrap();

        ClientConfig::write_default_if_missing(&path).unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.addr, "10.0.0.1:6379");
    }

    #[test]
    fn write_to_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = ClientConfig {
            addr: "redis.internal:6380".to_string(),
            password: Some("secret".to_string()),
            db: 2,
            prefix: Some("myapp".to_string()),
        };

        config.write_to_file(&path).unwrap();
        let loaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(loaded.addr, "redis.internal:6380");
        assert_eq!(loaded.password.as_deref(), Some("secret"));
        assert_eq!(loaded.db, 2);
        assert_eq!(loaded.prefix.as_deref(), Some("myapp"));
    }

    #[test]
    fn serialized_config_omits_unset_options() {
        let config = ClientConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_str.contains("password"));
        assert!(!toml_str.contains("prefix"));
    }
}
