//! Application configuration management.
//!
//! All values come from the process environment with fixed fallbacks, so a
//! bare `s3-uploader` invocation talks to a local MinIO on default
//! credentials.

use serde::{Deserialize, Deserializer};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// S3 connection settings.
    pub s3: S3Settings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// S3 connection settings.
///
/// Read from `S3_ENDPOINT`, `S3_ACCESS_KEY`, `S3_SECRET_KEY` and
/// `S3_USE_SSL`. Every value has a fallback, so loading succeeds with an
/// empty environment.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Settings {
    /// Storage endpoint, host and port without a scheme.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Access key ID.
    #[serde(default = "default_access_key")]
    pub access_key: String,
    /// Secret access key.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Whether to use TLS. Only the literal string `"true"` enables it;
    /// anything else falls back to plain HTTP rather than erroring.
    #[serde(default, deserialize_with = "literal_true")]
    pub use_ssl: bool,
}

fn default_endpoint() -> String {
    "localhost:9000".to_string()
}

fn default_access_key() -> String {
    "minioadmin".to_string()
}

fn default_secret_key() -> String {
    "minioadmin".to_string()
}

fn literal_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw == "true")
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a supplied value cannot be interpreted, e.g. a
    /// non-numeric `SERVER_PORT`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let server = config::Config::builder()
            .add_source(config::Environment::with_prefix("SERVER"))
            .build()?
            .try_deserialize()?;

        let s3 = config::Config::builder()
            .add_source(config::Environment::with_prefix("S3"))
            .build()?
            .try_deserialize()?;

        Ok(Self { server, s3 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S3_VARS: [&str; 4] = ["S3_ENDPOINT", "S3_ACCESS_KEY", "S3_SECRET_KEY", "S3_USE_SSL"];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        S3_VARS.iter().map(|k| (*k, None)).collect()
    }

    #[test]
    fn test_s3_defaults_when_env_unset() {
        temp_env::with_vars(unset_all(), || {
            let config = AppConfig::load().expect("load should succeed");
            assert_eq!(config.s3.endpoint, "localhost:9000");
            assert_eq!(config.s3.access_key, "minioadmin");
            assert_eq!(config.s3.secret_key, "minioadmin");
            assert!(!config.s3.use_ssl);
        });
    }

    #[test]
    fn test_s3_values_from_env() {
        temp_env::with_vars(
            [
                ("S3_ENDPOINT", Some("minio.internal:9000")),
                ("S3_ACCESS_KEY", Some("key")),
                ("S3_SECRET_KEY", Some("secret")),
                ("S3_USE_SSL", Some("true")),
            ],
            || {
                let config = AppConfig::load().expect("load should succeed");
                assert_eq!(config.s3.endpoint, "minio.internal:9000");
                assert_eq!(config.s3.access_key, "key");
                assert_eq!(config.s3.secret_key, "secret");
                assert!(config.s3.use_ssl);
            },
        );
    }

    #[test]
    fn test_use_ssl_requires_literal_true() {
        for value in ["TRUE", "1", "yes", "false", ""] {
            temp_env::with_vars([("S3_USE_SSL", Some(value))], || {
                let config = AppConfig::load().expect("load should succeed");
                assert!(!config.s3.use_ssl, "{value:?} must not enable TLS");
            });
        }
    }

    #[test]
    fn test_server_defaults() {
        temp_env::with_vars(
            [("SERVER_HOST", None::<&str>), ("SERVER_PORT", None)],
            || {
                let config = AppConfig::load().expect("load should succeed");
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_server_from_env() {
        temp_env::with_vars(
            [("SERVER_HOST", Some("127.0.0.1")), ("SERVER_PORT", Some("9090"))],
            || {
                let config = AppConfig::load().expect("load should succeed");
                assert_eq!(config.server.host, "127.0.0.1");
                assert_eq!(config.server.port, 9090);
            },
        );
    }
}
