//! Server settings
//!
//! Read from `KASIR_*` environment variables on top of built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;

/// Which storage backend serves the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_address: String,
    pub backend: Backend,
    /// SQLite file, or `:memory:` for a throwaway database.
    pub database_path: String,
    /// Start the memory backend with the sample products and categories.
    pub seed: bool,
    pub log_json: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(config::Environment::with_prefix("KASIR"))
    }

    fn from_env(env: config::Environment) -> Result<Self> {
        let built = config::Config::builder()
            .set_default("bind_address", "0.0.0.0:8080")?
            .set_default("backend", "memory")?
            .set_default("database_path", "kasir.db")?
            .set_default("seed", true)?
            .set_default("log_json", false)?
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        built
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("KASIR").source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_env(env(&[])).unwrap();
        assert_eq!(settings.bind_address, "0.0.0.0:8080");
        assert_eq!(settings.backend, Backend::Memory);
        assert_eq!(settings.database_path, "kasir.db");
        assert!(settings.seed);
        assert!(!settings.log_json);
        assert_eq!(settings.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::from_env(env(&[
            ("KASIR_BACKEND", "sqlite"),
            ("KASIR_DATABASE_PATH", "/tmp/kasir/test.db"),
            ("KASIR_SEED", "false"),
            ("KASIR_BIND_ADDRESS", "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(settings.backend, Backend::Sqlite);
        assert_eq!(settings.database_path, "/tmp/kasir/test.db");
        assert!(!settings.seed);
        assert_eq!(settings.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(Settings::from_env(env(&[("KASIR_BACKEND", "postgres")])).is_err());
    }

    #[test]
    fn test_bad_bind_address() {
        let settings = Settings::from_env(env(&[("KASIR_BIND_ADDRESS", "localhost")])).unwrap();
        assert!(settings.socket_addr().is_err());
    }
}
