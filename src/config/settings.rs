use log::warn;

use crate::pairing::PairingPolicy;

pub const DEFAULT_DATABASE_PATH: &str = "swiss_tournament.db";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 4,
            connection_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PairingSettings {
    pub policy: PairingPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub pairing: PairingSettings,
}

impl AppConfig {
    /// Defaults overridden by `DATABASE_PATH` and `PAIRING_POLICY` when set.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.database.path = path;
        }

        if let Ok(value) = std::env::var("PAIRING_POLICY") {
            match value.parse() {
                Ok(policy) => config.pairing.policy = policy,
                Err(e) => warn!("Ignoring PAIRING_POLICY: {}", e),
            }
        }

        config
    }

    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.database.path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.database.path, DEFAULT_DATABASE_PATH);
        assert_eq!(config.database.pool_size, 4);
        assert_eq!(config.pairing.policy, PairingPolicy::Adjacent);
    }

    #[test]
    fn test_cli_path_overrides_configured_path() {
        let config = AppConfig::default().with_database_path(Some("league.db".to_string()));
        assert_eq!(config.database.path, "league.db");

        let config = config.with_database_path(None);
        assert_eq!(config.database.path, "league.db");
    }
}
