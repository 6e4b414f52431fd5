use core_config::database::DatabaseConfig;
use core_config::server::ServerConfig;
use core_config::{ConfigError, Environment, FromEnv};

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    /// Absent means the in-memory plant store is used.
    pub database: Option<DatabaseConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env_optional(),
        })
    }
}
