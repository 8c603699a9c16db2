//! Deployment environment detection

use serde::{Deserialize, Serialize};
use std::env;

use super::StorageBackend;

/// Where the server is running; selects presets for every other section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Read `ENVIRONMENT`, then `APP_ENV`; unknown values mean development
    pub fn from_env() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Per-environment dotenv file, loaded after `.env`
    pub fn env_file(&self) -> String {
        format!(".env.{}", self)
    }

    /// Development keeps data in memory unless `STORAGE_BACKEND` says otherwise
    pub fn default_storage(&self) -> StorageBackend {
        match self {
            Environment::Development => StorageBackend::Memory,
            Environment::Staging | Environment::Production => StorageBackend::MySql,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        })
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!(" Stage ".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn test_env_file_and_storage_defaults() {
        assert_eq!(Environment::Staging.env_file(), ".env.staging");
        assert_eq!(Environment::Development.default_storage(), StorageBackend::Memory);
        assert_eq!(Environment::Production.default_storage(), StorageBackend::MySql);
    }
}
