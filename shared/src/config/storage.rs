//! Storage backend selection

use serde::{Deserialize, Serialize};

/// Which repository implementation the server wires up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local maps; data is lost on restart
    Memory,
    /// MySQL through the connection pool
    MySql,
}

impl StorageBackend {
    /// Read `STORAGE_BACKEND`, falling back to `default` when unset or unrecognised
    pub fn from_env_or(default: StorageBackend) -> Self {
        std::env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "mem" => Ok(StorageBackend::Memory),
            "mysql" => Ok(StorageBackend::MySql),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::MySql => write!(f, "mysql"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        assert_eq!("MySQL".parse::<StorageBackend>().unwrap(), StorageBackend::MySql);
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert!("postgres".parse::<StorageBackend>().is_err());
    }
}
