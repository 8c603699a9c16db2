//! Tracing subscriber settings

use serde::{Deserialize, Serialize};

use super::Environment;

/// How the binary sets up `tracing-subscriber`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Level for the workspace crates; `RUST_LOG` replaces the whole filter when set
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Print file and line with every event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
                source_location: true,
            },
            Environment::Staging | Environment::Production => Self {
                level: "info".to_string(),
                format: LogFormat::Compact,
                source_location: false,
            },
        }
    }

    /// Environment preset with `LOG_LEVEL` and `LOG_FORMAT` overrides
    pub fn from_env(env: Environment) -> Self {
        let mut config = Self::for_environment(env);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.level = level.to_lowercase();
        }
        if let Some(format) = std::env::var("LOG_FORMAT").ok().and_then(|f| f.parse().ok()) {
            config.format = format;
        }
        config
    }

    /// `EnvFilter` directive: our crates at `level`, request spans at info,
    /// sqlx statements only when debugging
    pub fn filter_directive(&self) -> String {
        let sqlx = match self.level.as_str() {
            "trace" | "debug" => "debug",
            _ => "warn",
        };
        format!(
            "warn,ta_api={level},ta_core={level},ta_infra={level},tracing_actix_web=info,sqlx={sqlx}",
            level = self.level,
            sqlx = sqlx,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, for terminals
    #[default]
    Pretty,
    /// One line per event
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}
