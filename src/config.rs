use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use recipebox_suggest::{DEFAULT_TOP_K, MacroTargets, SuggestOptions};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Ranking defaults. `?limit=` on the suggestions endpoint overrides `top_k`.
#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionsConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default)]
    pub targets: MacroTargets,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            targets: MacroTargets::default(),
        }
    }
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl SuggestionsConfig {
    pub fn options(&self) -> SuggestOptions {
        SuggestOptions {
            top_k: self.top_k,
            targets: self.targets,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy `DATABASE_URL`
    /// 2. Environment variables (RECIPEBOX__DATABASE__URL, etc.)
    /// 3. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:recipebox.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("RECIPEBOX")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.suggestions.top_k < 1 {
            return Err("Suggestions top_k must be at least 1".to_string());
        }

        let targets = &self.suggestions.targets;
        for (name, value) in [
            ("protein", targets.protein),
            ("carbohydrates", targets.carbohydrates),
            ("fat", targets.fat),
            ("fiber", targets.fiber),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("Suggestion target {name} must be a non-negative number"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            observability: ObservabilityConfig::default(),
            suggestions: SuggestionsConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = valid_config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_top_k() {
        let mut config = valid_config();
        config.suggestions.top_k = 0;

        assert_eq!(
            config.validate(),
            Err("Suggestions top_k must be at least 1".to_string())
        );
    }

    #[test]
    fn test_validation_negative_target() {
        let mut config = valid_config();
        config.suggestions.targets.fat = -1.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_suggestion_options_follow_config() {
        let mut config = valid_config();
        config.suggestions.top_k = 8;
        config.suggestions.targets.protein = 30.0;

        let options = config.suggestions.options();
        assert_eq!(options.top_k, 8);
        assert_eq!(options.targets.protein, 30.0);
        assert_eq!(options.targets.carbohydrates, 50.0);
    }
}
