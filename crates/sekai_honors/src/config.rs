//! Layered application configuration.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`sekai_honors.toml` shipped with the crate)
//! 2. User config in home directory (`~/.config/sekai_honors/sekai_honors.toml`)
//! 3. User config in current directory (`./sekai_honors.toml`)
//! 4. Environment variables prefixed `SEKAI_HONORS__` (e.g. `SEKAI_HONORS__DATABASE_URL`)
//!
//! `DATABASE_URL` is used when no database URL is configured.

use config::{Config, Environment, File, FileFormat};
use sekai_honors_core::Server;
use sekai_honors_error::ConfigError;
use sekai_honors_sync::SyncConfig;
use serde::{Deserialize, Serialize};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../sekai_honors.toml");

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use sekai_honors::HonorsConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HonorsConfig::load()?;
/// let url = config.database_url()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HonorsConfig {
    /// PostgreSQL connection string
    #[serde(default)]
    pub database_url: Option<String>,

    /// Servers synced when none are named on the command line
    #[serde(default)]
    pub default_servers: Vec<String>,

    /// Upstream fetch settings
    #[serde(default)]
    pub sync: SyncConfig,
}

impl HonorsConfig {
    /// Load configuration from every layer.
    ///
    /// User config files are optional and silently skipped if not found.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/sekai_honors/sekai_honors.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("sekai_honors").required(false))
            .add_source(Environment::with_prefix("SEKAI_HONORS").separator("__"));

        Self::build(builder)
    }

    /// Load only the bundled defaults layered under one TOML document.
    pub fn from_toml(overrides: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))
    }

    /// The configured database URL, falling back to `DATABASE_URL`.
    pub fn database_url(&self) -> Result<String, ConfigError> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .ok_or_else(|| {
                ConfigError::new("No database URL: set database_url or DATABASE_URL")
            })
    }

    /// Parse `default_servers` into server tags.
    pub fn default_servers(&self) -> Result<Vec<Server>, ConfigError> {
        self.default_servers
            .iter()
            .map(|tag| {
                tag.parse::<Server>().map_err(|_| {
                    ConfigError::new(format!(
                        "Invalid server '{}' in default_servers. Valid options: {:?}",
                        tag,
                        Server::all().iter().map(Server::tag).collect::<Vec<_>>()
                    ))
                })
            })
            .collect()
    }
}
