/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use study_playback::PlayerOptions;

/// Default config file looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    /// Player defaults handed to clients and used by `soundcheck`
    #[serde(default)]
    pub playback: PlayerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` (which must exist) or, when `None`, `config.toml` if
    /// present. `STUDY_`-prefixed variables override the file, with `__`
    /// between section and key: `STUDY_SERVER__PORT=9000`,
    /// `STUDY_PLAYBACK__FADE_IN_MS=3000`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("STUDY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .host
            .parse::<IpAddr>()
            .map_err(|_| ServerError::Config(format!("Invalid host address: {}", self.server.host)))?;

        let volume = self.playback.volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(ServerError::Config(format!(
                "Playback volume must be between 0.0 and 1.0, got {}",
                volume
            )));
        }

        if self.playback.load_timeout_ms == Some(0) {
            return Err(ServerError::Config(
                "Playback load timeout must be positive (omit it to wait indefinitely)".to_string(),
            ));
        }

        Ok(())
    }

    /// Address to bind, after `validate`
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|_| ServerError::Config(format!("Invalid host address: {}", self.server.host)))?;
        Ok(SocketAddr::from((ip, self.server.port)))
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}
