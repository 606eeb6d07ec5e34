use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub render: RenderConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    /// Maximum submission body size in bytes
    pub max_payload_size: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory for persisted drawing records
    pub data_dir: String,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Side length of the square drawing grid. A submitted series must
    /// contain exactly grid_size * grid_size elements to render.
    pub grid_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./images".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { grid_size: 500 }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./images".to_string());

        let grid_size = std::env::var("GRID_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(500);

        let max_payload_size = std::env::var("MAX_PAYLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8 * 1024 * 1024); // 8MB

        let config = Config {
            server: ServerConfig { bind_address },
            storage: StorageConfig { data_dir },
            render: RenderConfig { grid_size },
            max_payload_size,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::ValidationError(
                "BIND_ADDRESS cannot be empty".to_string(),
            ));
        }

        if self.storage.data_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "DATA_DIR cannot be empty".to_string(),
            ));
        }

        if self.render.grid_size == 0 {
            return Err(ConfigError::ValidationError(
                "GRID_SIZE must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
