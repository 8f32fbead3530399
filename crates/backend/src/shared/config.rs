use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding the dataset JSON files
    #[serde(default = "default_data_dir")]
    pub dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 4000

[data]
dir = "data"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `PORT` and `DATA_DIR` environment variables override the loaded values.
pub fn load_config() -> anyhow::Result<Config> {
    let config = match find_config_file() {
        Some(config_path) => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
    };

    apply_overrides(
        config,
        std::env::var("PORT").ok(),
        std::env::var("DATA_DIR").ok(),
    )
}

fn find_config_file() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

fn apply_overrides(
    mut config: Config,
    port: Option<String>,
    data_dir: Option<String>,
) -> anyhow::Result<Config> {
    if let Some(port) = port {
        config.server.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT value {:?}: {}", port, e))?;
    }
    if let Some(dir) = data_dir.filter(|dir| !dir.is_empty()) {
        config.data.dir = dir;
    }
    Ok(config)
}

/// Socket address the server binds to
pub fn get_bind_address(config: &Config) -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    addr.parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address {}: {}", addr, e))
}

/// Get the dataset directory from configuration
///
/// Relative paths resolve against the executable directory when the
/// directory exists there, otherwise against the working directory.
pub fn get_data_dir(config: &Config) -> PathBuf {
    let data_dir = Path::new(&config.data.dir);

    if data_dir.is_absolute() {
        return data_dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(data_dir);
            if resolved_path.is_dir() {
                return resolved_path;
            }
        }
    }

    data_dir.to_path_buf()
}
