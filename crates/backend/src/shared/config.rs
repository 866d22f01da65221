use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FixturesConfig {
    /// JSON file with services, accounts and sales; empty means embedded
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    pub dir: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: "dist".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {}", self.host, self.port, e))
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[fixtures]
path = ""

[static_files]
dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve a configured path; relative paths are taken from the executable directory
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(configured)
}

/// Fixture file to load, if one is configured
pub fn get_fixtures_path(config: &Config) -> Option<PathBuf> {
    let configured = config.fixtures.path.trim();
    if configured.is_empty() {
        None
    } else {
        Some(resolve_path(configured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dir, "dist");
        assert!(get_fixtures_path(&config).is_none());
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:3000".parse().unwrap()
        );
    }

    #[test]
    fn test_optional_sections_default() {
        let config: Config = toml::from_str("[server]\nhost = \"0.0.0.0\"\nport = 8080\n").unwrap();
        assert_eq!(config.fixtures.path, "");
        assert_eq!(config.static_files.dir, "dist");
    }

    #[test]
    fn test_absolute_fixture_path_is_kept() {
        let config: Config = toml::from_str(
            "[server]\nhost = \"0.0.0.0\"\nport = 8080\n[fixtures]\npath = \"/tmp/sales.json\"\n",
        )
        .unwrap();
        assert_eq!(get_fixtures_path(&config), Some(PathBuf::from("/tmp/sales.json")));
    }
}
