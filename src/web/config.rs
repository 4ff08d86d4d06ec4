use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Folder the telemetry fetcher writes `veh.*` files into.
    #[serde(default = "default_cache_folder")]
    pub folder: PathBuf,
    /// Report the cached tracking angles instead of the reference look angle.
    #[serde(default)]
    pub use_tracking_file: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            folder: default_cache_folder(),
            use_tracking_file: false,
        }
    }
}

fn default_cache_folder() -> PathBuf {
    PathBuf::from("./cache")
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let config = Config::from_str(
            "web:\n  bind: 127.0.0.1:9000\ncache:\n  folder: /var/cache/iss\n  use_tracking_file: true\n",
        )
        .unwrap();

        assert_eq!(config.web.bind, "127.0.0.1:9000");
        assert_eq!(config.cache.folder, PathBuf::from("/var/cache/iss"));
        assert!(config.cache.use_tracking_file);
    }

    #[test]
    fn defaults() {
        let config = Config::from_str("web:\n  bind: 0.0.0.0:1\n").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:1");
        assert_eq!(config.cache.folder, PathBuf::from("./cache"));
        assert!(!config.cache.use_tracking_file);

        let config = Config::from_str("cache:\n  use_tracking_file: true\n").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.cache.folder, PathBuf::from("./cache"));
    }

    #[test]
    fn errors() {
        assert!(matches!(
            Config::from_str("cache:\n  use_tracking_file: maybe\n"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            Config::from_file("/nonexistent/iss-o-mat.yaml"),
            Err(ConfigError::Io(_))
        ));
    }
}
