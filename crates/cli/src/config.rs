use anyhow::{Context, Result};
use askmom_core::DecisionFlag;
use orchestrator::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::debug;

pub const CONFIG_FILE: &str = "ask-mom.toml";

/// Settings stored in ask-mom.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Whether mom agrees to buy the phone
    #[serde(default = "default_mom_happy")]
    pub mom_happy: bool,
    /// How long each phone request takes to settle, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
}

fn default_mom_happy() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mom_happy: default_mom_happy(),
            latency_ms: 0,
        }
    }
}

impl DemoConfig {
    /// Read the config file, falling back to defaults when it does not exist.
    pub async fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    pub async fn write(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, unhappy: bool, latency_ms: Option<u64>) -> Self {
        if unhappy {
            self.mom_happy = false;
        }
        if let Some(latency_ms) = latency_ms {
            self.latency_ms = latency_ms;
        }
        self
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_mood(DecisionFlag::from(self.mom_happy))
            .with_latency(Duration::from_millis(self.latency_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_nonexistent_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = DemoConfig::read(&temp_dir.path().join(CONFIG_FILE))
            .await
            .unwrap();
        assert_eq!(config, DemoConfig::default());
        assert!(config.mom_happy);
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let config = DemoConfig {
            mom_happy: false,
            latency_ms: 120,
        };
        config.write(&path).await.unwrap();

        let loaded = DemoConfig::read(&path).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_missing_keys_take_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "latency_ms = 5\n").unwrap();

        let config = DemoConfig::read(&path).await.unwrap();
        assert!(config.mom_happy);
        assert_eq!(config.latency_ms, 5);
    }

    #[tokio::test]
    async fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "mom_happy = \"sometimes\"\n").unwrap();

        let err = DemoConfig::read(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::default().with_overrides(true, Some(40));
        assert!(!config.mom_happy);
        assert_eq!(config.latency_ms, 40);

        let untouched = DemoConfig::default().with_overrides(false, None);
        assert_eq!(untouched, DemoConfig::default());
    }

    #[test]
    fn test_engine_config() {
        let engine = DemoConfig {
            mom_happy: false,
            latency_ms: 250,
        }
        .engine_config();
        assert_eq!(engine.mood, DecisionFlag::unhappy());
        assert_eq!(engine.latency, Duration::from_millis(250));
    }
}
