use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub total_slides: usize,
    #[serde(default)]
    pub start_index: isize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_slides: 5,
            start_index: 0,
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not find config directory")?
        .join("lectern");

    Ok(config_dir.join("config.yml"))
}

pub fn load_or_create_config() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = Config::default();
        let yaml =
            serde_yaml::to_string(&default_config).context("Failed to serialize default config")?;

        fs::write(&config_path, yaml).context("Failed to write default config file")?;

        eprintln!("Config file created at: {}", config_path.display());
        eprintln!("  total_slides: number of slides in the deck");
        eprintln!("  start_index: slide to open on (out-of-range values are clamped)");

        return Ok(default_config);
    }

    let config_content = fs::read_to_string(&config_path).context("Failed to read config file")?;

    let config: Config =
        serde_yaml::from_str(&config_content).context("Failed to parse config file")?;

    Ok(config)
}

#[cfg(test)]
mod test_config {
    use crate::config::Config;

    #[test]
    fn start_index_defaults_to_zero() {
        let config: Config = serde_yaml::from_str("total_slides: 8").unwrap();
        assert_eq!(config.total_slides, 8);
        assert_eq!(config.start_index, 0);
    }
}
