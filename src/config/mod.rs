use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// YAML dataset with classes, students and readers; built-in demo data if unset
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default = "default_grace_period")]
    pub grace_period_minutes: i64,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_secs: u64,
    #[serde(default = "default_arrival_probability")]
    pub arrival_probability: f64,
    #[serde(default = "default_live_feed_limit")]
    pub live_feed_limit: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

/// Keys a complete configuration file contains.
pub const KNOWN_KEYS: [&str; 6] = [
    "data_file",
    "grace_period_minutes",
    "tick_interval_secs",
    "arrival_probability",
    "live_feed_limit",
    "separator_char",
];

/// A grace period longer than a day makes no sense for a single class.
pub const MAX_GRACE_MINUTES: i64 = 24 * 60;
pub const MAX_TICK_SECS: u64 = 60 * 60;

fn default_grace_period() -> i64 {
    5
}
fn default_tick_interval() -> u64 {
    5
}
fn default_arrival_probability() -> f64 {
    0.3
}
fn default_live_feed_limit() -> usize {
    10
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            grace_period_minutes: default_grace_period(),
            tick_interval_secs: default_tick_interval(),
            arrival_probability: default_arrival_probability(),
            live_feed_limit: default_live_feed_limit(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfidattend")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rfidattend")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfidattend.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(0..=MAX_GRACE_MINUTES).contains(&self.grace_period_minutes) {
            return Err(AppError::Config(format!(
                "grace_period_minutes must be within 0..={} (got {})",
                MAX_GRACE_MINUTES, self.grace_period_minutes
            )));
        }
        if !(1..=MAX_TICK_SECS).contains(&self.tick_interval_secs) {
            return Err(AppError::Config(format!(
                "tick_interval_secs must be within 1..={} (got {})",
                MAX_TICK_SECS, self.tick_interval_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(AppError::Config(format!(
                "arrival_probability must be within 0..=1 (got {})",
                self.arrival_probability
            )));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.as_deref().map(expand_tilde)
    }

    /// First character of `separator_char`, '-' if empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Keys from [`KNOWN_KEYS`] absent in the raw YAML text.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let map = value.as_mapping();
        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| {
                map.map(|m| !m.contains_key(*k)).unwrap_or(true)
            })
            .collect())
    }

    /// Write the default configuration file (skipped in test mode).
    pub fn init_all(data_file: Option<String>, is_test: bool) -> AppResult<Config> {
        let config = Config {
            data_file,
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
