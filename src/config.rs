use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval; submission outcomes are picked up once per tick
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Delay before a simulated submission is acknowledged (default: 3000)
    #[serde(default = "default_submission_delay")]
    pub delay_ms: u64,
}

fn default_submission_delay() -> u64 {
    3000
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_submission_delay(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for logs and other runtime files, relative to cwd unless absolute
    #[serde(default = "default_state_dir")]
    pub state: String,
}

fn default_state_dir() -> String {
    ".garage-register".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state: default_state_dir(),
        }
    }
}

impl Config {
    /// User config in ~/.config/garage-register/
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("garage-register").join("config.toml"))
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so the wizard runs without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables, e.g. GARAGE_REGISTER__SUBMISSION__DELAY_MS=500
        builder = builder.add_source(
            config::Environment::with_prefix("GARAGE_REGISTER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Save config to the user config location
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path().context("No user config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        std::fs::write(path, self.to_toml()?).context("Failed to write config file")?;
        tracing::info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission.delay_ms)
    }

    /// Get absolute path to state directory
    pub fn state_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.paths.state);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Serializes tests that call `Config::load`, which reads the process env
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.submission_delay(), Duration::from_secs(3));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.to_file);
        assert_eq!(config.paths.state, ".garage-register");
    }

    #[test]
    fn test_load_with_explicit_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "[submission]\ndelay_ms = 500\n").unwrap();

        let _lock = ENV_LOCK.lock().unwrap();
        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.submission.delay_ms, 500);
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_env_var_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "[submission]\ndelay_ms = 500\n").unwrap();

        let _lock = ENV_LOCK.lock().unwrap();
        std::env::set_var("GARAGE_REGISTER__SUBMISSION__DELAY_MS", "750");
        let loaded = Config::load(Some(path.to_str().unwrap()));
        std::env::remove_var("GARAGE_REGISTER__SUBMISSION__DELAY_MS");

        let config = loaded.unwrap();
        assert_eq!(config.submission.delay_ms, 750);
        assert_eq!(config.submission_delay(), Duration::from_millis(750));
    }

    #[test]
    fn test_single_underscore_env_var_is_ignored() {
        let _lock = ENV_LOCK.lock().unwrap();
        std::env::set_var("GARAGE_REGISTER_SUBMISSION__DELAY_MS", "750");
        let loaded = Config::load(None);
        std::env::remove_var("GARAGE_REGISTER_SUBMISSION__DELAY_MS");

        assert_ne!(loaded.unwrap().submission.delay_ms, 750);
    }

    #[test]
    fn test_partial_sections_fill_from_defaults() {
        let config: Config = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.to_file);
        assert_eq!(config.submission.delay_ms, 3000);
    }

    #[test]
    fn test_save_round_trips_through_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.ui.tick_rate_ms = 100;
        config.save_to(&path).unwrap();

        let loaded: Config = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_absolute_state_path_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.state = temp_dir.path().to_string_lossy().to_string();

        assert_eq!(config.state_path(), temp_dir.path());
        assert_eq!(config.logs_path(), temp_dir.path().join("logs"));
    }

    #[test]
    fn test_relative_state_path_is_under_cwd() {
        let config = Config::default();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(config.state_path(), cwd.join(".garage-register"));
    }
}
