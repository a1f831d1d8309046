//! Configuration management for fitness-tracker.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-level configuration file
pub const PROJECT_CONFIG_FILE: &str = ".fitness-tracker.toml";

/// Prefix for environment overrides (FITNESS_TRACKER__OUTPUT__FORMAT=json)
pub const ENV_PREFIX: &str = "FITNESS_TRACKER";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TrackerConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    ///
    /// An explicit file, when given, takes the place of the user config.
    pub fn load(
        project_root: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.fitness-tracker.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/fitness-tracker/config.toml) or --config
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                if let Some(user_config) = user_config_path() {
                    if user_config.exists() {
                        builder = builder.add_source(File::from(user_config).required(false));
                    }
                }
            }
        }

        // 4. Environment variables (FITNESS_TRACKER__*)
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Location of the per-user configuration file
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "fitness-tracker", "fitness-tracker")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One message line per training
    #[default]
    Text,
    /// JSON array of summaries
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON reports
    #[serde(default)]
    pub pretty: bool,
}

/// Input configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Packages file used when none is given on the command line
    #[serde(default)]
    pub packages: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.pretty);
        assert!(config.input.packages.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty.toml");
        fs::write(&empty, "").unwrap();

        let config = TrackerConfig::load(Some(dir.path()), Some(empty.as_path())).unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.pretty);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_project_config_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[output]\nformat = \"json\"\npretty = true\n\n[input]\npackages = \"week.txt\"\n",
        )
        .unwrap();
        let empty = dir.path().join("empty.toml");
        fs::write(&empty, "").unwrap();

        let config = TrackerConfig::load(Some(dir.path()), Some(empty.as_path())).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert_eq!(config.input.packages, Some(PathBuf::from("week.txt")));
    }

    #[test]
    fn test_explicit_config_overrides_project() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[logging]\nlevel = \"info\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = TrackerConfig::load(Some(dir.path()), Some(explicit.as_path())).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = TrackerConfig::load(None, Some(Path::new("/nonexistent/tracker.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_config_value() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("bad.toml");
        fs::write(&explicit, "[output]\nformat = \"xml\"\n").unwrap();

        let err = TrackerConfig::load(None, Some(explicit.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
