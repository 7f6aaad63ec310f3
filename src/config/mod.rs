//! Configuration management for `booklend`.
//!
//! Values are layered, later layers winning:
//! - Built-in defaults
//! - YAML config file (`--config` / `BOOKLEND_CONFIG`)
//! - Environment variables and command-line flags (merged by clap into [`CliOverrides`])

use std::fs;
use std::path::{Path, PathBuf};

use booklend_lib::LendingPolicy;
use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, Result};

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Settings as they appear in the YAML file; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub loan_period_days: Option<u32>,
    pub fine_per_day: Option<f64>,
    pub admin_password: Option<String>,
    pub seed_sample_data: Option<bool>,
}

impl FileConfig {
    /// Parse a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the path does not exist, `Io` on read
    /// failure, or `Yaml` if the contents don't parse.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// # Errors
    ///
    /// Returns `Yaml` if `text` is not a valid config document.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Overrides gathered from flags and environment variables.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub loan_days: Option<u32>,
    pub fine_per_day: Option<f64>,
    pub admin_password: Option<String>,
    pub no_seed: bool,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub policy: LendingPolicy,
    pub admin_password: String,
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: LendingPolicy::default(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// Resolve configuration from the file named in `overrides` (if any) and
    /// the overrides themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file can't be loaded or the merged
    /// values are invalid.
    pub fn load(overrides: &CliOverrides) -> Result<Self> {
        let file = match overrides.config_path.as_deref() {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };
        Self::resolve(&file, overrides)
    }

    /// Merge defaults, file values and overrides, then validate.
    ///
    /// # Errors
    ///
    /// Returns `Lending(Validation)` for a bad policy or `Config` for an
    /// empty admin password.
    pub fn resolve(file: &FileConfig, overrides: &CliOverrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(days) = overrides.loan_days.or(file.loan_period_days) {
            config.policy.loan_period_days = days;
        }
        if let Some(rate) = overrides.fine_per_day.or(file.fine_per_day) {
            config.policy.fine_per_day = rate;
        }
        if let Some(password) = overrides
            .admin_password
            .as_ref()
            .or(file.admin_password.as_ref())
        {
            config.admin_password.clone_from(password);
        }
        if overrides.no_seed {
            config.seed_sample_data = false;
        } else if let Some(seed) = file.seed_sample_data {
            config.seed_sample_data = seed;
        }

        config.policy.validate()?;
        if config.admin_password.trim().is_empty() {
            return Err(AppError::config("admin_password cannot be empty"));
        }

        debug!(
            loan_period_days = config.policy.loan_period_days,
            fine_per_day = config.policy.fine_per_day,
            seed_sample_data = config.seed_sample_data,
            "Resolved configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::load(&CliOverrides::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.policy.loan_period_days, 14);
        assert_eq!(config.admin_password, "admin123");
    }

    #[test]
    fn test_file_values_apply() {
        let file = FileConfig::parse(
            "loan_period_days: 21\nfine_per_day: 2.5\nadmin_password: s3cret\nseed_sample_data: false\n",
        )
        .unwrap();
        let config = Config::resolve(&file, &CliOverrides::default()).unwrap();
        assert_eq!(config.policy.loan_period_days, 21);
        assert!((config.policy.fine_per_day - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.admin_password, "s3cret");
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_overrides_beat_file() {
        let file = FileConfig::parse("loan_period_days: 21\nadmin_password: fromfile\n").unwrap();
        let overrides = CliOverrides {
            loan_days: Some(7),
            admin_password: Some("fromenv".into()),
            no_seed: true,
            ..Default::default()
        };
        let config = Config::resolve(&file, &overrides).unwrap();
        assert_eq!(config.policy.loan_period_days, 7);
        assert_eq!(config.admin_password, "fromenv");
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let overrides = CliOverrides {
            loan_days: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            Config::resolve(&FileConfig::default(), &overrides),
            Err(AppError::Lending(_))
        ));

        let file = FileConfig::parse("admin_password: '  '\n").unwrap();
        assert!(matches!(
            Config::resolve(&file, &CliOverrides::default()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_key_is_error() {
        assert!(matches!(
            FileConfig::parse("loan_days: 3\n"),
            Err(AppError::Yaml(_))
        ));
    }

    #[test]
    fn test_empty_file_is_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        let overrides = CliOverrides {
            config_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(Config::load(&overrides).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = CliOverrides {
            config_path: Some(dir.path().join("absent.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            Config::load(&overrides),
            Err(AppError::ConfigNotFound(_))
        ));
    }
}
