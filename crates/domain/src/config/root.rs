use serde::{Deserialize, Serialize};

use super::aws::AwsConfig;
use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::tags::TagsConfig;

const LOCAL_CONFIG_PATH: &str = "ec2-dns-sync.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ec2-dns-sync/config.toml";

/// Main configuration structure for ec2-dns-sync
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// AWS client configuration
    #[serde(default)]
    pub aws: AwsConfig,

    /// Instance tag keys that carry managed DNS names
    #[serde(default)]
    pub tags: TagsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ec2-dns-sync.toml in current directory
    /// 3. /etc/ec2-dns-sync/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
        if let Some(region) = overrides.region {
            self.aws.region = Some(region);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let public = self.tags.public_dns_key.trim();
        let private = self.tags.private_dns_key.trim();

        if public.is_empty() || private.is_empty() {
            return Err(ConfigError::Validation(
                "DNS tag keys cannot be empty".to_string(),
            ));
        }
        if public == private {
            return Err(ConfigError::Validation(format!(
                "Public and private DNS tag keys must differ (both are '{}')",
                public
            )));
        }
        if matches!(self.aws.region.as_deref(), Some(r) if r.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "AWS region cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub region: Option<String>,
}
