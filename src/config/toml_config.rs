use crate::utils::error::{LoveError, Result};
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "love-connect.toml";
pub const URL_ENV: &str = "SUPABASE_URL";
pub const API_KEY_ENV: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub remote: Option<RemoteConfig>,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_photo_bucket")]
    pub photo_bucket: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_state_file")]
    pub state_file: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_photo_bucket() -> String {
    "photos".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_state_file() -> String {
    ".love-connect/planner.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時使用預設值，遠端設定可由環境變數補上
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("{} not found, using defaults", path.display());
            Self::default()
        };

        if config.remote.is_none() {
            config.remote = RemoteConfig::from_env();
        }
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LoveError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUPABASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LoveError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn remote(&self) -> Result<&RemoteConfig> {
        validate_required_field("remote", &self.remote)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(remote) = &self.remote {
            remote.validate()?;
        }

        validate_path("planner.state_file", &self.planner.state_file)?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(LoveError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Valid levels: {}", valid_levels.join(", ")),
            });
        }

        Ok(())
    }
}

impl RemoteConfig {
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(URL_ENV).ok()?;
        let api_key = std::env::var(API_KEY_ENV).ok()?;
        Some(Self {
            url,
            api_key,
            photo_bucket: default_photo_bucket(),
            timeout_seconds: default_timeout_seconds(),
        })
    }
}

impl Validate for RemoteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("remote.url", &self.url)?;

        if self.api_key.trim().is_empty() || self.api_key.starts_with("${") {
            return Err(LoveError::InvalidConfigValueError {
                field: "remote.api_key".to_string(),
                value: self.api_key.clone(),
                reason: format!("Set api_key or the {} environment variable", API_KEY_ENV),
            });
        }

        if self.photo_bucket.trim().is_empty() {
            return Err(LoveError::InvalidConfigValueError {
                field: "remote.photo_bucket".to_string(),
                value: self.photo_bucket.clone(),
                reason: "Bucket name cannot be empty".to_string(),
            });
        }

        validate_positive_number("remote.timeout_seconds", self.timeout_seconds, 1)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
