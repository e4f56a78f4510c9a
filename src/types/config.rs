//! Configuration for Quadro.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::QuadroResult;

/// Main configuration for Quadro.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// BigQuery connection settings.
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Query cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// HTML report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Timeout for backend queries (in seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_timeout() -> u64 {
    60
}

/// BigQuery connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// GCP project id.
    #[serde(default = "default_project_id")]
    pub project_id: String,

    /// BigQuery location.
    #[serde(default = "default_location")]
    pub location: String,

    /// Dataset queried by the example report.
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Table queried by the example report.
    #[serde(default = "default_table")]
    pub table: String,

    /// Column used by the date filter.
    #[serde(default = "default_date_column")]
    pub date_column: String,

    /// Metric column aggregated by the example report.
    #[serde(default = "default_metric_column")]
    pub metric_column: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            location: default_location(),
            dataset: default_dataset(),
            table: default_table(),
            date_column: default_date_column(),
            metric_column: default_metric_column(),
        }
    }
}

fn default_project_id() -> String {
    // Standard project id used by the template
    "ffn-dw-bigquery-prd".to_string()
}

fn default_location() -> String {
    "US".to_string()
}

fn default_dataset() -> String {
    "your_dataset".to_string()
}

fn default_table() -> String {
    "your_table".to_string()
}

fn default_date_column() -> String {
    "your_date_column".to_string()
}

fn default_metric_column() -> String {
    "your_metric".to_string()
}

/// Query cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum cache capacity (number of entries).
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,

    /// Entry time to live in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    1000
}

fn default_cache_ttl() -> u64 {
    600 // 10 minutes
}

/// HTML report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title.
    #[serde(default = "default_report_title")]
    pub title: String,

    /// Prefix for the generated file name.
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_report_title(),
            filename_prefix: default_filename_prefix(),
        }
    }
}

fn default_report_title() -> String {
    "Dashboard Report".to_string()
}

fn default_filename_prefix() -> String {
    "report".to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> QuadroResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> QuadroResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            connection: ConnectionConfig::default(),
            cache: CacheConfig::default(),
            report: ReportConfig::default(),
        }
    }

    /// Tries to load configuration from current directory or uses default.
    pub fn load_or_default() -> Self {
        Self::load("quadro.toml").unwrap_or_else(|_| Self::default_config())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
