// src/config.rs

//! Run configuration for a migration.
//!
//! Every setting has a default, so the tool runs without a config file. A
//! TOML file can override the provenance tag stamped into migrated rows, the
//! starting job id, and the sentinel defaults.

use crate::allocator::DEFAULT_ID_OFFSET;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Migration run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Provenance tag stamped into created_by/modified_by columns
    #[serde(default = "default_created_by")]
    pub created_by: String,

    /// First id assigned to a migrated job
    #[serde(default = "default_id_offset")]
    pub id_offset: i64,

    /// Group assigned to jobs without a box membership
    #[serde(default = "default_group")]
    pub default_group: String,

    /// Retry interval stamped into every migrated job
    #[serde(default = "default_retry_interval")]
    pub retry_interval_seconds: i64,

    /// File name of the summary report, written beside the SQL artifact
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_created_by() -> String {
    "MIGRATION".to_string()
}

fn default_id_offset() -> i64 {
    DEFAULT_ID_OFFSET
}

fn default_group() -> String {
    "DEFAULT".to_string()
}

fn default_retry_interval() -> i64 {
    300
}

fn default_report_file() -> String {
    "migration_report.json".to_string()
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            created_by: default_created_by(),
            id_offset: default_id_offset(),
            default_group: default_group(),
            retry_interval_seconds: default_retry_interval(),
            report_file: default_report_file(),
        }
    }
}

impl MigrationConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.created_by.is_empty() {
            return Err(Error::Config("created_by must not be empty".to_string()));
        }
        if self.id_offset < 0 {
            return Err(Error::Config(format!(
                "id_offset must be non-negative, got {}",
                self.id_offset
            )));
        }
        if self.retry_interval_seconds < 0 {
            return Err(Error::Config(format!(
                "retry_interval_seconds must be non-negative, got {}",
                self.retry_interval_seconds
            )));
        }
        if self.report_file.is_empty() {
            return Err(Error::Config("report_file must not be empty".to_string()));
        }
        Ok(())
    }
}
