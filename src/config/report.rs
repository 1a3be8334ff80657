//! Report configuration module.

use super::ConfigResult;
use super::Validate;
use serde::{Deserialize, Serialize};

/// Output format for match results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `<query> - <result>` lines
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format
    pub format: ReportFormat,

    /// Whether plain output starts with a header
    pub header: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            header: true,
        }
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
