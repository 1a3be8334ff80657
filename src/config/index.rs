//! Pattern index configuration.
//!
//! The section type itself lives next to the index; this module only validates it.

use super::{ConfigResult, Validate};
use crate::data_structures::PatternIndexConfig;
use crate::error::config::ConfigError;

impl Validate for PatternIndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "index.max_depth".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }
        Ok(())
    }
}
