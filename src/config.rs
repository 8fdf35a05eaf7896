//! Institution-specific scheduling parameters
//!
//! The number of periods in a school day and the credit ceiling differ
//! between institutions, so both live here instead of in the parser.
//! Configuration files are YAML:
//!
//! ```yaml
//! max_period: 14
//! credit_limit: 25
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, ScheduleError};

/// Default number of periods in a day.
pub const DEFAULT_MAX_PERIOD: u8 = 14;

/// Default credit ceiling for one schedule.
pub const DEFAULT_CREDIT_LIMIT: u32 = 25;

/// Upper bound accepted for `max_period`; keeps range expansion small.
pub const PERIOD_CEILING: u8 = 32;

/// Scheduling parameters shared by the parser and the selected set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
#[serde(default)]
pub struct ScheduleConfig {
    /// Highest period index in a day. Periods run from 1 to this value.
    pub max_period: u8,
    /// Maximum total credits, or `None` for no ceiling.
    pub credit_limit: Option<u32>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { max_period: DEFAULT_MAX_PERIOD, credit_limit: Some(DEFAULT_CREDIT_LIMIT) }
    }
}

impl ScheduleConfig {
    /// Create a validated configuration.
    pub fn new(max_period: u8, credit_limit: Option<u32>) -> Result<Self> {
        let config = Self { max_period, credit_limit };
        config.validate()?;
        Ok(config)
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_period == 0 || self.max_period > PERIOD_CEILING {
            return Err(ScheduleError::config_error(format!(
                "max_period must be within 1..={}, got {}",
                PERIOD_CEILING, self.max_period
            )));
        }
        Ok(())
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ScheduleConfig = serde_yaml_ng::from_str(yaml)
            .map_err(|e| ScheduleError::parse_error("ScheduleConfig deserialization", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ScheduleError::file_error(path, e))?;
        let config = Self::from_yaml_str(&yaml)?;
        debug!(
            path = %path.display(),
            max_period = config.max_period,
            credit_limit = ?config.credit_limit,
            "Loaded schedule configuration"
        );
        Ok(config)
    }
}
