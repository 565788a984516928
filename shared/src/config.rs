use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use crate::countdown::{self, Countdown};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Window end {end} is before window start {start}")]
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Tracker settings. Every field is optional in the JSON source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Local time the ten nights begin.
    pub window_start: NaiveDateTime,
    /// Local time the ten nights end (inclusive).
    pub window_end: NaiveDateTime,
    /// IANA zone for "now" and "today". The device zone when unset.
    pub timezone: Option<String>,
    pub log_level: String,
}

fn default_boundary(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .unwrap_or(NaiveDateTime::MIN)
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            window_start: default_boundary(19),
            window_end: default_boundary(29),
            timezone: None,
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_end < self.window_start {
            return Err(ConfigError::InvalidWindow {
                start: self.window_start,
                end: self.window_end,
            });
        }
        Ok(())
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn countdown(&self, now: NaiveDateTime) -> Countdown {
        countdown::remaining(now, self.window_start, self.window_end)
    }
}
