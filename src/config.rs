// src/config.rs

use std::time::Duration;
use tracing::warn;

use crate::logging::PROJECT_NAME;

const DEFAULT_SCAN_STEP_MS: u64 = 800;
const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;

/// Timing knobs for the simulated tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Pause before each privacy-scan checkpoint.
    pub scan_step_delay: Duration,
    /// Pause before a harassment analysis returns.
    pub analysis_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_step_delay: Duration::from_millis(DEFAULT_SCAN_STEP_MS),
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
        }
    }
}

impl Config {
    /// Reads `<PROJECT>_SCAN_STEP_MS` and `<PROJECT>_ANALYSIS_DELAY_MS`.
    pub fn from_env() -> Self {
        let scan_key = format!("{}_SCAN_STEP_MS", PROJECT_NAME.as_str());
        let analysis_key = format!("{}_ANALYSIS_DELAY_MS", PROJECT_NAME.as_str());
        Self {
            scan_step_delay: millis_or_default(&scan_key, std::env::var(&scan_key).ok(), DEFAULT_SCAN_STEP_MS),
            analysis_delay: millis_or_default(&analysis_key, std::env::var(&analysis_key).ok(), DEFAULT_ANALYSIS_DELAY_MS),
        }
    }
}

fn millis_or_default(key: &str, raw: Option<String>, default: u64) -> Duration {
    let millis = match raw {
        None => default,
        Some(value) => value.trim().parse::<u64>().unwrap_or_else(|_| {
            warn!(key, value = %value, default, "Ignoring unparseable delay, using default.");
            default
        }),
    };
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_timings() {
        let config = Config::default();
        assert_eq!(config.scan_step_delay, Duration::from_millis(800));
        assert_eq!(config.analysis_delay, Duration::from_millis(2000));
    }

    #[test]
    fn valid_values_override_defaults() {
        assert_eq!(millis_or_default("K", Some(" 15 ".into()), 800), Duration::from_millis(15));
    }

    #[test]
    fn missing_or_garbage_values_fall_back() {
        assert_eq!(millis_or_default("K", None, 800), Duration::from_millis(800));
        assert_eq!(millis_or_default("K", Some("fast".into()), 800), Duration::from_millis(800));
        assert_eq!(millis_or_default("K", Some("-1".into()), 800), Duration::from_millis(800));
    }
}
