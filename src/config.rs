use serde::{Deserialize, Deserializer, Serialize};

use crate::timeline::{Granularity, TimelineError, WeekStart};

/// Application-level constants
pub const APP_NAME: &str = "MedVault";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment overrides for [`TimelineConfig`].
pub const ENV_ROOT_GRANULARITY: &str = "MEDVAULT_ROOT_GRANULARITY";
pub const ENV_DRILL_WEEK_START: &str = "MEDVAULT_DRILL_WEEK_START";
pub const ENV_SEGMENT_WEEK_START: &str = "MEDVAULT_SEGMENT_WEEK_START";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,medvault_lib=debug"
}

/// Timeline behaviour knobs.
///
/// The drill-down list and the horizontal segment view bucket weeks
/// independently; each call site reads its own week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Level of the navigator's root breadcrumb; year or month.
    #[serde(deserialize_with = "deserialize_root")]
    pub root_granularity: Granularity,
    /// Week start for the drill-down list (locale default, Sunday).
    pub drill_week_start: WeekStart,
    /// Week start for the dense horizontal segments (Monday).
    pub segment_week_start: WeekStart,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            root_granularity: Granularity::Month,
            drill_week_start: WeekStart::Sunday,
            segment_week_start: WeekStart::Monday,
        }
    }
}

/// Rejects a root finer than month while deserializing.
fn deserialize_root<'de, D>(deserializer: D) -> Result<Granularity, D::Error>
where
    D: Deserializer<'de>,
{
    let level = Granularity::deserialize(deserializer)?;
    check_root(level).map_err(serde::de::Error::custom)
}

fn check_root(level: Granularity) -> Result<Granularity, TimelineError> {
    if level.is_root_level() {
        Ok(level)
    } else {
        Err(TimelineError::InvalidRoot(level))
    }
}

impl TimelineConfig {
    /// Checks invariants the fields cannot express on their own.
    pub fn validate(&self) -> Result<(), TimelineError> {
        check_root(self.root_granularity).map(|_| ())
    }

    /// Defaults overridden by `MEDVAULT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`. Unparseable or unsupported values are
    /// logged and the default kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ROOT_GRANULARITY) {
            match value.trim().parse::<Granularity>() {
                Ok(level) if level.is_root_level() => config.root_granularity = level,
                Ok(level) => {
                    let error = TimelineError::InvalidRoot(level);
                    tracing::warn!(key = ENV_ROOT_GRANULARITY, %error, "Ignoring override");
                }
                Err(e) => {
                    tracing::warn!(key = ENV_ROOT_GRANULARITY, error = %e, "Ignoring override");
                }
            }
        }
        if let Some(value) = lookup(ENV_DRILL_WEEK_START) {
            match value.trim().parse::<WeekStart>() {
                Ok(day) => config.drill_week_start = day,
                Err(e) => {
                    tracing::warn!(key = ENV_DRILL_WEEK_START, error = %e, "Ignoring override");
                }
            }
        }
        if let Some(value) = lookup(ENV_SEGMENT_WEEK_START) {
            match value.trim().parse::<WeekStart>() {
                Ok(day) => config.segment_week_start = day,
                Err(e) => {
                    tracing::warn!(key = ENV_SEGMENT_WEEK_START, error = %e, "Ignoring override");
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn app_name_is_medvault() {
        assert_eq!(APP_NAME, "MedVault");
    }

    #[test]
    fn defaults_keep_call_sites_apart() {
        let config = TimelineConfig::default();
        assert_eq!(config.root_granularity, Granularity::Month);
        assert_eq!(config.drill_week_start, WeekStart::Sunday);
        assert_eq!(config.segment_week_start, WeekStart::Monday);
    }

    #[test]
    fn overrides_apply() {
        let config = TimelineConfig::from_lookup(lookup(&[
            (ENV_ROOT_GRANULARITY, "year"),
            (ENV_DRILL_WEEK_START, "monday"),
        ]));
        assert_eq!(config.root_granularity, Granularity::Year);
        assert_eq!(config.drill_week_start, WeekStart::Monday);
        assert_eq!(config.segment_week_start, WeekStart::Monday);
    }

    #[test]
    fn bad_overrides_fall_back() {
        let config = TimelineConfig::from_lookup(lookup(&[
            (ENV_ROOT_GRANULARITY, "document"),
            (ENV_SEGMENT_WEEK_START, "wednesday"),
        ]));
        assert_eq!(config, TimelineConfig::default());
    }

    #[test]
    fn finer_root_from_env_falls_back() {
        for level in ["week", "day"] {
            let config = TimelineConfig::from_lookup(lookup(&[(ENV_ROOT_GRANULARITY, level)]));
            assert_eq!(config.root_granularity, Granularity::Month, "{level}");
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn finer_root_from_json_is_rejected() {
        for level in ["week", "day", "document"] {
            let json = format!(r#"{{"root_granularity":"{level}"}}"#);
            let err = serde_json::from_str::<TimelineConfig>(&json).unwrap_err();
            assert!(err.to_string().contains("year or month"), "{err}");
        }
        let config: TimelineConfig =
            serde_json::from_str(r#"{"root_granularity":"year"}"#).unwrap();
        assert_eq!(config.root_granularity, Granularity::Year);
    }

    #[test]
    fn validate_flags_hand_built_root() {
        let config = TimelineConfig {
            root_granularity: Granularity::Day,
            ..TimelineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(TimelineError::InvalidRoot(Granularity::Day))
        );
        assert!(TimelineConfig::default().validate().is_ok());
    }

    #[test]
    fn deserializes_partial_json() {
        let config: TimelineConfig =
            serde_json::from_str(r#"{"drill_week_start":"monday"}"#).unwrap();
        assert_eq!(config.drill_week_start, WeekStart::Monday);
        assert_eq!(config.root_granularity, Granularity::Month);
    }
}
