use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3);

/// Which emulation newly detected Touch controllers get.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchProfile {
    #[default]
    Controller,
    ArticulatedHand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Seconds between polls of the connected controller mask.
    pub refresh_interval_secs: f32,
    pub axis_as_button_threshold: f32,
    /// Radial deadzone for analog channels. `None` passes raw values through.
    pub deadzone: Option<f32>,
    pub touch_profile: TouchProfile,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL.as_secs_f32(),
            axis_as_button_threshold: ovr::AXIS_AS_BUTTON_THRESHOLD,
            deadzone: None,
            touch_profile: TouchProfile::default(),
        }
    }
}

impl ProviderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded provider config from {}", path.display());
        Ok(config)
    }

    /// The refresh interval, or the default one if `refresh_interval_secs` isn't a
    /// representable duration.
    pub fn refresh_interval(&self) -> Duration {
        Duration::try_from_secs_f32(self.refresh_interval_secs)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.refresh_interval_secs > 0.0
            && Duration::try_from_secs_f32(self.refresh_interval_secs).is_ok())
        {
            return Err(ConfigError::Invalid {
                field: "refresh_interval_secs",
                reason: format!("{} is not a positive duration", self.refresh_interval_secs),
            });
        }

        if !(self.axis_as_button_threshold > 0.0 && self.axis_as_button_threshold <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "axis_as_button_threshold",
                reason: format!("{} is outside (0, 1]", self.axis_as_button_threshold),
            });
        }

        if let Some(deadzone) = self.deadzone.filter(|d| !(0.0..1.0).contains(d)) {
            return Err(ConfigError::Invalid {
                field: "deadzone",
                reason: format!("{deadzone} is outside [0, 1)"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = ProviderConfig::from_json("{}").unwrap();
        assert_eq!(config, ProviderConfig::default());
        assert_eq!(config.refresh_interval(), Duration::from_secs(3));
        assert_eq!(config.deadzone, None);
    }

    #[test]
    fn parses_fields() {
        let config = ProviderConfig::from_json(
            r#"{
                "refresh_interval_secs": 1.5,
                "axis_as_button_threshold": 0.75,
                "deadzone": 0.2,
                "touch_profile": "articulated_hand"
            }"#,
        )
        .unwrap();

        assert_eq!(config.refresh_interval_secs, 1.5);
        assert_eq!(config.axis_as_button_threshold, 0.75);
        assert_eq!(config.deadzone, Some(0.2));
        assert_eq!(config.touch_profile, TouchProfile::ArticulatedHand);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ProviderConfig::from_json(r#"{"refresh_interval_secs": 0}"#).unwrap_err();
        assert!(
            matches!(
                err,
                ConfigError::Invalid {
                    field: "refresh_interval_secs",
                    ..
                }
            ),
            "{err}"
        );

        let err = ProviderConfig::from_json(r#"{"refresh_interval_secs": 1e30}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "{err}");

        let err = ProviderConfig::from_json(r#"{"refresh_interval_secs": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "{err}");

        let err = ProviderConfig::from_json(r#"{"axis_as_button_threshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "{err}");

        let err = ProviderConfig::from_json(r#"{"deadzone": 1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "{err}");
    }

    #[test]
    fn unrepresentable_interval_falls_back() {
        for secs in [1e30, -1.0, f32::NAN] {
            let config = ProviderConfig {
                refresh_interval_secs: secs,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{secs}");
            assert_eq!(config.refresh_interval(), DEFAULT_REFRESH_INTERVAL, "{secs}");
        }
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = ProviderConfig::from_json(r#"{"haptics": true}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn missing_file() {
        let err = ProviderConfig::from_file("/nonexistent/touchbridge.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "{err}");
    }
}
