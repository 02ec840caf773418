use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::domain::errors::ConfigError;

/// Scroll animation mode, string forms match the CSSOM `scroll-behavior` keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum ScrollMotion {
    #[strum(serialize = "smooth")]
    #[serde(rename = "smooth")]
    Smooth,

    #[strum(serialize = "instant")]
    #[serde(rename = "instant")]
    Instant,

    #[strum(serialize = "auto")]
    #[serde(rename = "auto")]
    Auto,
}

/// Page behavior settings, overridable from the host page via `configure()`.
///
/// Every field has a default, so a partial JS object is accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    /// Selector matching notification banners scheduled for auto-dismissal
    pub alert_selector: String,
    /// How long a banner stays fully visible before fading, in ms
    pub alert_visible_ms: u32,
    /// Fade duration before the banner is removed from layout, in ms
    pub alert_fade_ms: u32,
    /// Blocking dialog text shown when required fields are empty
    pub required_field_message: String,
    /// Border color applied to empty required fields
    pub danger_border: String,
    /// Border color restored on filled required fields
    pub default_border: String,
    pub scroll_motion: ScrollMotion,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_selector: ".alert".to_string(),
            alert_visible_ms: 5_000,
            alert_fade_ms: 300,
            required_field_message: "Please fill in all required fields.".to_string(),
            danger_border: "var(--danger-color)".to_string(),
            default_border: "var(--border-color)".to_string(),
            scroll_motion: ScrollMotion::Smooth,
        }
    }
}

impl UiConfig {
    /// Reject settings that would make a behavior silently inert
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alert_selector.trim().is_empty() {
            return Err(ConfigError::InvalidParameter(
                "alertSelector must not be empty".to_string(),
            ));
        }
        if self.alert_fade_ms == 0 {
            return Err(ConfigError::InvalidParameter(
                "alertFadeMs must be greater than zero".to_string(),
            ));
        }
        if self.required_field_message.trim().is_empty() {
            return Err(ConfigError::InvalidParameter(
                "requiredFieldMessage must not be empty".to_string(),
            ));
        }
        if self.danger_border.trim().is_empty() || self.default_border.trim().is_empty() {
            return Err(ConfigError::InvalidParameter(
                "border tokens must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_conventions() {
        let config = UiConfig::default();
        assert_eq!(config.alert_selector, ".alert");
        assert_eq!(config.alert_visible_ms, 5_000);
        assert_eq!(config.alert_fade_ms, 300);
        assert_eq!(config.danger_border, "var(--danger-color)");
        assert_eq!(config.default_border, "var(--border-color)");
        assert_eq!(config.scroll_motion, ScrollMotion::Smooth);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_camel_case_object_fills_the_rest_with_defaults() {
        let config: UiConfig =
            serde_json::from_str(r#"{"alertVisibleMs": 1500, "scrollMotion": "auto"}"#).unwrap();
        assert_eq!(config.alert_visible_ms, 1_500);
        assert_eq!(config.scroll_motion, ScrollMotion::Auto);
        assert_eq!(config.alert_selector, ".alert");
    }

    #[test]
    fn empty_selector_is_rejected() {
        let config = UiConfig { alert_selector: "  ".to_string(), ..UiConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_fade_is_rejected() {
        let config = UiConfig { alert_fade_ms: 0, ..UiConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn scroll_motion_round_trips_through_strings() {
        use std::str::FromStr;
        assert_eq!(ScrollMotion::Smooth.to_string(), "smooth");
        assert_eq!(ScrollMotion::from_str("instant").unwrap(), ScrollMotion::Instant);
        assert!(ScrollMotion::from_str("bouncy").is_err());
    }
}
