use std::time::Duration;

use serde::Deserialize;

use crate::debounce::SCROLL_DEBOUNCE_RATE;
use crate::errors::WizardSettingsError;
use crate::header::PHONE_BREAKPOINT;
use crate::offsets::CONTENT_TOP_OFFSET;

/// Tunables of the wizard selection core.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WizardSettings {
    /// Scroll debounce window in milliseconds.
    pub scroll_debounce_ms: u64,
    pub content_top_offset: f32,
    /// Widths at or below this value switch the header to phone mode.
    pub phone_breakpoint: f32,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            scroll_debounce_ms: SCROLL_DEBOUNCE_RATE.as_millis() as u64,
            content_top_offset: CONTENT_TOP_OFFSET,
            phone_breakpoint: PHONE_BREAKPOINT,
        }
    }
}

impl WizardSettings {
    /// Parse settings from JSON, filling missing fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, WizardSettingsError> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), WizardSettingsError> {
        if self.scroll_debounce_ms == 0 {
            return Err(WizardSettingsError::Validation {
                message: String::from("scroll_debounce_ms must be positive"),
            });
        }

        if !self.content_top_offset.is_finite() || self.content_top_offset < 0.0
        {
            return Err(WizardSettingsError::Validation {
                message: format!(
                    "content_top_offset must be a non-negative number, got {}",
                    self.content_top_offset
                ),
            });
        }

        if !self.phone_breakpoint.is_finite() || self.phone_breakpoint < 0.0 {
            return Err(WizardSettingsError::Validation {
                message: format!(
                    "phone_breakpoint must be a non-negative number, got {}",
                    self.phone_breakpoint
                ),
            });
        }

        Ok(())
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let settings =
            WizardSettings::from_json("{}").expect("defaults should parse");

        assert_eq!(settings, WizardSettings::default());
        assert_eq!(settings.scroll_debounce(), Duration::from_millis(25));
        assert_eq!(settings.content_top_offset, 80.0);
        assert_eq!(settings.phone_breakpoint, 559.0);
    }

    #[test]
    fn partial_object_overrides_fields() {
        let settings = WizardSettings::from_json(
            r#"{ "scroll_debounce_ms": 60, "content_top_offset": 12.5 }"#,
        )
        .expect("settings should parse");

        assert_eq!(settings.scroll_debounce(), Duration::from_millis(60));
        assert_eq!(settings.content_top_offset, 12.5);
        assert_eq!(settings.phone_breakpoint, PHONE_BREAKPOINT);
    }

    #[test]
    fn negative_offset_is_rejected() {
        let err = WizardSettings::from_json(r#"{ "content_top_offset": -1 }"#)
            .expect_err("negative offset must fail");

        assert!(matches!(err, WizardSettingsError::Validation { .. }));
    }

    #[test]
    fn zero_debounce_is_rejected() {
        let err = WizardSettings::from_json(r#"{ "scroll_debounce_ms": 0 }"#)
            .expect_err("zero debounce must fail");

        assert!(matches!(err, WizardSettingsError::Validation { .. }));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = WizardSettings::from_json("{ scroll_debounce_ms: }")
            .expect_err("malformed JSON must fail");

        assert!(matches!(err, WizardSettingsError::Json(_)));
    }
}
