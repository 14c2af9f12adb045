//! Input configuration.
//!
//! Plain structs with sensible defaults. Games that want to tune timing or
//! the finger pool load them from JSON via `from_json`.

use crate::geom::DEFAULT_HIT_RADIUS;
use serde::{Deserialize, Serialize};

/// Upper bound on simultaneously tracked fingers.
pub const MAX_FINGERS_LIMIT: usize = 32;

// ─── Pointer ──────────────────────────────────────────────────────────────

/// Per-pointer timing and hit-area settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointerConfig {
    /// Window in ms during which a press counts as "just pressed". Default: **200**.
    pub just_pressed_rate: f64,
    /// Window in ms during which a release counts as "just released". Default: **200**.
    pub just_released_rate: f64,
    /// Radius of the circle each pointer covers. Default: **1.0**.
    pub hit_radius: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            just_pressed_rate: 200.0,
            just_released_rate: 200.0,
            hit_radius: DEFAULT_HIT_RADIUS,
        }
    }
}

impl PointerConfig {
    /// Check that every value is usable.
    ///
    /// # Errors
    /// Names the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if !self.just_pressed_rate.is_finite() || self.just_pressed_rate < 0.0 {
            return Err(format!(
                "justPressedRate must be a non-negative number, got {}",
                self.just_pressed_rate
            ));
        }
        if !self.just_released_rate.is_finite() || self.just_released_rate < 0.0 {
            return Err(format!(
                "justReleasedRate must be a non-negative number, got {}",
                self.just_released_rate
            ));
        }
        if !self.hit_radius.is_finite() || self.hit_radius <= 0.0 {
            return Err(format!(
                "hitRadius must be a positive number, got {}",
                self.hit_radius
            ));
        }
        Ok(())
    }
}

// ─── Input ────────────────────────────────────────────────────────────────

/// Settings for the whole input manager.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputConfig {
    pub pointer: PointerConfig,
    /// Size of the finger pool. Default: **10**.
    pub max_fingers: usize,
    /// Route mouse events to the mouse pointer. Default: **true**.
    pub mouse_enabled: bool,
    /// Route touch events to the finger pool. Default: **true**.
    pub touch_enabled: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pointer: PointerConfig::default(),
            max_fingers: 10,
            mouse_enabled: true,
            touch_enabled: true,
        }
    }
}

impl InputConfig {
    /// Parse a JSON config; missing keys take their defaults.
    ///
    /// # Errors
    /// Returns the JSON error or the first validation failure.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid input config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pointer.validate()?;
        if self.max_fingers == 0 || self.max_fingers > MAX_FINGERS_LIMIT {
            return Err(format!(
                "maxFingers must be between 1 and {MAX_FINGERS_LIMIT}, got {}",
                self.max_fingers
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_gives_defaults() {
        let config = InputConfig::from_json("{}").unwrap();
        assert_eq!(config, InputConfig::default());
    }

    #[test]
    fn partial_pointer_section_keeps_other_defaults() {
        let config = InputConfig::from_json(r#"{"pointer":{"justPressedRate":50}}"#).unwrap();
        assert_eq!(config.pointer.just_pressed_rate, 50.0);
        assert_eq!(config.pointer.just_released_rate, 200.0);
        assert_eq!(config.max_fingers, 10);
    }

    #[test]
    fn rejects_negative_rate() {
        let err = InputConfig::from_json(r#"{"pointer":{"justReleasedRate":-1}}"#).unwrap_err();
        assert!(err.contains("justReleasedRate"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_zero_radius() {
        let config = PointerConfig {
            hit_radius: 0.0,
            ..PointerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_oversized_finger_pool() {
        let err = InputConfig::from_json(r#"{"maxFingers":64}"#).unwrap_err();
        assert!(err.contains("maxFingers"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = InputConfig::from_json("{maxFingers:").unwrap_err();
        assert!(err.starts_with("invalid input config"));
    }
}
