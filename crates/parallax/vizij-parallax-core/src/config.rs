//! Parallax configuration.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::{ParallaxError, Result};

/// Lead distance (px) before a boundary at which a transition triggers.
pub const BEFORE_BLOCK: f64 = 20.0;

/// Host-facing configuration. `motion` stays a string so an unknown value is
/// reported as a configuration error when the engine is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// "vertical" or "horizontal".
    pub motion: String,
    /// Offset multiplier. Zero or non-finite falls back to 1.
    pub speed: f64,
    /// Selector for the tracked slides; `None` means direct children.
    pub children: Option<String>,
    /// Lead distance before a boundary, see [`BEFORE_BLOCK`].
    pub before_block: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            motion: Axis::Vertical.as_str().to_string(),
            speed: 1.0,
            children: None,
            before_block: BEFORE_BLOCK,
        }
    }
}

/// Configuration after axis resolution and speed normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatedConfig {
    pub axis: Axis,
    pub speed: f64,
    pub before_block: f64,
}

impl ParallaxConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_motion(mut self, motion: impl Into<String>) -> Self {
        self.motion = motion.into();
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_children(mut self, children: impl Into<String>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Resolve the axis and normalize numeric fields.
    pub fn validate(&self) -> Result<ValidatedConfig> {
        let axis: Axis = self.motion.parse()?;
        if !self.before_block.is_finite() || self.before_block < 0.0 {
            return Err(ParallaxError::configuration(format!(
                "before_block must be a finite non-negative distance, got {}",
                self.before_block
            )));
        }
        Ok(ValidatedConfig {
            axis,
            speed: normalize_speed(self.speed),
            before_block: self.before_block,
        })
    }
}

fn normalize_speed(speed: f64) -> f64 {
    if speed == 0.0 || !speed.is_finite() {
        1.0
    } else {
        speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plugin_defaults() {
        let cfg = ParallaxConfig::default();
        assert_eq!(cfg.motion, "vertical");
        assert_eq!(cfg.speed, 1.0);
        assert_eq!(cfg.children, None);
        assert_eq!(cfg.before_block, BEFORE_BLOCK);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = ParallaxConfig::from_json(r#"{ "motion": "horizontal" }"#).unwrap();
        assert_eq!(cfg.motion, "horizontal");
        assert_eq!(cfg.speed, 1.0);
        assert_eq!(cfg.before_block, BEFORE_BLOCK);

        let cfg = ParallaxConfig::from_json(r#"{ "speed": 0.5, "children": ".slide" }"#).unwrap();
        assert_eq!(cfg.motion, "vertical");
        assert_eq!(cfg.speed, 0.5);
        assert_eq!(cfg.children.as_deref(), Some(".slide"));
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        let err = ParallaxConfig::from_json("{ motion: ").unwrap_err();
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn zero_and_non_finite_speed_fall_back_to_one() {
        for speed in [0.0, f64::NAN, f64::INFINITY] {
            let v = ParallaxConfig::default().with_speed(speed).validate().unwrap();
            assert_eq!(v.speed, 1.0);
        }
        let v = ParallaxConfig::default().with_speed(-0.5).validate().unwrap();
        assert_eq!(v.speed, -0.5);
    }

    #[test]
    fn unknown_motion_fails_validation() {
        let err = ParallaxConfig::default()
            .with_motion("diagonal")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ParallaxError::UnknownMotion { .. }));
    }

    #[test]
    fn negative_before_block_is_rejected() {
        let cfg = ParallaxConfig {
            before_block: -1.0,
            ..ParallaxConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ParallaxError::Configuration { .. })
        ));
    }
}
