//! Scroll axis, the style property it drives, and sample extraction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParallaxError;

/// Single scroll direction tracked by one engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Style property a render instruction writes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Top,
    Left,
}

/// Raw scroll position reported by the host for one scroll/resize event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffsets {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub left: f64,
}

impl ScrollOffsets {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Sample-extraction strategy, chosen once per axis.
pub type Sampler = fn(&ScrollOffsets) -> f64;

fn sample_top(offsets: &ScrollOffsets) -> f64 {
    offsets.top
}

fn sample_left(offsets: &ScrollOffsets) -> f64 {
    offsets.left
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        }
    }

    /// Property written for slides moving along this axis.
    pub fn property(self) -> Property {
        match self {
            Axis::Vertical => Property::Top,
            Axis::Horizontal => Property::Left,
        }
    }

    /// scrollTop for vertical motion, scrollLeft for horizontal.
    pub fn sampler(self) -> Sampler {
        match self {
            Axis::Vertical => sample_top,
            Axis::Horizontal => sample_left,
        }
    }
}

impl FromStr for Axis {
    type Err = ParallaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Axis::Vertical),
            "horizontal" => Ok(Axis::Horizontal),
            other => Err(ParallaxError::UnknownMotion {
                motion: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Property {
    /// CSS property name.
    pub fn as_str(self) -> &'static str {
        match self {
            Property::Top => "top",
            Property::Left => "left",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
