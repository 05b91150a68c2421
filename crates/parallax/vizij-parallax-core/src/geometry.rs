//! Slide discovery and layout measurement contracts.
//!
//! Adapters (DOM/WASM, native hosts) implement these traits and hand them to
//! [`crate::Parallax::mount`]. The core never inspects a slide handle.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::{ParallaxError, Result};

/// Finds the slides of one parallax region.
pub trait SlideSource<S> {
    /// `children` is the configured selector; `None` selects the direct children.
    fn select(&mut self, children: Option<&str>) -> Vec<S>;
}

/// Measures the static offset of every slide along an axis.
pub trait GeometryProvider<S> {
    /// One offset per slide, same order. Called at mount and on every resize.
    fn measure(&mut self, slides: &[S], axis: Axis) -> Vec<f64>;
}

/// Page-relative offset of a slide.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideRect {
    pub top: f64,
    pub left: f64,
}

impl SlideRect {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    pub fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }
}

/// Geometry provider for slides that carry their own rect.
#[derive(Copy, Clone, Debug, Default)]
pub struct LayoutTable;

impl<S: AsRef<SlideRect>> GeometryProvider<S> for LayoutTable {
    fn measure(&mut self, slides: &[S], axis: Axis) -> Vec<f64> {
        slides.iter().map(|s| s.as_ref().offset(axis)).collect()
    }
}

impl AsRef<SlideRect> for SlideRect {
    fn as_ref(&self) -> &SlideRect {
        self
    }
}

/// Static slide list; ignores the selector.
impl<S: Clone> SlideSource<S> for Vec<S> {
    fn select(&mut self, _children: Option<&str>) -> Vec<S> {
        self.clone()
    }
}

/// Check that a measured table lines up with the slide sequence.
pub fn check_coords(slide_count: usize, coords: &[f64]) -> Result<()> {
    if coords.len() != slide_count {
        return Err(ParallaxError::Geometry {
            expected: slide_count,
            actual: coords.len(),
        });
    }
    Ok(())
}
