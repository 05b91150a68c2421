//! Motion engine: current-slide state machine and scroll → offset transform.
//!
//! Each call to [`MotionEngine::compute_offset`] runs three steps in order:
//! 1. movement: the active slide follows the scroll (only while a next slide exists),
//! 2. advance: crossing `next - before_block` pins the outgoing slide and moves `current` forward,
//! 3. retreat: scrolling back to the active slide's anchor pins it at 0 and moves `current` back.
//!
//! Steps 2 and 3 are independent and may both fire for the same sample.

use log::debug;

use crate::axis::{Axis, Property};
use crate::config::{ParallaxConfig, ValidatedConfig, BEFORE_BLOCK};
use crate::error::Result;
use crate::outputs::{InstructionKind, MotionEvent, Outputs, RenderInstruction};

/// Owns the coordinate table and the current-slide index of one parallax region.
#[derive(Clone, Debug)]
pub struct MotionEngine {
    axis: Axis,
    property: Property,
    speed: f64,
    before_block: f64,
    coords: Vec<f64>,
    /// In `[0, coords.len()]`; `coords.len()` means past the last slide.
    current: usize,
    outputs: Outputs,
}

impl MotionEngine {
    /// Create an engine over `coords` (one static offset per slide) with the default lead distance.
    pub fn new(axis: Axis, speed: f64, coords: Vec<f64>) -> Self {
        Self::from_validated(
            ValidatedConfig {
                axis,
                speed,
                before_block: BEFORE_BLOCK,
            },
            coords,
        )
    }

    /// Validate `cfg` and build an engine. Unknown motions fail here, before any sample.
    pub fn from_config(cfg: &ParallaxConfig, coords: Vec<f64>) -> Result<Self> {
        let validated = cfg.validate()?;
        Ok(Self::from_validated(validated, coords))
    }

    /// Build from an already-validated config; cannot fail.
    pub fn from_validated(cfg: ValidatedConfig, coords: Vec<f64>) -> Self {
        Self {
            axis: cfg.axis,
            property: cfg.axis.property(),
            speed: cfg.speed,
            before_block: cfg.before_block,
            coords,
            current: 0,
            outputs: Outputs::default(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn before_block(&self) -> f64 {
        self.before_block
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Number of slides in the coordinate table.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Outputs of the most recent call to `compute_offset`.
    pub fn last_outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Return to the first slide.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Replace the coordinate table after a layout change. `current` is kept,
    /// clamped to the new slide count.
    pub fn recompute_geometry(&mut self, coords: Vec<f64>) {
        self.coords = coords;
        if self.current > self.coords.len() {
            self.current = self.coords.len();
        }
        debug!(
            "parallax geometry recomputed: {} slides, current={}",
            self.coords.len(),
            self.current
        );
    }

    /// Process one scroll sample and return the render instructions it produces.
    pub fn compute_offset(&mut self, scroll_pos: f64) -> &Outputs {
        self.outputs.clear();
        if !scroll_pos.is_finite() {
            return &self.outputs;
        }

        let current_pos = self.coords.get(self.current).copied();
        let next_pos = self.coords.get(self.current + 1).copied();

        // Movement: the last slide stays where layout put it.
        if let (Some(current_pos), Some(_)) = (current_pos, next_pos) {
            let value = self.transform(scroll_pos, current_pos);
            self.outputs.push_instruction(RenderInstruction {
                target: self.current,
                property: self.property,
                value,
                kind: InstructionKind::Move,
            });
        }

        // Advance
        if let (Some(current_pos), Some(next_pos)) = (current_pos, next_pos) {
            if scroll_pos >= next_pos - self.before_block {
                let stop = self.stop_point(current_pos, next_pos);
                self.pin(stop);
                self.advance();
            }
        }

        // Retreat, judged against the anchor read before any advance.
        if let Some(current_pos) = current_pos {
            if scroll_pos <= current_pos {
                self.pin(0.0);
                self.retreat();
            }
        }

        &self.outputs
    }

    /// Vertical motion measures distance from the slide's anchor; horizontal
    /// motion uses the absolute scroll distance.
    fn transform(&self, scroll_pos: f64, current_pos: f64) -> f64 {
        match self.axis {
            Axis::Vertical => (scroll_pos - current_pos) * self.speed,
            Axis::Horizontal => scroll_pos * self.speed,
        }
    }

    fn stop_point(&self, current_pos: f64, next_pos: f64) -> f64 {
        match self.axis {
            Axis::Vertical => next_pos - current_pos - self.before_block,
            Axis::Horizontal => next_pos - self.before_block,
        }
    }

    /// Slide frozen by a boundary crossing: `current` when vertical, `current - 1`
    /// when horizontal. `None` when that index names no slide.
    fn pin_target(&self) -> Option<usize> {
        let idx = match self.axis {
            Axis::Vertical => Some(self.current),
            Axis::Horizontal => self.current.checked_sub(1),
        }?;
        (idx < self.coords.len()).then_some(idx)
    }

    fn pin(&mut self, value: f64) {
        if let Some(target) = self.pin_target() {
            self.outputs.push_instruction(RenderInstruction {
                target,
                property: self.property,
                value,
                kind: InstructionKind::Pin,
            });
        }
    }

    fn advance(&mut self) {
        if self.current < self.coords.len() {
            let from = self.current;
            self.current += 1;
            debug!("parallax advanced {from} -> {}", self.current);
            self.outputs.push_event(MotionEvent::Advanced {
                from,
                to: self.current,
            });
        }
    }

    fn retreat(&mut self) {
        if self.current > 0 {
            let from = self.current;
            self.current -= 1;
            debug!("parallax retreated {from} -> {}", self.current);
            self.outputs.push_event(MotionEvent::Retreated {
                from,
                to: self.current,
            });
        }
    }
}
