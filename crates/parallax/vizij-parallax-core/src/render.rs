//! Render sink contract.

use crate::axis::Property;
use crate::outputs::RenderInstruction;

/// Compositing hints applied once per slide at mount.
pub const ACCELERATE_HINTS: &[(&str, &str)] = &[
    ("-webkit-transform", "translateZ(0)"),
    ("-moz-transform", "translateZ(0)"),
    ("-ms-transform", "translateZ(0)"),
    ("-o-transform", "translateZ(0)"),
    ("transform", "translateZ(0)"),
];

/// Applies computed offsets to slides.
pub trait RenderSink {
    /// Set `property` of slide `index` to `value` (px).
    fn apply(&mut self, index: usize, property: Property, value: f64);

    /// Install compositing hints on a slide. Called once per slide at mount.
    fn accelerate(&mut self, _index: usize, _hints: &[(&str, &str)]) {}

    fn apply_instruction(&mut self, instruction: &RenderInstruction) {
        self.apply(instruction.target, instruction.property, instruction.value);
    }
}

/// Sink that remembers everything it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub applied: Vec<(usize, Property, f64)>,
    pub accelerated: Vec<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written to `index`, if any.
    pub fn last_value(&self, index: usize) -> Option<f64> {
        self.applied
            .iter()
            .rev()
            .find(|(i, _, _)| *i == index)
            .map(|(_, _, v)| *v)
    }

    pub fn clear(&mut self) {
        self.applied.clear();
    }
}

impl RenderSink for RecordingSink {
    fn apply(&mut self, index: usize, property: Property, value: f64) {
        self.applied.push((index, property, value));
    }

    fn accelerate(&mut self, index: usize, _hints: &[(&str, &str)]) {
        self.accelerated.push(index);
    }
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn apply(&mut self, index: usize, property: Property, value: f64) {
        (**self).apply(index, property, value);
    }

    fn accelerate(&mut self, index: usize, hints: &[(&str, &str)]) {
        (**self).accelerate(index, hints);
    }
}
