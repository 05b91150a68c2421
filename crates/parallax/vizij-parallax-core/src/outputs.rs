//! Output contracts from the motion engine.
//!
//! Outputs carry the style writes produced by one scroll sample, addressed by
//! slide index, and a separate list of index transitions. Adapters apply the
//! instructions to the host and may forward the events.

use serde::{Deserialize, Serialize};

use crate::axis::Property;

/// Whether an instruction tracks the scroll or freezes a slide.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructionKind {
    /// Active slide follows the scroll position.
    Move,
    /// Slide is frozen at a fixed offset on a boundary crossing.
    Pin,
}

/// Set `property` of slide `target` to `value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderInstruction {
    pub target: usize,
    pub property: Property,
    pub value: f64,
    pub kind: InstructionKind,
}

/// Index transitions taken while processing a sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionEvent {
    Advanced { from: usize, to: usize },
    Retreated { from: usize, to: usize },
}

/// Outputs returned by MotionEngine::compute_offset().
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub instructions: Vec<RenderInstruction>,
    #[serde(default)]
    pub events: Vec<MotionEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.instructions.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_instruction(&mut self, instruction: RenderInstruction) {
        self.instructions.push(instruction);
    }

    #[inline]
    pub fn push_event(&mut self, event: MotionEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty() && self.events.is_empty()
    }

    /// The scroll-tracking instruction, if one was emitted.
    pub fn movement(&self) -> Option<&RenderInstruction> {
        self.instructions
            .iter()
            .find(|i| i.kind == InstructionKind::Move)
    }

    /// Pin instructions in emission order.
    pub fn pins(&self) -> impl Iterator<Item = &RenderInstruction> {
        self.instructions
            .iter()
            .filter(|i| i.kind == InstructionKind::Pin)
    }
}
