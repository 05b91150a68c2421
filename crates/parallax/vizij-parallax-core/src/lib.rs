//! Vizij Parallax Core (engine-agnostic)
//!
//! Converts scroll samples into per-slide offsets so a sequence of slides scrolls
//! past the viewport at a custom rate and snaps into place at block boundaries.
//! The crate owns the state machine only; element discovery, layout measurement
//! and style writes are supplied by adapters through the traits in [`geometry`]
//! and [`render`].

pub mod axis;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod outputs;
pub mod parallax;
pub mod render;

// Re-exports for consumers (adapters)
pub use axis::{Axis, Property, Sampler, ScrollOffsets};
pub use config::{ParallaxConfig, ValidatedConfig, BEFORE_BLOCK};
pub use engine::MotionEngine;
pub use error::{ParallaxError, Result};
pub use geometry::{GeometryProvider, LayoutTable, SlideRect, SlideSource};
pub use outputs::{InstructionKind, MotionEvent, Outputs, RenderInstruction};
pub use parallax::Parallax;
pub use render::{RecordingSink, RenderSink, ACCELERATE_HINTS};
