//! Parallax controller: wires slide discovery, measurement and rendering
//! around one [`MotionEngine`].
//!
//! `on_scroll` / `on_resize` are meant to be called straight from host event
//! handlers. They never return an error: a bad sample or a broken layout pass
//! is logged and the engine keeps its previous state.

use log::{debug, warn};

use crate::axis::{Sampler, ScrollOffsets};
use crate::config::ParallaxConfig;
use crate::engine::MotionEngine;
use crate::error::{ParallaxError, Result};
use crate::geometry::{check_coords, GeometryProvider, SlideSource};
use crate::outputs::Outputs;
use crate::render::{RenderSink, ACCELERATE_HINTS};

/// One parallax region. Owns its slides, collaborators and engine state.
#[derive(Debug)]
pub struct Parallax<S, G, R> {
    config: ParallaxConfig,
    engine: MotionEngine,
    sampler: Sampler,
    slides: Vec<S>,
    geometry: G,
    sink: R,
}

impl<S, G, R> Parallax<S, G, R>
where
    G: GeometryProvider<S>,
    R: RenderSink,
{
    /// Validate `config`, discover and measure the slides, and install the
    /// compositing hints. Fails on an unknown motion or a short coordinate table.
    pub fn mount<Src>(
        config: ParallaxConfig,
        mut source: Src,
        mut geometry: G,
        mut sink: R,
    ) -> Result<Self>
    where
        Src: SlideSource<S>,
    {
        let validated = config.validate()?;
        let slides = source.select(config.children.as_deref());
        let coords = geometry.measure(&slides, validated.axis);
        check_coords(slides.len(), &coords)?;

        for index in 0..slides.len() {
            sink.accelerate(index, ACCELERATE_HINTS);
        }
        debug!(
            "parallax mounted: motion={} speed={} slides={}",
            validated.axis,
            validated.speed,
            slides.len()
        );

        Ok(Self {
            engine: MotionEngine::from_validated(validated, coords),
            sampler: validated.axis.sampler(),
            config,
            slides,
            geometry,
            sink,
        })
    }

    /// Scroll handler. Returns the outputs applied to the sink, or `None` when
    /// the sample was dropped.
    pub fn on_scroll(&mut self, offsets: ScrollOffsets) -> Option<&Outputs> {
        match self.try_scroll(offsets) {
            Ok(outputs) => Some(outputs),
            Err(err) => {
                warn!("parallax scroll ignored ({}): {err}", err.category());
                None
            }
        }
    }

    /// Scroll step that reports per-sample errors instead of logging them.
    pub fn try_scroll(&mut self, offsets: ScrollOffsets) -> Result<&Outputs> {
        let sample = (self.sampler)(&offsets);
        if !sample.is_finite() {
            return Err(ParallaxError::InvalidSample { value: sample });
        }
        check_coords(self.slides.len(), self.engine.coords())?;

        let outputs = self.engine.compute_offset(sample);
        for instruction in &outputs.instructions {
            self.sink.apply_instruction(instruction);
        }
        Ok(outputs)
    }

    /// Resize handler: re-measure the slides. A mismatched table is logged and
    /// the previous one kept.
    pub fn on_resize(&mut self) {
        if let Err(err) = self.try_resize() {
            warn!("parallax resize ignored ({}): {err}", err.category());
        }
    }

    pub fn try_resize(&mut self) -> Result<()> {
        let coords = self.geometry.measure(&self.slides, self.engine.axis());
        check_coords(self.slides.len(), &coords)?;
        self.engine.recompute_geometry(coords);
        Ok(())
    }

    /// Tear down, handing the slides and collaborators back to the host.
    pub fn dispose(self) -> (Vec<S>, G, R) {
        debug!("parallax disposed at slide {}", self.engine.current());
        (self.slides, self.geometry, self.sink)
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    pub fn engine(&self) -> &MotionEngine {
        &self.engine
    }

    /// Steps driven through this handle bypass the sink.
    pub fn engine_mut(&mut self) -> &mut MotionEngine {
        &mut self.engine
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }
}
