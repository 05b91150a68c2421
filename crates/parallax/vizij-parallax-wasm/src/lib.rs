use js_sys::{Array, Function, Reflect};
use log::warn;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use vizij_parallax_core::{
    Axis, GeometryProvider, MotionEngine, Outputs, Parallax, ParallaxConfig, Property, RenderSink,
    ScrollOffsets, SlideSource,
};

mod logging;

pub use logging::set_log_level;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn parse_config(config: JsValue) -> Result<ParallaxConfig, JsError> {
    if jsvalue_is_undefined_or_null(&config) {
        Ok(ParallaxConfig::default())
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))
    }
}

fn to_js(out: &Outputs) -> Result<JsValue, JsError> {
    swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
}

/// Look up `host[name]` as a function.
fn host_fn(host: &JsValue, name: &str) -> Result<Option<Function>, JsError> {
    let val = Reflect::get(host, &JsValue::from_str(name))
        .map_err(|e| JsError::new(&format!("host.{name} lookup failed: {e:?}")))?;
    if jsvalue_is_undefined_or_null(&val) {
        return Ok(None);
    }
    val.dyn_into::<Function>()
        .map(Some)
        .map_err(|_| JsError::new(&format!("host.{name} is not a function")))
}

fn required_fn(host: &JsValue, name: &str) -> Result<Function, JsError> {
    host_fn(host, name)?.ok_or_else(|| JsError::new(&format!("host.{name} is required")))
}

/// `host.select(children: string | null) -> Element[]`
struct JsSource {
    host: JsValue,
    f: Function,
}

impl SlideSource<JsValue> for JsSource {
    fn select(&mut self, children: Option<&str>) -> Vec<JsValue> {
        let arg = children.map(JsValue::from_str).unwrap_or(JsValue::NULL);
        match self.f.call1(&self.host, &arg) {
            Ok(val) if Array::is_array(&val) => Array::from(&val).to_vec(),
            Ok(_) => {
                warn!("host.select did not return an array");
                Vec::new()
            }
            Err(e) => {
                warn!("host.select threw: {e:?}");
                Vec::new()
            }
        }
    }
}

/// `host.measure(slides: Element[], axis: "vertical" | "horizontal") -> number[]`
struct JsGeometry {
    host: JsValue,
    f: Function,
}

impl GeometryProvider<JsValue> for JsGeometry {
    fn measure(&mut self, slides: &[JsValue], axis: Axis) -> Vec<f64> {
        let arr: Array = slides.iter().collect();
        let res = self
            .f
            .call2(&self.host, &arr, &JsValue::from_str(axis.as_str()));
        match res {
            Ok(val) => swb::from_value::<Vec<f64>>(val).unwrap_or_else(|e| {
                warn!("host.measure returned a non-numeric table: {e}");
                Vec::new()
            }),
            Err(e) => {
                warn!("host.measure threw: {e:?}");
                Vec::new()
            }
        }
    }
}

/// `host.apply(index, property, value)` and optional `host.accelerate(index, hints)`.
struct JsSink {
    host: JsValue,
    apply: Function,
    accelerate: Option<Function>,
}

impl RenderSink for JsSink {
    fn apply(&mut self, index: usize, property: Property, value: f64) {
        let res = self.apply.call3(
            &self.host,
            &JsValue::from_f64(index as f64),
            &JsValue::from_str(property.as_str()),
            &JsValue::from_f64(value),
        );
        if let Err(e) = res {
            warn!("host.apply threw for slide {index}: {e:?}");
        }
    }

    fn accelerate(&mut self, index: usize, hints: &[(&str, &str)]) {
        let Some(f) = &self.accelerate else {
            return;
        };
        let hints = match swb::to_value(hints) {
            Ok(h) => h,
            Err(e) => {
                warn!("accelerate hints not serializable: {e}");
                return;
            }
        };
        if let Err(e) = f.call2(&self.host, &JsValue::from_f64(index as f64), &hints) {
            warn!("host.accelerate threw for slide {index}: {e:?}");
        }
    }
}

/// A mounted parallax region driven by a JS host object.
#[wasm_bindgen]
pub struct VizijParallax {
    core: Parallax<JsValue, JsGeometry, JsSink>,
}

#[wasm_bindgen]
impl VizijParallax {
    /// Mount a parallax region. `config` is `{ motion, speed, children, before_block }`
    /// or undefined/null for defaults. `host` supplies the DOM plumbing:
    ///   { select(children), measure(slides, axis), apply(index, property, value), accelerate?(index, hints) }
    /// Throws for an unknown motion or when the measured table does not match the slides.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, host: JsValue) -> Result<VizijParallax, JsError> {
        console_error_panic_hook::set_once();
        logging::init();

        let cfg = parse_config(config)?;
        if jsvalue_is_undefined_or_null(&host) {
            return Err(JsError::new("host is null/undefined"));
        }
        let source = JsSource {
            f: required_fn(&host, "select")?,
            host: host.clone(),
        };
        let geometry = JsGeometry {
            f: required_fn(&host, "measure")?,
            host: host.clone(),
        };
        let sink = JsSink {
            apply: required_fn(&host, "apply")?,
            accelerate: host_fn(&host, "accelerate")?,
            host,
        };

        let core = Parallax::mount(cfg, source, geometry, sink)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(VizijParallax { core })
    }

    /// Scroll handler: pass `scrollTop` and `scrollLeft`. Applies the result through
    /// `host.apply` and returns it as `{ instructions, events }`, or null when the
    /// sample was dropped.
    #[wasm_bindgen]
    pub fn scroll(&mut self, top: f64, left: f64) -> Result<JsValue, JsError> {
        match self.core.on_scroll(ScrollOffsets::new(top, left)) {
            Some(out) => to_js(out),
            None => Ok(JsValue::NULL),
        }
    }

    /// Resize handler: re-measure slides via `host.measure`.
    #[wasm_bindgen]
    pub fn resize(&mut self) {
        self.core.on_resize();
    }

    /// Step the engine with an axis sample without calling `host.apply`.
    #[wasm_bindgen]
    pub fn compute(&mut self, sample: f64) -> Result<JsValue, JsError> {
        let out = self.core.engine_mut().compute_offset(sample);
        to_js(out)
    }

    #[wasm_bindgen]
    pub fn current(&self) -> u32 {
        self.core.engine().current() as u32
    }

    #[wasm_bindgen]
    pub fn len(&self) -> u32 {
        self.core.engine().len() as u32
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.core.engine().is_empty()
    }

    #[wasm_bindgen]
    pub fn axis(&self) -> String {
        self.core.engine().axis().as_str().to_string()
    }

    /// Property written by this region: "top" or "left".
    #[wasm_bindgen]
    pub fn property(&self) -> String {
        self.core.engine().property().as_str().to_string()
    }
}

/// Engine-only binding for hosts that measure and render on their own.
#[wasm_bindgen]
pub struct VizijMotionEngine {
    core: MotionEngine,
}

#[wasm_bindgen]
impl VizijMotionEngine {
    /// Build an engine over a coordinate table. Throws for an unknown motion.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, coords: Vec<f64>) -> Result<VizijMotionEngine, JsError> {
        console_error_panic_hook::set_once();
        logging::init();

        let cfg = parse_config(config)?;
        let core = MotionEngine::from_config(&cfg, coords).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(VizijMotionEngine { core })
    }

    /// Returns `{ instructions, events }` for one scroll sample.
    #[wasm_bindgen(js_name = compute_offset)]
    pub fn compute_offset(&mut self, scroll_pos: f64) -> Result<JsValue, JsError> {
        let out = self.core.compute_offset(scroll_pos);
        to_js(out)
    }

    #[wasm_bindgen(js_name = recompute_geometry)]
    pub fn recompute_geometry(&mut self, coords: Vec<f64>) {
        self.core.recompute_geometry(coords);
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.core.reset();
    }

    #[wasm_bindgen]
    pub fn current(&self) -> u32 {
        self.core.current() as u32
    }

    #[wasm_bindgen]
    pub fn len(&self) -> u32 {
        self.core.len() as u32
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
