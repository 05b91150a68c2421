#![cfg(target_arch = "wasm32")]
use js_sys::{Function, Object, Reflect};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use serde_json::json;
use vizij_parallax_wasm::{abi_version, VizijMotionEngine, VizijParallax};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Debug, Deserialize)]
struct Instruction {
    target: usize,
    property: String,
    value: f64,
    kind: String,
}

#[derive(Debug, Deserialize)]
struct Out {
    instructions: Vec<Instruction>,
    events: Vec<serde_json::Value>,
}

fn js(v: serde_json::Value) -> JsValue {
    v.serialize(&swb::Serializer::json_compatible()).unwrap()
}

/// Host whose slides are plain `{ top, left }` objects and whose `apply` calls
/// are recorded on `host.log`.
fn make_host(tops: &[f64]) -> JsValue {
    let host = Object::new();
    let slides: Vec<_> = tops.iter().map(|t| json!({ "top": t, "left": 0 })).collect();
    Reflect::set(&host, &"slides".into(), &js(json!(slides))).unwrap();
    Reflect::set(&host, &"log".into(), &js_sys::Array::new()).unwrap();
    Reflect::set(&host, &"hinted".into(), &js_sys::Array::new()).unwrap();
    Reflect::set(
        &host,
        &"select".into(),
        &Function::new_with_args("children", "this.children = children; return this.slides;"),
    )
    .unwrap();
    Reflect::set(
        &host,
        &"measure".into(),
        &Function::new_with_args(
            "slides, axis",
            "return slides.map(s => axis === 'vertical' ? s.top : s.left);",
        ),
    )
    .unwrap();
    Reflect::set(
        &host,
        &"apply".into(),
        &Function::new_with_args("i, prop, value", "this.log.push([i, prop, value]);"),
    )
    .unwrap();
    Reflect::set(
        &host,
        &"accelerate".into(),
        &Function::new_with_args("i, hints", "this.hinted.push(i);"),
    )
    .unwrap();
    host.into()
}

fn array_len(host: &JsValue, key: &str) -> u32 {
    let v = Reflect::get(host, &key.into()).unwrap();
    js_sys::Array::from(&v).length()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn mount_with_defaults() {
    let host = make_host(&[0.0, 500.0, 1000.0]);
    let p = VizijParallax::new(JsValue::UNDEFINED, host.clone()).unwrap();
    assert_eq!(p.len(), 3);
    assert_eq!(p.current(), 0);
    assert_eq!(p.axis(), "vertical");
    assert_eq!(p.property(), "top");
    assert_eq!(array_len(&host, "hinted"), 3);
    assert!(Reflect::get(&host, &"children".into()).unwrap().is_null());
}

#[wasm_bindgen_test]
fn unknown_motion_throws_at_construction() {
    let host = make_host(&[0.0, 500.0]);
    let res = VizijParallax::new(js(json!({ "motion": "diagonal" })), host.clone());
    assert!(res.is_err());
    // Nothing was selected or hinted
    assert!(Reflect::get(&host, &"children".into()).unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn missing_host_method_throws() {
    let host = Object::new();
    assert!(VizijParallax::new(JsValue::NULL, host.into()).is_err());
}

#[wasm_bindgen_test]
fn scroll_applies_and_returns_outputs() {
    let host = make_host(&[0.0, 500.0, 1000.0]);
    let mut p = VizijParallax::new(js(json!({ "children": ".slide" })), host.clone()).unwrap();
    let children = Reflect::get(&host, &"children".into()).unwrap();
    assert_eq!(children.as_string().as_deref(), Some(".slide"));

    let out: Out = swb::from_value(p.scroll(485.0, 0.0).unwrap()).unwrap();
    assert_eq!(out.instructions.len(), 2);
    assert_eq!(out.instructions[0].kind, "move");
    assert_eq!(out.instructions[0].property, "top");
    assert_eq!(out.instructions[1].kind, "pin");
    assert_eq!(out.instructions[1].target, 0);
    assert_eq!(out.instructions[1].value, 480.0);
    assert_eq!(out.events.len(), 1);
    assert_eq!(p.current(), 1);
    assert_eq!(array_len(&host, "log"), 2);
}

#[wasm_bindgen_test]
fn non_finite_scroll_returns_null() {
    let host = make_host(&[0.0, 500.0]);
    let mut p = VizijParallax::new(JsValue::NULL, host.clone()).unwrap();
    let out = p.scroll(f64::NAN, 0.0).unwrap();
    assert!(out.is_null());
    assert_eq!(array_len(&host, "log"), 0);
}

#[wasm_bindgen_test]
fn compute_does_not_touch_the_host() {
    let host = make_host(&[0.0, 500.0, 1000.0]);
    let mut p = VizijParallax::new(JsValue::NULL, host.clone()).unwrap();
    let out: Out = swb::from_value(p.compute(100.0).unwrap()).unwrap();
    assert_eq!(out.instructions.len(), 1);
    assert_eq!(out.instructions[0].value, 100.0);
    assert_eq!(array_len(&host, "log"), 0);
}

#[wasm_bindgen_test]
fn engine_binding_roundtrip() {
    let mut eng = VizijMotionEngine::new(
        js(json!({ "motion": "horizontal", "speed": 2 })),
        vec![0.0, 800.0, 1600.0],
    )
    .unwrap();
    let out: Out = swb::from_value(eng.compute_offset(100.0).unwrap()).unwrap();
    assert_eq!(out.instructions[0].property, "left");
    assert_eq!(out.instructions[0].value, 200.0);

    eng.compute_offset(790.0).unwrap();
    assert_eq!(eng.current(), 1);
    eng.recompute_geometry(vec![0.0, 400.0]);
    assert_eq!(eng.current(), 1);
    assert_eq!(eng.len(), 2);
    eng.reset();
    assert_eq!(eng.current(), 0);

    assert!(VizijMotionEngine::new(js(json!({ "motion": "diagonal" })), vec![]).is_err());
}
