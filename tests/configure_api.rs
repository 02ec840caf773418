use dashboard_ui_wasm::presentation::{configure, format_currency};
use js_sys::JSON;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn accepts_a_partial_camel_case_object() {
    let options = JSON::parse(r#"{"alertVisibleMs": 1200, "scrollMotion": "auto"}"#).unwrap();
    configure(options).unwrap();

    // formatting is locale-fixed, untouched by behavior settings
    assert_eq!(format_currency(10.0), "R$\u{a0}10,00");
}

#[wasm_bindgen_test]
fn rejects_a_zero_fade() {
    let options = JSON::parse(r#"{"alertFadeMs": 0}"#).unwrap();
    assert!(configure(options).is_err());
}

#[wasm_bindgen_test]
fn rejects_an_empty_selector() {
    let options = JSON::parse(r#"{"alertSelector": " "}"#).unwrap();
    assert!(configure(options).is_err());
}

#[wasm_bindgen_test]
fn rejects_non_object_options() {
    assert!(configure(JsValue::from_str("nope")).is_err());
}

#[wasm_bindgen_test]
fn rejects_unknown_scroll_motion() {
    let options = JSON::parse(r#"{"scrollMotion": "bouncy"}"#).unwrap();
    assert!(configure(options).is_err());
}
