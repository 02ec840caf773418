use std::time::Duration;

use dashboard_ui_wasm::domain::config::UiConfig;
use dashboard_ui_wasm::infrastructure::dom::alerts::AlertAutoDismiss;
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn make_alert(document: &Document) -> HtmlElement {
    let element = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    element.set_class_name("alert");
    document.body().unwrap().append_child(&element).unwrap();
    element
}

// Short delays so a full dismissal fits comfortably inside a test
fn short_config() -> UiConfig {
    UiConfig { alert_visible_ms: 60, alert_fade_ms: 60, ..UiConfig::default() }
}

#[wasm_bindgen_test(async)]
async fn alert_fades_then_leaves_layout() {
    let document = document();
    let alert = make_alert(&document);
    let dismisser = AlertAutoDismiss::from_config(&short_config());

    let scheduled = dismisser.schedule_all().unwrap();
    assert!(scheduled >= 1);

    // Opacity drops after the visible delay, display goes after the fade
    sleep(Duration::from_millis(90)).await;
    assert_eq!(alert.style().get_property_value("opacity").unwrap(), "0");
    assert_eq!(alert.style().get_property_value("display").unwrap(), "");

    sleep(Duration::from_millis(90)).await;
    assert_eq!(alert.style().get_property_value("display").unwrap(), "none");
    assert_eq!(AlertAutoDismiss::in_flight(), 0);

    alert.remove();
}

#[wasm_bindgen_test(async)]
async fn disconnected_alert_is_never_restyled() {
    let document = document();
    let alert = make_alert(&document);
    let dismisser = AlertAutoDismiss::from_config(&short_config());

    dismisser.schedule_all().unwrap();
    alert.remove();

    sleep(Duration::from_millis(200)).await;
    assert_eq!(alert.style().get_property_value("opacity").unwrap(), "");
    assert_eq!(alert.style().get_property_value("display").unwrap(), "");
    assert_eq!(AlertAutoDismiss::in_flight(), 0);
}

#[wasm_bindgen_test(async)]
async fn elements_outside_the_selector_are_ignored() {
    let document = document();
    let plain = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&plain).unwrap();

    let dismisser = AlertAutoDismiss::from_config(&short_config());
    let scheduled = dismisser.schedule_all().unwrap();
    assert_eq!(scheduled, 0);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(plain.style().get_property_value("opacity").unwrap(), "");
    plain.remove();
}

#[wasm_bindgen_test]
fn invalid_selector_is_a_clean_error() {
    let config = UiConfig { alert_selector: ":::".to_string(), ..UiConfig::default() };
    let dismisser = AlertAutoDismiss::from_config(&config);
    assert!(dismisser.schedule_all().is_err());
}
