use std::cell::RefCell;

use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use crate::application::PageBehaviorCoordinator;
use crate::domain::config::UiConfig;
use crate::domain::errors::{AppError, ConfigError};
use crate::domain::logging::{LogComponent, get_logger};
use crate::event_utils::{EventOptions, TargetEventListenerHandle, target_event_listener_with_options};
use crate::infrastructure::dom;
use crate::infrastructure::dom::alerts::AlertAutoDismiss;
use crate::infrastructure::dom::forms::FormValidator;

// WASM boundary: thin bridge from page markup to the application layer.

thread_local! {
    static COORDINATOR: RefCell<PageBehaviorCoordinator> =
        RefCell::new(PageBehaviorCoordinator::new());
    static READY_LISTENER: RefCell<Option<TargetEventListenerHandle>> = RefCell::new(None);
}

fn with_coordinator<R>(f: impl FnOnce(&PageBehaviorCoordinator) -> R) -> R {
    COORDINATOR.with(|coordinator| f(&coordinator.borrow()))
}

/// Format a number as Brazilian Real currency text
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(value: f64) -> String {
    with_coordinator(|c| c.format_currency(value))
}

/// Format a date string as a Brazilian localized date. Unparseable input
/// yields the platform sentinel rather than throwing.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date_string: String) -> String {
    with_coordinator(|c| match c.format_date(&date_string) {
        Ok(formatted) => formatted,
        Err(error) => {
            get_logger().warn(
                LogComponent::Presentation("FormatDate"),
                &format!("⚠️ {}", error),
            );
            "Invalid Date".to_string()
        }
    })
}

/// Attach the required-field submit check to the form with this id.
/// A missing or non-form element is logged and otherwise ignored.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: String) {
    if let Err(error) = with_coordinator(|c| c.attach_form_validation(&form_id)) {
        get_logger().warn(
            LogComponent::Presentation("ValidateForm"),
            &format!("⚠️ {}", error),
        );
    }
}

/// Detach a previously attached submit check; returns whether one existed
#[wasm_bindgen(js_name = detachFormValidation)]
pub fn detach_form_validation(form_id: String) -> bool {
    FormValidator::unbind(&form_id)
}

/// Scroll the first element matching the selector into view with animated
/// motion. A missing target or bad selector is logged, never thrown.
#[wasm_bindgen(js_name = smoothScroll)]
pub fn smooth_scroll(target: String) {
    if let Err(error) = with_coordinator(|c| c.scroll_to(&target)) {
        get_logger().warn(
            LogComponent::Presentation("SmoothScroll"),
            &format!("⚠️ {}", error),
        );
    }
}

/// Re-run dismissal scheduling for alert banners currently in the page;
/// returns how many were scheduled
#[wasm_bindgen(js_name = dismissAlerts)]
pub fn dismiss_alerts() -> Result<u32, JsValue> {
    let scheduled = with_coordinator(|c| c.schedule_alert_dismissals())
        .map_err(AppError::from)?;
    Ok(scheduled as u32)
}

/// Abort every in-flight alert dismissal; returns how many were aborted
#[wasm_bindgen(js_name = cancelAlertDismissals)]
pub fn cancel_alert_dismissals() -> u32 {
    AlertAutoDismiss::cancel_all() as u32
}

/// Override page behavior settings with a partial camelCase options object
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    let config: UiConfig = options
        .into_serde()
        .map_err(|e| AppError::from(ConfigError::DeserializationFailed(e.to_string())))?;
    config.validate().map_err(AppError::from)?;

    COORDINATOR.with(|coordinator| {
        *coordinator.borrow_mut() = PageBehaviorCoordinator::with_config(config);
    });
    get_logger().info(
        LogComponent::Presentation("Configure"),
        "🔧 Page behavior settings replaced",
    );
    Ok(())
}

/// Schedule the initial alert dismissals, deferring until DOMContentLoaded
/// when the module initialized before the document finished parsing
pub fn install_page_behaviors() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(error) => {
            get_logger().warn(
                LogComponent::Presentation("Install"),
                &format!("⚠️ {}", error),
            );
            return;
        }
    };

    if document.ready_state() == "loading" {
        let handle = target_event_listener_with_options(
            document.as_ref(),
            "DOMContentLoaded",
            &EventOptions { once: true, ..EventOptions::default() },
            move |_| schedule_initial_dismissals(),
        );
        READY_LISTENER.with(|listener| {
            *listener.borrow_mut() = Some(handle);
        });
    } else {
        schedule_initial_dismissals();
    }
}

fn schedule_initial_dismissals() {
    if let Err(error) = with_coordinator(|c| c.schedule_alert_dismissals()) {
        get_logger().warn(
            LogComponent::Presentation("Install"),
            &format!("⚠️ {}", error),
        );
    }
}
