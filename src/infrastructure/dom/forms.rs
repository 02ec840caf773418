use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

use crate::domain::config::UiConfig;
use crate::domain::errors::DomError;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::domain::validation::{FieldStatus, RequiredFieldPolicy, ValidationReport};
use crate::event_utils::{EventOptions, TargetEventListenerHandle, target_event_listener_with_options};
use crate::infrastructure::dom;

thread_local! {
    // One live submit listener per form id; re-binding replaces it instead
    // of stacking a second handler on the same form.
    static BOUND_FORMS: RefCell<HashMap<String, TargetEventListenerHandle>> =
        RefCell::new(HashMap::new());
}

/// Attaches the submit-time required-field check to a named form.
///
/// On submit every `[required]` descendant is read and classified; empty
/// fields get the danger border token, filled ones the default token. Any
/// empty field cancels the submit and raises the blocking warning dialog.
pub struct FormValidator {
    message: String,
    danger_border: String,
    default_border: String,
}

impl FormValidator {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            message: config.required_field_message.clone(),
            danger_border: config.danger_border.clone(),
            default_border: config.default_border.clone(),
        }
    }

    pub fn bind(&self, form_id: &str) -> Result<(), DomError> {
        let document = dom::document()?;
        let element = document
            .get_element_by_id(form_id)
            .ok_or_else(|| DomError::ElementNotFound(format!("#{}", form_id)))?;
        let form: HtmlFormElement = element
            .dyn_into()
            .map_err(|_| DomError::NotAForm(form_id.to_string()))?;

        let message = self.message.clone();
        let danger_border = self.danger_border.clone();
        let default_border = self.default_border.clone();
        let handler_form = form.clone();
        let handle = target_event_listener_with_options(
            form.as_ref(),
            "submit",
            // passive listeners cannot preventDefault
            &EventOptions { passive: false, ..EventOptions::default() },
            move |event: Event| {
                Self::on_submit(&handler_form, &event, &message, &danger_border, &default_border);
            },
        );

        BOUND_FORMS.with(|forms| {
            if let Some(previous) = forms.borrow_mut().insert(form_id.to_string(), handle) {
                previous.remove();
            }
        });

        get_logger().debug(
            LogComponent::Infrastructure("FormValidator"),
            &format!("📋 Required-field check bound to form #{}", form_id),
        );
        Ok(())
    }

    /// Detach a previously bound listener; returns whether one existed
    pub fn unbind(form_id: &str) -> bool {
        BOUND_FORMS.with(|forms| match forms.borrow_mut().remove(form_id) {
            Some(handle) => {
                handle.remove();
                true
            }
            None => false,
        })
    }

    fn on_submit(
        form: &HtmlFormElement,
        event: &Event,
        message: &str,
        danger_border: &str,
        default_border: &str,
    ) {
        let Ok(fields) = form.query_selector_all("[required]") else {
            return;
        };

        let policy = RequiredFieldPolicy::new();
        let mut report = ValidationReport::default();
        for index in 0..fields.length() {
            let Some(node) = fields.get(index) else { continue };
            let Ok(field) = node.dyn_into::<Element>() else { continue };
            let value = dom::field_value(&field).unwrap_or_default();
            let status = policy.field_status(&value);
            report.record(status);
            let color = match status {
                FieldStatus::Empty => danger_border,
                FieldStatus::Filled => default_border,
            };
            dom::set_border_color(&field, color);
        }

        if !report.is_valid() {
            event.prevent_default();
            if let Ok(window) = dom::window() {
                let _ = window.alert_with_message(message);
            }
            let metadata = serde_json::to_string(&report).unwrap_or_default();
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Infrastructure("FormValidator"),
                "⚠️ Submit blocked, required fields are empty",
                &metadata,
            );
        }
    }
}
