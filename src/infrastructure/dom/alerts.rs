use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::domain::config::UiConfig;
use crate::domain::errors::DomError;
use crate::domain::logging::LogComponent;
use crate::infrastructure::dom;
use crate::log_debug;

thread_local! {
    // In-flight dismissal tasks, keyed per scheduled element so each one
    // can be aborted independently.
    static ACTIVE_DISMISSALS: RefCell<HashMap<u64, AbortHandle>> = RefCell::new(HashMap::new());
    static NEXT_KEY: Cell<u64> = Cell::new(0);
}

/// Schedules the two-stage fade-out of notification banners: after the
/// visible delay the banner's opacity drops to zero, after the further
/// fade delay it is removed from layout.
pub struct AlertAutoDismiss {
    selector: String,
    visible: Duration,
    fade: Duration,
}

impl AlertAutoDismiss {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            selector: config.alert_selector.clone(),
            visible: Duration::from_millis(u64::from(config.alert_visible_ms)),
            fade: Duration::from_millis(u64::from(config.alert_fade_ms)),
        }
    }

    /// Schedule dismissal for every element currently matching the alert
    /// selector; returns how many were scheduled.
    pub fn schedule_all(&self) -> Result<usize, DomError> {
        let document = dom::document()?;
        let alerts = document
            .query_selector_all(&self.selector)
            .map_err(|_| DomError::InvalidSelector(self.selector.clone()))?;

        let mut scheduled = 0;
        for index in 0..alerts.length() {
            let Some(node) = alerts.get(index) else { continue };
            let Ok(element) = node.dyn_into::<HtmlElement>() else { continue };
            self.schedule(element);
            scheduled += 1;
        }

        log_debug!(
            LogComponent::Infrastructure("AlertAutoDismiss"),
            "⏲️ Scheduled dismissal for {} alert(s)",
            scheduled
        );
        Ok(scheduled)
    }

    /// Schedule one element's dismissal as an independent, abortable task.
    /// The task drops without touching the DOM if the element has been
    /// disconnected mid-flight, and deregisters itself when it resolves.
    pub fn schedule(&self, element: HtmlElement) {
        let key = NEXT_KEY.with(|next| {
            let key = next.get();
            next.set(key + 1);
            key
        });
        let (handle, registration) = AbortHandle::new_pair();
        ACTIVE_DISMISSALS.with(|active| {
            active.borrow_mut().insert(key, handle);
        });

        let visible = self.visible;
        let fade = self.fade;
        spawn_local(async move {
            let dismissal = Abortable::new(
                async move {
                    sleep(visible).await;
                    if !element.is_connected() {
                        return;
                    }
                    let _ = element.style().set_property("opacity", "0");
                    sleep(fade).await;
                    if element.is_connected() {
                        let _ = element.style().set_property("display", "none");
                    }
                },
                registration,
            );
            let _ = dismissal.await;
            ACTIVE_DISMISSALS.with(|active| {
                active.borrow_mut().remove(&key);
            });
        });
    }

    /// Abort every in-flight dismissal; returns how many were aborted
    pub fn cancel_all() -> usize {
        ACTIVE_DISMISSALS.with(|active| {
            let mut handles = active.borrow_mut();
            let cancelled = handles.len();
            for (_, handle) in handles.drain() {
                handle.abort();
            }
            cancelled
        })
    }

    /// Number of dismissals currently in flight
    pub fn in_flight() -> usize {
        ACTIVE_DISMISSALS.with(|active| active.borrow().len())
    }
}
