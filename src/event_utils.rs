use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false, once: false }
    }
}

/// Keeps the closure alive while the listener is attached; dropping the
/// handle without calling `remove` leaks the closure and the listener
/// stays installed.
pub struct TargetEventListenerHandle {
    target: EventTarget,
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl TargetEventListenerHandle {
    pub fn remove(self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

pub fn target_event_listener_with_options(
    target: &EventTarget,
    event_name: &str,
    options: &EventOptions,
    mut cb: impl FnMut(Event) + 'static,
) -> TargetEventListenerHandle {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    opts.set_once(options.once);

    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev);
    }) as Box<dyn FnMut(Event)>);

    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event_name,
        callback.as_ref().unchecked_ref(),
        &opts,
    );

    TargetEventListenerHandle {
        target: target.clone(),
        event_name: event_name.to_string(),
        callback,
        capture: options.capture,
    }
}
