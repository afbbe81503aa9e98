//! Host Messages
//!
//! Unsolicited events pushed by the game client via `window.postMessage`.

use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use crate::logging;

/// Register `handler` for every host message for the rest of the page lifetime.
pub fn on_message<F>(handler: F)
where
    F: Fn(Value) + 'static,
{
    let on_event = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
        let data = serde_wasm_bindgen::from_value::<Value>(ev.data()).ok();
        deliver(&handler, data);
    });

    match web_sys::window() {
        Some(win) => {
            if let Err(e) = win.add_event_listener_with_callback("message", on_event.as_ref().unchecked_ref()) {
                logging::warn("NUI", format!("message listener not registered: {:?}", e));
            }
        }
        None => logging::warn("NUI", "no window, message listener not registered"),
    }
    on_event.forget();
}

/// Hand one event's payload to the handler, `{}` when it carries nothing
pub(crate) fn deliver<F: Fn(Value)>(handler: &F, data: Option<Value>) {
    handler(payload_or_empty(data));
}

/// Missing or falsy data becomes an empty object
pub fn payload_or_empty(data: Option<Value>) -> Value {
    match data {
        Some(value) if !is_falsy(&value) => value,
        _ => Value::Object(Map::new()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
