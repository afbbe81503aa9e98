//! Clock Ticker
//!
//! Keeps a single `HH:MM` cell fresh once per second.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Shown until the first tick
pub const PLACEHOLDER: &str = "--:--";
pub const TICK_MS: u32 = 1_000;

/// Cancels a running clock
pub struct StopClock(Box<dyn FnOnce()>);

impl StopClock {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self(Box::new(cancel))
    }

    pub fn stop(self) {
        (self.0)()
    }
}

/// Periodic scheduler the clock runs on
pub trait Ticker {
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> StopClock;
}

/// Browser `setInterval`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> StopClock {
        let interval = Interval::new(period_ms, move || tick());
        StopClock::new(move || drop(interval.cancel()))
    }
}

#[derive(Clone, Copy)]
pub struct Clock {
    time: RwSignal<String>,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            time: RwSignal::new(PLACEHOLDER.to_string()),
        }
    }

    pub fn time(&self) -> ReadSignal<String> {
        self.time.read_only()
    }

    /// Publish now, then every second, until the returned handle is stopped.
    pub fn start(&self) -> StopClock {
        self.start_with(&IntervalTicker, locale_time)
    }

    pub fn start_with<N>(&self, ticker: &impl Ticker, now: N) -> StopClock
    where
        N: Fn() -> String + 'static,
    {
        let time = self.time;
        let stopped = Rc::new(Cell::new(false));

        let publish = {
            let stopped = Rc::clone(&stopped);
            move || {
                if !stopped.get() {
                    time.set(now());
                }
            }
        };
        publish();

        let handle = ticker.every(TICK_MS, Box::new(publish));
        StopClock::new(move || {
            stopped.set(true);
            handle.stop();
        })
    }
}

/// Current local time as hour:minute
#[cfg(target_arch = "wasm32")]
pub fn locale_time() -> String {
    intl_time().unwrap_or_else(fallback_time)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn locale_time() -> String {
    fallback_time()
}

#[cfg(target_arch = "wasm32")]
fn intl_time() -> Option<String> {
    use js_sys::{Array, Date, Intl, Object, Reflect};
    use wasm_bindgen::JsValue;

    let options = Object::new();
    Reflect::set(&options, &"hour".into(), &"2-digit".into()).ok()?;
    Reflect::set(&options, &"minute".into(), &"2-digit".into()).ok()?;

    let format = Intl::DateTimeFormat::new(&Array::new(), &options).format();
    format
        .call1(&JsValue::NULL, &Date::new_0())
        .ok()?
        .as_string()
}

fn fallback_time() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
