//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HostBridge;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Bridge to the host game process
    pub bridge: HostBridge,
    /// Current `HH:MM`
    pub time: ReadSignal<String>,
    /// Bumped to re-request the stash
    set_stash_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(bridge: HostBridge, time: ReadSignal<String>, set_stash_trigger: WriteSignal<u32>) -> Self {
        Self {
            bridge,
            time,
            set_stash_trigger,
        }
    }

    /// Ask the host for a fresh stash snapshot
    pub fn reload_stash(&self) {
        self.set_stash_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
