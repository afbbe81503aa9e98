//! NUI Phone App
//!
//! Composition root: owns the store and clock, wires the host bridge.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clock::Clock;
use crate::commands::{self, HostBridge};
use crate::components::{StashSummary, StatusBar};
use crate::config::NuiConfig;
use crate::context::AppContext;
use crate::logging;
use crate::models::Stash;
use crate::store::{store_apply_host_update, store_apply_stash, PanelStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = PanelStore::new();
    let (stash_trigger, set_stash_trigger) = signal(0u32);

    // Clock runs for the life of the panel
    let clock = Clock::new();
    let stop_clock = StoredValue::new_local(Some(clock.start()));
    on_cleanup(move || {
        if let Some(stop) = stop_clock.try_update_value(|s| s.take()).flatten() {
            stop.stop();
        }
    });

    let config = NuiConfig::detect();
    logging::info("APP", format!("Host origin {}", config.host_origin));
    let ctx = AppContext::new(HostBridge::new(config), clock.time(), set_stash_trigger);

    provide_context(store);
    provide_context(ctx.clone());

    // Host pushes (player info, apps, slots) land straight in the store
    commands::on_message(move |payload| {
        store_apply_host_update(&store, &payload);
    });

    // Load stash on mount and whenever a refresh is requested
    Effect::new(move |_| {
        let trigger = stash_trigger.get();
        let bridge = ctx.bridge.clone();
        logging::info("APP", format!("Requesting stash, trigger={}", trigger));
        spawn_local(async move {
            match bridge.request_stash().await {
                Ok(value) => match Stash::from_value(value) {
                    Ok(stash) => {
                        logging::info(
                            "APP",
                            format!("Loaded stash: {} attached, {} inventory", stash.attached.len(), stash.inventory.len()),
                        );
                        store_apply_stash(&store, stash);
                    }
                    Err(e) => logging::error("APP", format!("Unexpected stash shape: {}", e)),
                },
                Err(e) => logging::error("APP", e.to_string()),
            }
        });
    });

    view! {
        <div class="phone-shell">
            <StatusBar />
            <main class="phone-body">
                <StashSummary />
            </main>
        </div>
    }
}
