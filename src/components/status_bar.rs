//! Status Bar Component
//!
//! Clock, player name and duty line across the top of the phone.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::PlayerState;
use crate::store::use_panel_store;

fn duty_label(state: &PlayerState) -> String {
    if state.job.is_empty() {
        return String::new();
    }
    let duty = if state.on_duty { "on duty" } else { "off duty" };
    format!("{} · {}", state.job, duty)
}

#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_panel_store();
    let time = ctx.time;

    view! {
        <header class="phone-status-bar">
            <span class="phone-clock">{move || time.get()}</span>
            <span class="phone-player">{move || store.player_name().get()}</span>
            <span class="phone-duty">{move || store.player_state().with(duty_label)}</span>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duty_label() {
        let mut state = PlayerState::default();
        assert_eq!(duty_label(&state), "");

        state.job = "police".to_string();
        assert_eq!(duty_label(&state), "police · off duty");

        state.on_duty = true;
        assert_eq!(duty_label(&state), "police · on duty");
    }
}
