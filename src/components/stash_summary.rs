//! Stash Summary Component
//!
//! Inventory list with attached items highlighted, plus a manual refresh.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{attached_names, use_panel_store};

#[component]
pub fn StashSummary() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_panel_store();
    let names = attached_names(store);

    let refresh = move |_| ctx.reload_stash();

    view! {
        <section class="stash-summary">
            <div class="stash-header">
                <span class="stash-slots">
                    {move || format!("{}/{} slots", store.inventory().with(|items| items.len()), store.slots().get())}
                </span>
                <button class="stash-refresh" on:click=refresh>"↻"</button>
            </div>
            <ul class="stash-inventory">
                {move || store.inventory().get().into_iter().map(|item| {
                    let name = item.name.clone();
                    let is_attached = move || names.with(|set| set.contains(&name));
                    view! {
                        <li class="stash-item" class:attached=is_attached>{item.name}</li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
