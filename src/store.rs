//! Panel State Store
//!
//! One signal per field. Every field is an independent cell: read it, track
//! it from an effect or view, or replace it. Writing one cell never wakes
//! subscribers of another.

use std::collections::HashSet;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::logging;
use crate::models::{AppDescriptor, AttachedItem, InventoryItem, PlayerState, Stash, StashItem};

pub const DEFAULT_PLAYER_NAME: &str = "Citizen";
pub const DEFAULT_SLOTS: u32 = 6;

/// Panel state, one reactive cell per field
#[derive(Clone, Copy)]
pub struct PanelStore {
    /// Display name of the local player
    player_name: RwSignal<String>,
    /// Job, gang and duty flag
    player_state: RwSignal<PlayerState>,
    /// Apps configured on the server
    apps: RwSignal<Vec<AppDescriptor>>,
    /// `getStash.attached`
    attached: RwSignal<Vec<AttachedItem>>,
    /// `getStash.inventory`
    inventory: RwSignal<Vec<InventoryItem>>,
    /// Inventory capacity
    slots: RwSignal<u32>,
}

impl PanelStore {
    pub fn new() -> Self {
        Self {
            player_name: RwSignal::new(DEFAULT_PLAYER_NAME.to_string()),
            player_state: RwSignal::new(PlayerState::default()),
            apps: RwSignal::new(Vec::new()),
            attached: RwSignal::new(Vec::new()),
            inventory: RwSignal::new(Vec::new()),
            slots: RwSignal::new(DEFAULT_SLOTS),
        }
    }

    pub fn player_name(&self) -> ReadSignal<String> {
        self.player_name.read_only()
    }

    pub fn player_state(&self) -> ReadSignal<PlayerState> {
        self.player_state.read_only()
    }

    pub fn apps(&self) -> ReadSignal<Vec<AppDescriptor>> {
        self.apps.read_only()
    }

    pub fn attached(&self) -> ReadSignal<Vec<AttachedItem>> {
        self.attached.read_only()
    }

    pub fn inventory(&self) -> ReadSignal<Vec<InventoryItem>> {
        self.inventory.read_only()
    }

    pub fn slots(&self) -> ReadSignal<u32> {
        self.slots.read_only()
    }
}

/// Get the panel store from context
pub fn use_panel_store() -> PanelStore {
    expect_context::<PanelStore>()
}

// ========================
// Derived State
// ========================

/// Names of everything currently attached
pub fn attached_name_set(attached: &[StashItem]) -> HashSet<String> {
    attached.iter().map(|item| item.name.clone()).collect()
}

/// Memo over `attached`, recomputed whenever the list is replaced
pub fn attached_names(store: PanelStore) -> Memo<HashSet<String>> {
    Memo::new(move |_| store.attached.with(|items| attached_name_set(items)))
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_player_name(store: &PanelStore, name: String) {
    store.player_name.set(name);
}

pub fn store_set_player_state(store: &PanelStore, state: PlayerState) {
    store.player_state.set(state);
}

pub fn store_set_apps(store: &PanelStore, apps: Vec<AppDescriptor>) {
    store.apps.set(apps);
}

pub fn store_set_attached(store: &PanelStore, attached: Vec<AttachedItem>) {
    store.attached.set(attached);
}

pub fn store_set_inventory(store: &PanelStore, inventory: Vec<InventoryItem>) {
    store.inventory.set(inventory);
}

pub fn store_set_slots(store: &PanelStore, slots: u32) {
    store.slots.set(slots);
}

/// Replace attached/inventory (and slots, when sent) from a stash reply
pub fn store_apply_stash(store: &PanelStore, stash: Stash) {
    store_set_attached(store, stash.attached);
    store_set_inventory(store, stash.inventory);
    if let Some(slots) = stash.slots {
        store_set_slots(store, slots);
    }
}

/// Apply a host-pushed update. Only keys present in the object are touched.
pub fn store_apply_host_update(store: &PanelStore, update: &Value) {
    let Some(fields) = update.as_object() else {
        return;
    };

    if let Some(name) = decode_field::<String>(fields.get("playerName"), "playerName") {
        store_set_player_name(store, name);
    }
    if let Some(state) = decode_field::<PlayerState>(fields.get("playerState"), "playerState") {
        store_set_player_state(store, state);
    }
    if let Some(apps) = decode_field::<Vec<AppDescriptor>>(fields.get("apps"), "apps") {
        store_set_apps(store, apps);
    }
    if let Some(attached) = decode_field::<Vec<AttachedItem>>(fields.get("attached"), "attached") {
        store_set_attached(store, attached);
    }
    if let Some(inventory) = decode_field::<Vec<InventoryItem>>(fields.get("inventory"), "inventory") {
        store_set_inventory(store, inventory);
    }
    if let Some(slots) = decode_field::<u32>(fields.get("slots"), "slots") {
        store_set_slots(store, slots);
    }
}

fn decode_field<T: DeserializeOwned>(value: Option<&Value>, key: &str) -> Option<T> {
    let value = value?;
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            logging::warn("STORE", format!("ignoring '{}' update: {}", key, e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::effect::ImmediateEffect;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn set_of(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    /// Effect that records every value `read` sees
    fn record<T, F>(read: F) -> (ImmediateEffect, Arc<Mutex<Vec<T>>>)
    where
        T: Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let effect = ImmediateEffect::new(move || sink.lock().unwrap().push(read()));
        (effect, seen)
    }

    #[test]
    fn test_initial_values() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();
            assert_eq!(store.player_name().get_untracked(), "Citizen");
            assert_eq!(store.player_state().get_untracked(), PlayerState::default());
            assert_eq!(store.slots().get_untracked(), 6);
            assert!(store.apps().get_untracked().is_empty());
        });
    }

    #[test]
    fn test_subscriber_sees_current_value_then_updates() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();
            let (_effect, seen) = record(move || store.slots().get());
            assert_eq!(*seen.lock().unwrap(), vec![6]);

            store_set_slots(&store, 9);
            store_set_slots(&store, 12);
            assert_eq!(*seen.lock().unwrap(), vec![6, 9, 12]);
        });
    }

    #[test]
    fn test_multiple_subscribers_on_one_cell() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();
            let (_first, a) = record(move || store.player_name().get());
            let (_second, b) = record(move || store.player_name().get());

            store_set_player_name(&store, "Jane".to_string());

            let expected = vec!["Citizen".to_string(), "Jane".to_string()];
            assert_eq!(*a.lock().unwrap(), expected);
            assert_eq!(*b.lock().unwrap(), expected);
        });
    }

    #[test]
    fn test_writing_one_cell_leaves_other_subscribers_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();
            let (_slots_effect, slots) = record(move || store.slots().get());
            let (_inventory_effect, inventory) = record(move || store.inventory().with(|i| i.len()));

            store_set_slots(&store, 9);
            store_set_player_name(&store, "x".to_string());
            store_set_player_state(&store, PlayerState::default());
            store_set_attached(&store, vec![StashItem::named("radio")]);

            assert_eq!(*slots.lock().unwrap(), vec![6, 9]);
            assert_eq!(*inventory.lock().unwrap(), vec![0]);
        });
    }

    #[test]
    fn test_attached_names_follow_attached() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();
            let names = attached_names(store);
            assert!(names.get_untracked().is_empty());

            store_set_attached(&store, vec![StashItem::named("radio"), StashItem::named("badge")]);
            assert_eq!(names.get_untracked(), set_of(&["radio", "badge"]));

            store_set_attached(&store, vec![StashItem::named("badge")]);
            assert_eq!(names.get_untracked(), set_of(&["badge"]));
        });
    }

    #[test]
    fn test_attached_names_subscriber_is_notified() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();
            let names = attached_names(store);
            let (_effect, seen) = record(move || names.get());

            store_set_attached(&store, vec![StashItem::named("radio"), StashItem::named("badge")]);
            store_set_attached(&store, vec![StashItem::named("badge")]);

            assert_eq!(
                *seen.lock().unwrap(),
                vec![set_of(&[]), set_of(&["radio", "badge"]), set_of(&["badge"])]
            );
        });
    }

    #[test]
    fn test_attached_name_set_dedups() {
        let items = vec![StashItem::named("radio"), StashItem::named("radio")];
        assert_eq!(attached_name_set(&items), set_of(&["radio"]));
    }

    #[test]
    fn test_cells_update_independently() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();
            store_set_player_state(
                &store,
                PlayerState {
                    job: "police".to_string(),
                    gang: String::new(),
                    on_duty: true,
                },
            );
            store_set_slots(&store, 10);

            assert!(store.player_state().get_untracked().on_duty);
            assert_eq!(store.slots().get_untracked(), 10);
            assert_eq!(store.player_name().get_untracked(), "Citizen");
        });
    }

    #[test]
    fn test_apply_stash() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();
            let stash = Stash::from_value(json!({
                "attached": [{ "name": "radio" }],
                "inventory": [{ "name": "phone" }, { "name": "water", "count": 2 }]
            }))
            .unwrap();

            store_apply_stash(&store, stash);

            assert_eq!(store.attached().get_untracked(), vec![StashItem::named("radio")]);
            assert_eq!(store.inventory().get_untracked().len(), 2);
            assert_eq!(store.slots().get_untracked(), DEFAULT_SLOTS);
        });
    }

    #[test]
    fn test_host_update_touches_only_present_keys() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();
            store_set_inventory(&store, vec![StashItem::named("phone")]);

            store_apply_host_update(
                &store,
                &json!({
                    "playerName": "Jane Doe",
                    "playerState": { "job": "ems", "gang": "", "onDuty": true },
                    "apps": [{ "id": "bank" }],
                    "slots": 8
                }),
            );

            assert_eq!(store.player_name().get_untracked(), "Jane Doe");
            assert_eq!(store.player_state().get_untracked().job, "ems");
            assert_eq!(store.apps().get_untracked(), vec![AppDescriptor(json!({ "id": "bank" }))]);
            assert_eq!(store.slots().get_untracked(), 8);
            assert_eq!(store.inventory().get_untracked(), vec![StashItem::named("phone")]);
        });
    }

    #[test]
    fn test_host_update_skips_bad_fields() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PanelStore::new();

            store_apply_host_update(&store, &json!({ "slots": "many", "playerName": "Sam" }));
            store_apply_host_update(&store, &json!("not an object"));

            assert_eq!(store.slots().get_untracked(), DEFAULT_SLOTS);
            assert_eq!(store.player_name().get_untracked(), "Sam");
        });
    }
}
