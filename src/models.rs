//! Frontend Models
//!
//! Data structures exchanged with the host game process.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Player job / duty snapshot (replaced wholesale on update)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerState {
    pub job: String,
    pub gang: String,
    pub on_duty: bool,
}

/// Installed app entry, shape owned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppDescriptor(pub Value);

/// Inventory or attached item.
///
/// Only `name` is required; everything else the host sends is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StashItem {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StashItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

pub type InventoryItem = StashItem;
pub type AttachedItem = StashItem;

/// Decoded `getStash` reply
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stash {
    #[serde(default)]
    pub attached: Vec<AttachedItem>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub slots: Option<u32>,
}

impl Stash {
    /// Decode a raw `getStash` reply. An empty object yields an empty stash.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
