//! Host Configuration
//!
//! The NUI origin is resolved once at startup and injected into the bridge.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::logging;

/// Resource name used when the page runs outside the game client
pub const DEV_RESOURCE: &str = "nui-phone";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = GetParentResourceName)]
    fn get_parent_resource_name() -> Result<String, JsValue>;
}

/// Where host commands are sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuiConfig {
    /// e.g. `https://my-resource`
    pub host_origin: String,
}

impl NuiConfig {
    pub fn new(host_origin: impl Into<String>) -> Self {
        Self {
            host_origin: host_origin.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_resource(resource: &str) -> Self {
        Self::new(format!("https://{}", resource))
    }

    /// Ask the embedding client for the parent resource name.
    ///
    /// Falls back to [`DEV_RESOURCE`] when the page is opened in a plain browser.
    pub fn detect() -> Self {
        match get_parent_resource_name() {
            Ok(resource) if !resource.is_empty() => Self::from_resource(&resource),
            _ => {
                logging::warn(
                    "CONFIG",
                    format!("GetParentResourceName unavailable, using '{}'", DEV_RESOURCE),
                );
                Self::from_resource(DEV_RESOURCE)
            }
        }
    }

    /// Full URL for a named command
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.host_origin, name)
    }
}
