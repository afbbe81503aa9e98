//! NUI Command Bridge
//!
//! Sends named commands to the host game process and parses its replies.
//!
//! Replies are parsed leniently: an empty or malformed body on a successful
//! status is treated as "no data" and comes back as `{}`. Callers rely on
//! `send_json` never failing for that reason.

mod error;
mod messages;
mod transport;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::NuiConfig;

pub use error::NuiError;
pub use messages::on_message;
pub use transport::{FetchTransport, HostRequest, HostResponse, HostTransport};

pub const GET_STASH: &str = "getStash";

/// Empty object payload, serializes as `{}`
#[derive(Serialize)]
pub struct NoArgs {}

#[derive(Debug, Clone)]
pub struct HostBridge<T = FetchTransport> {
    config: NuiConfig,
    transport: T,
}

impl HostBridge<FetchTransport> {
    pub fn new(config: NuiConfig) -> Self {
        Self::with_transport(config, FetchTransport)
    }
}

impl<T: HostTransport> HostBridge<T> {
    pub fn with_transport(config: NuiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// POST `payload` as JSON to `<origin>/<name>` and return the raw reply.
    pub async fn send_raw<P>(&self, name: &str, payload: &P) -> Result<HostResponse, NuiError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload).map_err(|e| NuiError::Encode {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        let request = HostRequest::post_json(name, self.config.endpoint(name), body);
        self.transport.post(request).await
    }

    /// Send a command and parse the reply as JSON.
    ///
    /// Non-2xx statuses are errors; unparsable bodies are `{}`.
    pub async fn send_json<P>(&self, name: &str, payload: &P) -> Result<Value, NuiError>
    where
        P: Serialize + ?Sized,
    {
        let response = self.send_raw(name, payload).await?;

        if !response.is_success() {
            return Err(NuiError::Status {
                name: name.to_string(),
                status: response.status,
                body: response.text().to_string(),
            });
        }

        Ok(parse_lenient(response.text()))
    }

    /// `send_json` followed by a typed decode
    pub async fn send_json_as<P, R>(&self, name: &str, payload: &P) -> Result<R, NuiError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = self.send_json(name, payload).await?;
        serde_json::from_value(value).map_err(|e| NuiError::Decode {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Inventory and attachment snapshot
    pub async fn request_stash(&self) -> Result<Value, NuiError> {
        self.send_json(GET_STASH, &NoArgs {}).await
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn parse_lenient(text: &str) -> Value {
    if text.is_empty() {
        return empty_object();
    }
    serde_json::from_str(text).unwrap_or_else(|_| empty_object())
}
