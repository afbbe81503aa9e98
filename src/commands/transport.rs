//! Host Transport
//!
//! The HTTP-like hop between the panel and the game client.
//! `FetchTransport` is the real one; tests plug in their own.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCache, RequestInit, Response};

use super::NuiError;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// A fully-built command request
#[derive(Debug, Clone, PartialEq)]
pub struct HostRequest {
    /// Command name, kept for error reporting
    pub name: String,
    pub url: String,
    pub method: &'static str,
    pub content_type: &'static str,
    /// JSON text of the payload
    pub body: String,
    pub no_store: bool,
}

impl HostRequest {
    pub fn post_json(name: &str, url: String, body: String) -> Self {
        Self {
            name: name.to_string(),
            url,
            method: "POST",
            content_type: JSON_CONTENT_TYPE,
            body,
            no_store: true,
        }
    }
}

/// Raw host reply: status plus best-effort body text
#[derive(Debug, Clone, PartialEq)]
pub struct HostResponse {
    pub status: u16,
    /// `None` when the body could not be read
    pub body: Option<String>,
}

impl HostResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body text, empty when unreadable
    pub fn text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

#[async_trait(?Send)]
pub trait HostTransport {
    async fn post(&self, request: HostRequest) -> Result<HostResponse, NuiError>;
}

/// `window.fetch` against the NUI origin
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HostTransport for FetchTransport {
    async fn post(&self, request: HostRequest) -> Result<HostResponse, NuiError> {
        let name = request.name.clone();
        let js_err = |e: JsValue| NuiError::transport(&name, format!("{:?}", e));

        let headers = Headers::new().map_err(js_err)?;
        headers.set("Content-Type", request.content_type).map_err(js_err)?;

        let init = RequestInit::new();
        init.set_method(request.method);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&request.body));
        if request.no_store {
            init.set_cache(RequestCache::NoStore);
        }

        let js_request = Request::new_with_str_and_init(&request.url, &init).map_err(js_err)?;
        let window = web_sys::window().ok_or_else(|| NuiError::transport(&name, "no window"))?;

        let reply = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_err)?;
        let response: Response = reply
            .dyn_into()
            .map_err(|_| NuiError::transport(&name, "fetch did not return a Response"))?;

        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
            Err(_) => None,
        };

        Ok(HostResponse {
            status: response.status(),
            body,
        })
    }
}
