//! Application Submission
//!
//! POSTs the serialized record and turns the reply into a `FormError`.

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::js_error_text;
use crate::error::FormError;

/// Raw reply of the submission endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam for the submission endpoint
#[async_trait(?Send)]
pub trait ApplyApi {
    /// Send the JSON body; `Err` only for transport failures
    async fn post_application(&self, body: &str) -> Result<HttpReply, FormError>;
}

/// Map a reply to the outcome shown to the user.
///
/// The body must be JSON whatever the status. A failed reply surfaces its
/// `message` field, or "Unknown error" when there is none.
pub fn interpret_reply(reply: &HttpReply) -> Result<(), FormError> {
    let json: Value = serde_json::from_str(&reply.body).map_err(|e| FormError::Transport(e.to_string()))?;
    if reply.is_success() {
        return Ok(());
    }
    let message = json
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or("Unknown error");
    Err(FormError::Server(message.to_string()))
}

/// One submission attempt, no retries
pub async fn submit_application<A: ApplyApi + ?Sized>(api: &A, body: &str) -> Result<(), FormError> {
    let reply = api.post_application(body).await?;
    log::debug!("apply endpoint answered {}", reply.status);
    interpret_reply(&reply)
}

/// `fetch`-backed implementation
pub struct FetchApplyApi {
    endpoint: String,
}

impl FetchApplyApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

fn transport(value: JsValue) -> FormError {
    FormError::Transport(js_error_text(&value))
}

#[async_trait(?Send)]
impl ApplyApi for FetchApplyApi {
    async fn post_application(&self, body: &str) -> Result<HttpReply, FormError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(body));

        let request = Request::new_with_str_and_init(&self.endpoint, &opts).map_err(transport)?;
        request.headers().set("Content-Type", "application/json").map_err(transport)?;

        let window = web_sys::window().ok_or_else(|| FormError::Transport("no window".to_string()))?;
        let resp: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(transport)?;

        let text = JsFuture::from(resp.text().map_err(transport)?).await.map_err(transport)?;
        Ok(HttpReply {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
