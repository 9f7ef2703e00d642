use std::rc::Rc;

use reqwest::{header::HeaderMap, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::{types::ApiError, wire},
    config,
    utils::storage::{BrowserStorage, KeyValueStore, TOKEN_KEY},
};

/// Thin REST client. It only ever *reads* the stored credential; writing and
/// clearing it is the session's job (see `state::auth`).
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    storage: Rc<dyn KeyValueStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            storage: Rc::new(BrowserStorage),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_storage(mut self, storage: Rc<dyn KeyValueStore>) -> Self {
        self.storage = storage;
        self
    }

    /// The store the bearer token is read from. Shared with the session so
    /// both sides see the same pair.
    pub fn storage(&self) -> Rc<dyn KeyValueStore> {
        Rc::clone(&self.storage)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub fn stored_token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn has_credential(&self) -> bool {
        self.stored_token().is_some()
    }

    /// Bearer header for mutating calls. Missing credential is reported as
    /// `UNAUTHORIZED` before any request leaves the browser.
    pub(crate) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self
            .stored_token()
            .ok_or_else(|| ApiError::unauthorized("Not signed in"))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    /// Attaches the bearer header when a credential exists, for public reads
    /// that return extra fields to signed-in admins.
    pub(crate) fn optional_auth_headers(&self) -> HeaderMap {
        self.get_auth_headers().unwrap_or_default()
    }

    /// Sends a request and returns the raw JSON body of a 2xx response.
    /// Empty bodies decode to `Value::Null`.
    pub(crate) async fn send_json(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        let body = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<Value>(&text).ok()
        };
        if status.is_success() {
            Ok(body.unwrap_or(Value::Null))
        } else {
            let error = ApiError::from_status(status.as_u16(), body.as_ref());
            if error.is_unauthorized() {
                log::warn!("Backend rejected credential ({})", status);
            }
            Err(error)
        }
    }

    pub(crate) async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        keys: &[&str],
    ) -> Result<Vec<T>, ApiError> {
        let body = self.send_json(request).await?;
        wire::decode_list(body, keys)
    }

    pub(crate) async fn fetch_item<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        keys: &[&str],
    ) -> Result<T, ApiError> {
        let body = self.send_json(request).await?;
        wire::decode_item(body, keys)
    }

    /// Fire-and-forget mutation where only success matters.
    pub(crate) async fn send_unit(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send_json(request).await.map(|_| ())
    }
}
