//! Transport client for the Evolution gateway
//!
//! [`EvolutionApi`] owns the base URL, the API key, and the underlying
//! `reqwest` client, and exposes the four request primitives the resource
//! services are built on: [`get`], [`post`], [`delete`], and [`status`].
//! Each primitive performs exactly one HTTP call; there are no retries and
//! no backoff.
//!
//! `get`/`post`/`delete` never fail from the caller's point of view: any
//! transport failure (network error or non-success status) collapses into a
//! `{"error": "<message>"}` object. Calling code is written against that
//! contract. The `try_*` variants expose the same calls as [`Result`] for
//! callers that prefer `?`-style propagation.
//!
//! [`get`]: EvolutionApi::get
//! [`post`]: EvolutionApi::post
//! [`delete`]: EvolutionApi::delete
//! [`status`]: EvolutionApi::status

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::EvolutionConfig;
use crate::error::{Error, Result};

/// HTTP request primitives for the Evolution gateway
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct EvolutionApi {
    base_url: String,
    client: reqwest::Client,
}

impl EvolutionApi {
    /// Create a new transport client
    ///
    /// The API key is attached as the `apikey` default header, so every
    /// request carries it.
    ///
    /// # Errors
    /// Returns an error if the key is not a valid header value or the HTTP
    /// client cannot be created.
    pub fn new(config: &EvolutionConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| Error::Config("api key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// GET an endpoint, with `params` serialized as the query string
    ///
    /// Returns the decoded JSON body; a null or empty body yields `{}`. On
    /// failure returns `{"error": "<message>"}` instead.
    pub async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Value {
        self.try_get(endpoint, params).await.unwrap_or_else(error_value)
    }

    /// POST a JSON body to an endpoint
    ///
    /// Returns the decoded response body verbatim (null if the gateway
    /// answers with an empty body). On failure returns `{"error": "<message>"}`.
    pub async fn post(&self, endpoint: &str, body: &Value) -> Value {
        self.try_post(endpoint, body).await.unwrap_or_else(error_value)
    }

    /// DELETE an endpoint, optionally with a JSON body
    ///
    /// Same return contract as [`post`](Self::post).
    pub async fn delete(&self, endpoint: &str, body: &Value) -> Value {
        self.try_delete(endpoint, body).await.unwrap_or_else(error_value)
    }

    /// GET an endpoint for state polling, normalized to a sequence shape
    ///
    /// The result is always iterable on success: a null body becomes
    /// `[null]`, a non-array value is wrapped in a one-element array, and an
    /// array passes through unchanged. When the gateway answers with a
    /// non-success status, the error response body is decoded and returned
    /// as-is (null when absent or undecodable); a request that produces no
    /// response at all yields null.
    pub async fn status(&self, endpoint: &str) -> Value {
        debug!(endpoint, "GET (status poll)");

        let response = match self.client.get(self.url(endpoint)).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(endpoint, %error, "status poll failed");
                return Value::Null;
            }
        };

        let success = response.status().is_success();
        let body = response.text().await.unwrap_or_default();
        let decoded: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        if !success {
            return decoded;
        }

        match decoded {
            Value::Null => json!([null]),
            Value::Array(_) => decoded,
            other => json!([other]),
        }
    }

    /// [`get`](Self::get) with a typed error instead of the error object
    pub async fn try_get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        debug!(endpoint, "GET");

        let response = self
            .client
            .get(self.url(endpoint))
            .query(params)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        match decode(response).await? {
            Value::Null => Ok(json!({})),
            value => Ok(value),
        }
    }

    /// [`post`](Self::post) with a typed error instead of the error object
    pub async fn try_post(&self, endpoint: &str, body: &Value) -> Result<Value> {
        debug!(endpoint, "POST");

        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        decode(response).await
    }

    /// [`delete`](Self::delete) with a typed error instead of the error object
    pub async fn try_delete(&self, endpoint: &str, body: &Value) -> Result<Value> {
        debug!(endpoint, "DELETE");

        let response = self
            .client
            .delete(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        decode(response).await
    }
}

/// Decode a response body, treating an empty or undecodable body as null
async fn decode(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let text = response.text().await.map_err(|e| Error::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(Error::Api(format!("HTTP {status}: {text}")));
    }

    Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
}

fn error_value(error: Error) -> Value {
    warn!(%error, "request failed");
    json!({ "error": error.to_string() })
}
