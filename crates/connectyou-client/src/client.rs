//! HTTP client for the store API.
//!
//! Wraps `reqwest` with per-operation fallback messages and structured error
//! body extraction. See [`GatewayError`] for the normalized failure shape.

use std::time::Duration;

use connectyou_core::{AppConfig, CategoryFilter, FeedbackPayload, FeedbackReceipt, StoreAnalytics};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::GatewayError;
use crate::types::{CategoriesResponse, StoreListResponse};

/// The four calls the gateway knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    ListStores,
    ListCategories,
    FetchAnalytics,
    SubmitFeedback,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::ListStores => "list_stores",
            Operation::ListCategories => "list_categories",
            Operation::FetchAnalytics => "fetch_analytics",
            Operation::SubmitFeedback => "submit_feedback",
        }
    }

    /// Message surfaced when the response carries no usable error text.
    fn fallback_message(self) -> &'static str {
        match self {
            Operation::ListStores => "Failed to fetch stores",
            Operation::ListCategories => "Failed to fetch store types",
            Operation::FetchAnalytics => "Failed to fetch analytics",
            Operation::SubmitFeedback => "Failed to submit feedback",
        }
    }
}

/// Client for the store API.
///
/// Use [`StoreApiClient::new`] with the loaded [`AppConfig`], or
/// [`StoreApiClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct StoreApiClient {
    client: Client,
    base_url: Url,
}

impl StoreApiClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if the base URL is invalid or the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, GatewayError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL.
    ///
    /// `timeout_secs` of `None` leaves requests without a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if `base_url` is not a valid URL or
    /// the HTTP client cannot be built.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, GatewayError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Config(format!("cannot build HTTP client: {e}")))?;

        // Exactly one trailing slash so `Url::join` appends to the API prefix
        // (`/api/` + `stores`) instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GatewayError::Config(format!("invalid API base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lists stores, letting the server filter by category and search text.
    ///
    /// `type` is omitted for [`CategoryFilter::All`] and `query` is omitted
    /// when `query` is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] whose message is the server's error text or
    /// `"Failed to fetch stores"`.
    pub async fn list_stores(
        &self,
        category: &CategoryFilter,
        query: &str,
    ) -> Result<StoreListResponse, GatewayError> {
        let op = Operation::ListStores;
        let mut url = self.endpoint(op, "stores")?;
        if category.as_param().is_some() || !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if let Some(category) = category.as_param() {
                pairs.append_pair("type", category);
            }
            if !query.is_empty() {
                pairs.append_pair("query", query);
            }
        }

        let response: StoreListResponse = self.execute(op, self.client.get(url)).await?;
        tracing::debug!(
            total = response.total,
            returned = response.stores.len(),
            "fetched stores"
        );
        Ok(response)
    }

    /// Lists the store categories known to the backend.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] whose message is the server's error text or
    /// `"Failed to fetch store types"`.
    pub async fn list_categories(&self) -> Result<CategoriesResponse, GatewayError> {
        let op = Operation::ListCategories;
        let url = self.endpoint(op, "store-types")?;
        self.execute(op, self.client.get(url)).await
    }

    /// Fetches aggregate counters computed by the backend.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] whose message is the server's error text or
    /// `"Failed to fetch analytics"`.
    pub async fn fetch_analytics(&self) -> Result<StoreAnalytics, GatewayError> {
        let op = Operation::FetchAnalytics;
        let url = self.endpoint(op, "analytics")?;
        self.execute(op, self.client.get(url)).await
    }

    /// Submits user feedback.
    ///
    /// The payload is validated first; an invalid payload never reaches the
    /// network.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] for an invalid payload, or a
    /// [`GatewayError`] whose message is the server's error text or
    /// `"Failed to submit feedback"`.
    pub async fn submit_feedback(
        &self,
        payload: &FeedbackPayload,
    ) -> Result<FeedbackReceipt, GatewayError> {
        payload
            .validate()
            .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;

        let op = Operation::SubmitFeedback;
        let url = self.endpoint(op, "feedback")?;
        self.execute(op, self.client.post(url).json(payload)).await
    }

    fn endpoint(&self, op: Operation, path: &str) -> Result<Url, GatewayError> {
        self.base_url.join(path).map_err(|e| {
            GatewayError::Config(format!(
                "{}: invalid endpoint '{path}': {e}",
                op.fallback_message()
            ))
        })
    }

    /// Sends `request` and decodes a success body as `T`.
    ///
    /// Non-success responses are turned into [`GatewayError::Status`] using
    /// the error text from the body when present.
    async fn execute<T: DeserializeOwned>(
        &self,
        op: Operation,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        tracing::debug!(op = op.name(), "sending store API request");

        let response = request.send().await.map_err(|source| {
            tracing::warn!(op = op.name(), error = %source, "store API request failed");
            GatewayError::Transport {
                message: format!("{}: {source}", op.fallback_message()),
                source,
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| GatewayError::Transport {
            message: format!("{}: {source}", op.fallback_message()),
            source,
        })?;

        if !status.is_success() {
            let message =
                extract_error_message(&body).unwrap_or_else(|| op.fallback_message().to_owned());
            tracing::warn!(
                op = op.name(),
                status = status.as_u16(),
                error_message = %message,
                "store API returned an error status"
            );
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(op = op.name(), error = %source, "store API response did not decode");
            GatewayError::Decode {
                message: format!("{}: unexpected response body", op.fallback_message()),
                source,
            }
        })
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Understands `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`. Returns `None` for empty or unstructured bodies.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = match value.get("error") {
        Some(serde_json::Value::String(text)) => Some(text.as_str()),
        Some(nested) => nested.get("message").and_then(serde_json::Value::as_str),
        None => value.get("message").and_then(serde_json::Value::as_str),
    }?;
    let trimmed = message.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
