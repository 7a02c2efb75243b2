//! HTTP client for the restaurant backend REST API.
//!
//! Wraps `reqwest` with status mapping, retry on transient failures, typed
//! response deserialization and a bearer token kept in the local key-value
//! store.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tablescout_core::{AppConfig, KeyValueStore, Listing};

use crate::error::ApiError;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::types::{LoginRequest, LoginResponse, RegisterRequest, RestaurantQuery, TOKEN_KEY};

/// Client for the restaurant backend.
///
/// Use [`ApiClient::from_config`] in the binary or [`ApiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    store: Arc<dyn KeyValueStore>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if the configured URL
    /// does not parse.
    pub fn from_config(
        config: &AppConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ApiError> {
        Ok(
            Self::with_base_url(&config.api_base_url, config.request_timeout_secs, store)?
                .with_retry(config.max_retries, config.retry_backoff_base_ms),
        )
    }

    /// Creates a client with no retries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tablescout/0.1")
            .default_headers(headers)
            .build()?;

        // Exactly one trailing slash so `Url::join` appends to the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        tracing::debug!(base_url = %parsed, "API client ready");
        Ok(Self {
            client,
            base_url: parsed,
            store,
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/restaurants` with the set filters as query parameters.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure after all retries.
    /// - [`ApiError::UnexpectedStatus`] on any non-2xx status other than 404.
    /// - [`ApiError::Deserialize`] if the body is not a list of restaurants.
    pub async fn list_restaurants(
        &self,
        query: &RestaurantQuery,
    ) -> Result<Vec<Listing>, ApiError> {
        let url = self.endpoint("api/restaurants", &query.pairs())?;
        self.send(Method::GET, url, None::<&()>).await
    }

    /// `GET /api/restaurants/{id}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the backend has no such restaurant, plus
    /// the failures listed on [`ApiClient::list_restaurants`].
    pub async fn get_restaurant(&self, id: &str) -> Result<Listing, ApiError> {
        let mut url = self.endpoint("api/restaurants", &[])?;
        // Pushing a segment percent-encodes ids containing '/' or '?'.
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_owned(),
            })?
            .push(id);
        self.send(Method::GET, url, None::<&()>).await
    }

    /// `GET /api/recommendations`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::list_restaurants`].
    pub async fn get_recommendations(&self) -> Result<Vec<Listing>, ApiError> {
        let url = self.endpoint("api/recommendations", &[])?;
        self.send(Method::GET, url, None::<&()>).await
    }

    /// `POST /api/auth/login`. A returned `access_token` is stored under
    /// [`TOKEN_KEY`] and sent as a bearer token from then on.
    ///
    /// # Errors
    ///
    /// Request failures as on [`ApiClient::list_restaurants`], or
    /// [`ApiError::Storage`] if the token cannot be saved.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("api/auth/login", &[])?;
        let response: LoginResponse = self
            .send(Method::POST, url, Some(&LoginRequest { email, password }))
            .await?;
        if let Some(token) = &response.access_token {
            self.store.set(TOKEN_KEY, token)?;
            tracing::info!(%email, "API token stored");
        }
        Ok(response)
    }

    /// `POST /register`. The body is returned as-is.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::list_restaurants`].
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint("register", &[])?;
        self.send(
            Method::POST,
            url,
            Some(&RegisterRequest {
                email,
                password,
                name,
            }),
        )
        .await
    }

    /// Forgets the stored bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the store cannot be written.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.store.remove(TOKEN_KEY)?;
        Ok(())
    }

    /// `true` when a bearer token is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the store cannot be read.
    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        Ok(self.token()?.is_some())
    }

    fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.store.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends one request with retry, maps the status, and parses the body.
    ///
    /// Only idempotent methods are retried after the backend answered.
    async fn send<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let token = self.token()?;
        let policy = RetryPolicy {
            max_retries: self.max_retries,
            backoff_base_ms: self.backoff_base_ms,
            idempotent: method.is_idempotent(),
        };
        retry_with_backoff(policy, || {
            let method = method.clone();
            let url = url.clone();
            let token = token.clone();
            async move {
                tracing::debug!(%method, %url, "API request");
                let mut request = self.client.request(method, url.clone());
                if let Some(token) = token {
                    request = request.bearer_auth(token);
                }
                if let Some(body) = body {
                    request = request.json(body);
                }

                let response = request.send().await?;
                let status = response.status();
                tracing::debug!(%url, status = status.as_u16(), "API response");

                if status == StatusCode::NOT_FOUND {
                    return Err(ApiError::NotFound {
                        url: url.to_string(),
                    });
                }
                if !status.is_success() {
                    return Err(ApiError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let text = response.text().await?;
                serde_json::from_str(&text).map_err(|e| ApiError::Deserialize {
                    context: url.to_string(),
                    source: e,
                })
            }
        })
        .await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
