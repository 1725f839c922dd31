//! HTTP client for the platform backend REST API.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use goodfood_core::Page;

use crate::config::BackendConfig;

use super::{ListQuery, RawEnvelope, UpstreamError};

/// Backend API client.
///
/// Cheap to clone (shared inner). Holds no credential: every call receives
/// the caller's bearer token, taken from the request cookies by the routes.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    /// Build and send a request with the caller's bearer token attached.
    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        query: Option<&ListQuery>,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, UpstreamError> {
        let mut request = self.inner.client.request(method, self.url(path));

        if let Some(token) = token {
            let header = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| UpstreamError::InvalidToken)?;
            request = request.header(AUTHORIZATION, header);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Turn a backend response into JSON, converting non-success statuses
    /// into a relayable [`UpstreamError::Status`].
    ///
    /// Mirrors the panel's uniform error relay: a non-2xx response with a
    /// parseable `message` keeps that message; a non-JSON body is wrapped
    /// into a generic backend error description.
    async fn relay(response: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| format!("Erreur backend: {} - {body}", status.as_u16()));

        Err(UpstreamError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// GET a listing endpoint and normalize its envelope into a [`Page`].
    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, UpstreamError> {
        let response = self
            .send(Method::GET, path, Some(token), Some(query), None)
            .await?;
        let body = Self::relay(response).await?;
        let envelope: RawEnvelope<T> = serde_json::from_value(body)?;
        Ok(envelope.normalize(query))
    }

    async fn get(&self, path: &str, token: &str) -> Result<Value, UpstreamError> {
        let response = self.send(Method::GET, path, Some(token), None, None).await?;
        Self::relay(response).await
    }

    async fn post(&self, path: &str, token: &str, body: &Value) -> Result<Value, UpstreamError> {
        let response = self
            .send(Method::POST, path, Some(token), None, Some(body))
            .await?;
        Self::relay(response).await
    }

    async fn patch(&self, path: &str, token: &str) -> Result<Value, UpstreamError> {
        let response = self
            .send(Method::PATCH, path, Some(token), None, None)
            .await?;
        Self::relay(response).await
    }

    async fn patch_json(
        &self,
        path: &str,
        token: &str,
        body: &Value,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .send(Method::PATCH, path, Some(token), None, Some(body))
            .await?;
        Self::relay(response).await
    }

    async fn delete(&self, path: &str, token: &str) -> Result<Value, UpstreamError> {
        let response = self
            .send(Method::DELETE, path, Some(token), None, None)
            .await?;
        Self::relay(response).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// POST `administrateur/api/auth/login` (the only unauthenticated call).
    pub async fn login(&self, body: &Value) -> Result<Value, UpstreamError> {
        let response = self
            .send(Method::POST, "administrateur/api/auth/login", None, None, Some(body))
            .await?;
        Self::relay(response).await
    }

    /// GET `administrateur/api/auth/status` - the "who am I" call.
    pub async fn auth_status(&self, token: &str) -> Result<Value, UpstreamError> {
        self.get("administrateur/api/auth/status", token).await
    }

    /// POST `administrateur/api/auth/change-password`.
    pub async fn change_password(&self, token: &str, body: &Value) -> Result<Value, UpstreamError> {
        self.post("administrateur/api/auth/change-password", token, body)
            .await
    }

    // =========================================================================
    // Platform users (restaurateur surface)
    // =========================================================================

    pub async fn list_users<T: DeserializeOwned>(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, UpstreamError> {
        self.list("restaurateur/api/users", token, query).await
    }

    pub async fn get_user(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.get(&format!("restaurateur/api/users/{id}"), token).await
    }

    pub async fn suspend_user(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.patch(&format!("restaurateur/api/users/{id}/suspend"), token)
            .await
    }

    pub async fn restore_user(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.patch(&format!("restaurateur/api/users/{id}/restore"), token)
            .await
    }

    pub async fn verify_user(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.get(&format!("restaurateur/api/users/verify/{id}"), token)
            .await
    }

    // =========================================================================
    // Admin users (administrateur surface, super-admin only)
    // =========================================================================

    pub async fn list_admin_users<T: DeserializeOwned>(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, UpstreamError> {
        self.list("administrateur/api/users", token, query).await
    }

    pub async fn create_admin_user(&self, token: &str, body: &Value) -> Result<Value, UpstreamError> {
        self.post("administrateur/api/users", token, body).await
    }

    pub async fn get_admin_user(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.get(&format!("administrateur/api/users/{id}"), token).await
    }

    pub async fn update_admin_user(
        &self,
        token: &str,
        id: i64,
        body: &Value,
    ) -> Result<Value, UpstreamError> {
        self.patch_json(&format!("administrateur/api/users/{id}"), token, body)
            .await
    }

    pub async fn delete_admin_user(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.delete(&format!("administrateur/api/users/{id}"), token)
            .await
    }

    pub async fn suspend_admin_user(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.patch(&format!("administrateur/api/users/{id}/suspend"), token)
            .await
    }

    pub async fn restore_admin_user(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.patch(&format!("administrateur/api/users/{id}/restore"), token)
            .await
    }

    // =========================================================================
    // Delivery users
    // =========================================================================

    pub async fn list_delivery_users<T: DeserializeOwned>(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, UpstreamError> {
        self.list("delivery/api/users", token, query).await
    }

    // =========================================================================
    // Restaurants
    // =========================================================================

    pub async fn list_restaurants<T: DeserializeOwned>(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, UpstreamError> {
        self.list("restaurateur/api/restaurant", token, query).await
    }

    pub async fn create_restaurant(&self, token: &str, body: &Value) -> Result<Value, UpstreamError> {
        self.post("restaurateur/api/restaurant", token, body).await
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    pub async fn list_reviews<T: DeserializeOwned>(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, UpstreamError> {
        self.list("restaurateur/api/client-review-restaurant", token, query)
            .await
    }

    pub async fn restaurant_reviews<T: DeserializeOwned>(
        &self,
        token: &str,
        restaurant_id: i64,
        query: &ListQuery,
    ) -> Result<Page<T>, UpstreamError> {
        self.list(
            &format!("restaurateur/api/client-review-restaurant/{restaurant_id}"),
            token,
            query,
        )
        .await
    }

    pub async fn get_review(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.get(&format!("restaurateur/api/client-review-restaurant/{id}"), token)
            .await
    }

    pub async fn update_review(
        &self,
        token: &str,
        id: i64,
        body: &Value,
    ) -> Result<Value, UpstreamError> {
        self.patch_json(
            &format!("restaurateur/api/client-review-restaurant/{id}"),
            token,
            body,
        )
        .await
    }

    pub async fn delete_review(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.delete(&format!("restaurateur/api/client-review-restaurant/{id}"), token)
            .await
    }

    pub async fn suspend_review(&self, token: &str, id: i64) -> Result<Value, UpstreamError> {
        self.patch(
            &format!("restaurateur/api/client-review-restaurant/{id}/suspend"),
            token,
        )
        .await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    pub async fn list_orders<T: DeserializeOwned>(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, UpstreamError> {
        self.list("restaurateur/api/orders", token, query).await
    }

    // =========================================================================
    // Uploads
    // =========================================================================

    /// GET an uploaded file as raw bytes plus its content type.
    ///
    /// Uploads are public assets; no bearer token is attached.
    pub async fn fetch_upload(&self, path: &str) -> Result<(String, Vec<u8>), UpstreamError> {
        let response = self
            .send(
                Method::GET,
                &format!("restaurateur/api/uploads/{path}"),
                None,
                None,
                None,
            )
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: "Fichier non trouvé".to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = response.bytes().await?.to_vec();
        Ok((content_type, bytes))
    }
}
