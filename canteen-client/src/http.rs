//! HTTP client for the canteen REST API

use crate::wire::OrderRequest;
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::client::{AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest};
use shared::models::{MenuEntry, MenuEntryCreate, MenuEntryUpdate};
use shared::order::{CreatedOrder, OrderPayload};

/// HTTP client for the canteen backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let request = match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        };
        let response = request.send().await?;
        Self::check_status(response).await
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let response = self.send(self.client.get(self.url(path))).await?;
        Self::parse(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        Self::parse(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        tracing::debug!(path, "PUT");
        let response = self.send(self.client.put(self.url(path)).json(body)).await?;
        Self::parse(response).await
    }

    /// Make a DELETE request; the response body is ignored
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        tracing::debug!(path, "DELETE");
        self.send(self.client.delete(self.url(path))).await?;
        Ok(())
    }

    /// Turn a non-success status into an error carrying the backend's
    /// `{ message }` (or the raw body when it is not JSON)
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<MessageResponse>(&text)
            .map(|m| m.message)
            .ok()
            .filter(|m| !m.is_empty())
            .or_else(|| Some(text.trim().to_string()).filter(|t| !t.is_empty()))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

        tracing::warn!(status = status.as_u16(), message = %message, "Backend returned an error");
        Err(ClientError::from_status(status, message))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login; the returned token is kept for later requests
    pub async fn login(&mut self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        let auth: AuthResponse = self.post("auth/login", request).await?;
        self.token = Some(auth.token.clone());
        tracing::info!(email = %auth.email, role = %auth.role, "Logged in");
        Ok(auth)
    }

    /// Register a new account; the returned token is kept for later requests
    pub async fn register(&mut self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        let auth: AuthResponse = self.post("auth/register", request).await?;
        self.token = Some(auth.token.clone());
        tracing::info!(email = %auth.email, role = %auth.role, "Registered");
        Ok(auth)
    }

    /// Ask the backend to send a password reset link
    pub async fn forgot_password(&self, email: &str) -> ClientResult<MessageResponse> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.post("auth/forgotpassword", &request).await
    }

    /// Drop the token
    pub fn logout(&mut self) {
        self.token = None;
    }

    // ========== Food API ==========

    pub async fn list_food(&self) -> ClientResult<Vec<MenuEntry>> {
        self.get("food").await
    }

    pub async fn create_food(&self, entry: &MenuEntryCreate) -> ClientResult<MenuEntry> {
        self.post("food", entry).await
    }

    pub async fn update_food(&self, id: &str, update: &MenuEntryUpdate) -> ClientResult<MenuEntry> {
        self.put(&format!("food/{}", id), update).await
    }

    pub async fn delete_food(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("food/{}", id)).await
    }

    // ========== Order API ==========

    pub async fn create_order(&self, payload: &OrderPayload) -> ClientResult<CreatedOrder> {
        self.post("orders", &OrderRequest::from(payload)).await
    }
}
