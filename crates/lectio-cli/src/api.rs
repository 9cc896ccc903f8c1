//! Lectio API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Lectio
pub struct LectioClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub version: String,
    pub plan: String,
    pub reading_order: String,
    pub delivery_time: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryResponse {
    pub reading_id: Uuid,
    pub reference: String,
    pub text: String,
    pub reused: bool,
    pub dispatched: bool,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmResponse {
    pub reading_id: Uuid,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadingResponse {
    pub id: Uuid,
    pub assigned_on: String,
    pub reference: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReadingHistoryResponse {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub readings: Vec<ReadingResponse>,
}

#[derive(Debug, Deserialize)]
pub struct VersionResponse {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PlanResponse {
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    phone: &'a str,
    password: &'a str,
}

impl LectioClient {
    /// Create a new API client; `token` authorizes protected routes
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(|t| t.to_string()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let resp = builder
            .send()
            .await
            .context("Failed to connect to Lectio API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// Register a new user
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserResponse> {
        self.execute(self.client.post(self.url("/register")).json(request))
            .await
    }

    /// Log in and receive a session token
    pub async fn login(&self, phone: &str, password: &str) -> Result<LoginResponse> {
        let request = LoginRequest { phone, password };
        self.execute(self.client.post(self.url("/auth/login")).json(&request))
            .await
    }

    /// Get the logged-in user's profile
    pub async fn get_user(&self, user_id: Uuid) -> Result<UserResponse> {
        let builder = self.client.get(self.url(&format!("/users/{}", user_id)));
        self.execute(self.authorized(builder)).await
    }

    /// Look up a user by phone number
    pub async fn get_user_by_phone(&self, phone: &str) -> Result<UserResponse> {
        let encoded = urlencoding::encode(phone);
        let builder = self
            .client
            .get(self.url(&format!("/users/by-phone/{}", encoded)));
        self.execute(self.authorized(builder)).await
    }

    /// Update the logged-in user's preferences
    pub async fn update_user(&self, user_id: Uuid, request: &UpdateRequest) -> Result<UserResponse> {
        let builder = self
            .client
            .put(self.url(&format!("/users/{}", user_id)))
            .json(request);
        self.execute(self.authorized(builder)).await
    }

    /// Trigger today's delivery for a user
    pub async fn deliver(&self, user_id: Uuid) -> Result<DeliveryResponse> {
        self.execute(
            self.client
                .post(self.url(&format!("/users/{}/deliver", user_id))),
        )
        .await
    }

    /// Get the logged-in user's reading history
    pub async fn history(&self, user_id: Uuid) -> Result<ReadingHistoryResponse> {
        let builder = self
            .client
            .get(self.url(&format!("/users/{}/readings", user_id)));
        self.execute(self.authorized(builder)).await
    }

    /// Confirm a reading as completed
    pub async fn confirm(&self, reading_id: Uuid) -> Result<ConfirmResponse> {
        self.execute(
            self.client
                .post(self.url(&format!("/readings/{}/confirm", reading_id))),
        )
        .await
    }

    /// List available Bible versions
    pub async fn versions(&self) -> Result<Vec<VersionResponse>> {
        self.execute(self.client.get(self.url("/catalog/versions")))
            .await
    }

    /// List available reading plans
    pub async fn plans(&self) -> Result<Vec<PlanResponse>> {
        self.execute(self.client.get(self.url("/catalog/plans")))
            .await
    }
}
