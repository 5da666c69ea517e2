//! Roster HTTP client.

use crate::error::{ClientError, Result};
use crate::types::{CreateOutcome, HealthInfo};
use reqwest::{header, Client, Response, StatusCode};
use roster_core::{CreateUser, User, UserId};
use std::time::Duration;
use tracing::debug;

/// Client for the `/users` resource of a Roster server.
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: Client,
    base_url: String,
}

impl RosterClient {
    /// Create a new client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("roster-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized server URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the server is up.
    pub async fn health(&self) -> Result<HealthInfo> {
        let response = self.send(self.http.get(self.url("/health"))).await?;

        match response.status() {
            StatusCode::OK => parse_json(response).await,
            _ => Err(unexpected(response).await),
        }
    }

    /// `GET /users`
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.send(self.http.get(self.url("/users"))).await?;

        match response.status() {
            StatusCode::OK => parse_json(response).await,
            _ => Err(unexpected(response).await),
        }
    }

    /// `GET /users/{id}`. A 204 answer means no such user.
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let response = self
            .send(self.http.get(self.url(&format!("/users/{id}"))))
            .await?;

        match response.status() {
            StatusCode::OK => parse_json(response).await.map(Some),
            StatusCode::NO_CONTENT => Ok(None),
            _ => Err(unexpected(response).await),
        }
    }

    /// `POST /users`
    pub async fn create_user(&self, user: &CreateUser) -> Result<CreateOutcome> {
        let request = self
            .http
            .post(self.url("/users"))
            .header(header::ACCEPT, "application/json")
            .json(user);
        let response = self.send(request).await?;

        match response.status() {
            StatusCode::CREATED => {
                let body = response.bytes().await?;
                if body.is_empty() {
                    return Ok(CreateOutcome::Created(None));
                }
                let saved = serde_json::from_slice(&body)
                    .map_err(|e| ClientError::Parse(format!("Failed to parse user: {}", e)))?;
                Ok(CreateOutcome::Created(Some(saved)))
            }
            StatusCode::CONFLICT => Ok(CreateOutcome::Conflict),
            _ => Err(unexpected(response).await),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        debug!(url = %response.url(), status = %response.status(), "Roster response");
        Ok(response)
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

async fn unexpected(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    ClientError::UnexpectedStatus { status, message }
}
