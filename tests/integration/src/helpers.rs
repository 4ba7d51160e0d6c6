//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, seeding storage, minting
//! tokens and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use mastera_api::{build_app_state, create_app};
use mastera_common::{AppConfig, JwtService};
use mastera_core::{UserId, Work, WorkRepository};
use mastera_db::{InMemoryReactionRepository, InMemoryWorkRepository};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::Envelope;

/// Secret shared by the test server and `TestServer::token`
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    works: Arc<InMemoryWorkRepository>,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config(&[])?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let works = Arc::new(InMemoryWorkRepository::new());
        let reactions = Arc::new(InMemoryReactionRepository::new());
        let jwt = JwtService::new(&config.auth.jwt_secret);

        let state = build_app_state(config, works.clone(), reactions)?;
        let app = create_app(state)?;

        // Ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            works,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Insert a work directly into storage
    pub async fn seed(&self, work: Work) -> Result<Work> {
        self.works.create(&work).await?;
        Ok(work)
    }

    /// Mint a bearer token the server accepts
    pub fn token(&self, user_id: &str, role: Option<&str>) -> Result<String> {
        Ok(self.jwt.issue_token(&UserId::new(user_id)?, role)?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }
}

/// Memory-backed configuration with generous rate limits
///
/// `overrides` replace or add environment entries.
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<String, String> = [
        ("API_PORT", "0"),
        ("STORAGE_BACKEND", "memory"),
        ("AUTH_JWT_SECRET", TEST_JWT_SECRET),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000"),
        ("RATE_LIMIT_BURST", "1000"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (key, value) in overrides {
        vars.insert((*key).to_string(), (*value).to_string());
    }

    AppConfig::from_map(&vars).map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and unwrap the envelope's `data`
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let envelope: Envelope<T> = assert_envelope(response, expected_status).await?;
    if !envelope.success {
        anyhow::bail!("Expected success envelope, got error {:?}", envelope.error);
    }
    envelope
        .data
        .ok_or_else(|| anyhow::anyhow!("Envelope has no data"))
}

/// Assert response status and return the error code from the envelope
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let envelope: Envelope<serde_json::Value> = assert_envelope(response, expected_status).await?;
    if envelope.success {
        anyhow::bail!("Expected error envelope, got success");
    }
    envelope
        .error
        .map(|e| e.code)
        .ok_or_else(|| anyhow::anyhow!("Envelope has no error"))
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

async fn assert_envelope<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<Envelope<T>> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(serde_json::from_str(&body)?)
}
