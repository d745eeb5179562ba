/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Authentication against the ZeAuth login endpoint
//!
//! Tokens are acquired lazily: nothing happens at construction time, and the
//! first call that needs a token performs a single login round-trip. The token
//! is cached for the lifetime of the instance; there is no expiry tracking and
//! no refresh. Token state is strictly per-instance, never shared across
//! clients or process-wide.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Successful ZeAuth login response
///
/// Only the token field is read; the rest of the body is ignored.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// Per-instance authentication manager
///
/// Holds the cached bearer token behind an async mutex. The mutex is held
/// across the login round-trip, so concurrent first calls on one instance
/// serialize and at most one login request is ever issued per instance.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: Mutex<Option<String>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the ZeAuth base URL
    pub fn new(config: Arc<Config>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            token: Mutex::new(None),
        }
    }

    /// Returns the bearer token, logging in first if none is cached
    ///
    /// # Returns
    /// * `Ok(String)` - Cached or freshly acquired token
    /// * `Err(AppError)` - If the login round-trip fails; nothing is cached
    pub async fn bearer(&self) -> Result<String, AppError> {
        let mut token = self.token.lock().await;

        if let Some(t) = token.as_ref() {
            return Ok(t.clone());
        }

        debug!("No cached token, logging in");
        let fresh = self.login().await?;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// Performs the login round-trip against ZeAuth
    ///
    /// Sends the configured credentials as `{email, password}` JSON to
    /// `/login` and extracts `accessToken` from the 200 response.
    async fn login(&self) -> Result<String, AppError> {
        let url = format!("{}/login", self.config.zeauth_base_url);

        let body = serde_json::json!({
            "email": self.config.credentials.username,
            "password": self.config.credentials.password,
        });

        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::AuthFailed { status, body });
        }

        let text = response.text().await?;
        let login: LoginResponse = serde_json::from_str(&text)?;

        info!("Login successful");
        Ok(login.access_token)
    }
}
