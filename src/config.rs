/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Configuration for the Ze backend services
//!
//! Values are read from the process environment, with a `.env` file loaded
//! first if present. Credentials are read-only after load; clients hold the
//! configuration behind an `Arc` and never mutate it.

use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Service-account credentials used for the ZeAuth login call
pub struct Credentials {
    /// Username (sent as `email` on the wire)
    pub username: String,
    /// Password for the service account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Ze client
pub struct Config {
    /// Authentication credentials for the data service
    pub credentials: Credentials,
    /// Base URL of the data (CRUD) service
    pub database_base_url: String,
    /// Base URL of the ZeAuth service (login and default endpoints)
    pub zeauth_base_url: String,
    /// Base URL of the ZeCommon file/asset service
    pub zecommon_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration instance from the environment
    ///
    /// Loads `.env` first, then reads `DATABASE_BASE_URL`, `ZEAUTH_BASE_URL`,
    /// `ZECOMMON_BASE_URL`, `AUTH_USERNAME` and `AUTH_PASSWORD`. Missing
    /// credentials are logged as errors but do not fail construction; the
    /// first authenticated call will fail instead.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("AUTH_USERNAME", String::new());
        let password = get_env_or_default("AUTH_PASSWORD", String::new());

        if username.is_empty() {
            error!("AUTH_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("AUTH_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            database_base_url: get_env_or_default(
                "DATABASE_BASE_URL",
                String::from("http://localhost:8080"),
            ),
            zeauth_base_url: get_env_or_default(
                "ZEAUTH_BASE_URL",
                String::from("http://localhost:8081"),
            ),
            zecommon_base_url: get_env_or_default(
                "ZECOMMON_BASE_URL",
                String::from("http://localhost:8082"),
            ),
        }
    }

    /// Creates a configuration with explicit values, bypassing the environment
    ///
    /// Intended for tests and embedders that resolve configuration themselves.
    pub fn with_values(
        username: impl Into<String>,
        password: impl Into<String>,
        database_base_url: impl Into<String>,
        zeauth_base_url: impl Into<String>,
        zecommon_base_url: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            database_base_url: database_base_url.into(),
            zeauth_base_url: zeauth_base_url.into(),
            zecommon_base_url: zecommon_base_url.into(),
        }
    }
}
