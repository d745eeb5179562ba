/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Authenticated CRUD client for the data service
//!
//! A [`DataClient`] is bound to one resource route (e.g. `"user"`) at
//! construction and only ever issues requests for that route. Every operation
//! transparently attaches a bearer token obtained from ZeAuth; the first call
//! on an instance performs the login round-trip, later calls reuse the cached
//! token (see [`crate::auth`]).
//!
//! Success is determined by one exact expected status code per operation. Any
//! other status fails the call with [`AppError::RequestFailed`] carrying the
//! status and the raw body text; there is no retry and no status-specific
//! handling.
//!
//! # Example
//! ```ignore
//! let config = Config::new();
//! let orders = DataClient::new("order", config);
//!
//! let created = orders.create(serde_json::json!({"total": 42})).await?;
//! let fetched = orders.get(id).await?;
//! ```

use crate::auth::Auth;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

/// CRUD client bound to a single resource route of the data service
pub struct DataClient {
    route: String,
    config: Arc<Config>,
    http_client: Client,
    auth: Auth,
}

impl DataClient {
    /// Creates a new client for the given resource route
    ///
    /// No network traffic happens here; authentication is deferred until the
    /// first operation.
    ///
    /// # Arguments
    /// * `route` - Resource family name, e.g. `"user"` or `"order"`
    /// * `config` - Configuration with base URLs and credentials
    pub fn new(route: impl Into<String>, config: Config) -> Self {
        let config = Arc::new(config);
        let auth = Auth::new(config.clone());

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            route: route.into(),
            config,
            http_client,
            auth,
        }
    }

    /// Returns the resource route this client is bound to
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Fetches a single resource by id
    ///
    /// Expects 200 and returns the parsed body.
    pub async fn get(&self, id: Uuid) -> Result<Value, AppError> {
        let bearer = self.bearer_header().await?;
        let url = self.item_url();
        let id_param = self.id_param();

        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .header("Authorization", bearer)
            .query(&[(id_param.as_str(), id.to_string())])
            .send()
            .await?;

        self.json_body(response, StatusCode::OK, "GET").await
    }

    /// Fetches one page of resources
    ///
    /// Expects 200 and returns the parsed body.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `page_size` - Number of items per page
    pub async fn list(&self, page: u32, page_size: u32) -> Result<Value, AppError> {
        let bearer = self.bearer_header().await?;
        let url = self.collection_url();

        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .header("Authorization", bearer)
            .query(&[("page", page), ("size", page_size)])
            .send()
            .await?;

        self.json_body(response, StatusCode::OK, "LIST").await
    }

    /// Creates a resource from the given payload
    ///
    /// The payload is forwarded verbatim. Expects 201 and returns the parsed
    /// body.
    pub async fn create(&self, payload: Value) -> Result<Value, AppError> {
        let bearer = self.bearer_header().await?;
        let url = self.collection_url();

        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Accept", "application/json")
            .header("Authorization", bearer)
            .json(&payload)
            .send()
            .await?;

        self.json_body(response, StatusCode::CREATED, "CREATE").await
    }

    /// Replaces a resource by id with the given payload
    ///
    /// Expects 201 and returns the parsed body.
    pub async fn update(&self, id: Uuid, payload: Value) -> Result<Value, AppError> {
        let bearer = self.bearer_header().await?;
        let url = self.item_url();
        let id_param = self.id_param();

        debug!("PUT {}", url);

        let response = self
            .http_client
            .put(&url)
            .header("Accept", "application/json")
            .header("Authorization", bearer)
            .query(&[(id_param.as_str(), id.to_string())])
            .json(&payload)
            .send()
            .await?;

        self.json_body(response, StatusCode::CREATED, "UPDATE").await
    }

    /// Deletes a resource by id
    ///
    /// Expects 204 and returns `true`; any other status is an error, so this
    /// never returns `false`.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let bearer = self.bearer_header().await?;
        let url = self.item_url();
        let id_param = self.id_param();

        debug!("DELETE {}", url);

        let response = self
            .http_client
            .delete(&url)
            .header("Accept", "application/json")
            .header("Authorization", bearer)
            .query(&[(id_param.as_str(), id.to_string())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            error!("DELETE failed with status {}: {}", status, body);
            return Err(AppError::RequestFailed { status, body });
        }

        Ok(true)
    }

    /// Runs a structured query against the route's query endpoint
    ///
    /// Expects 200 and returns the `data` field of the response body, or an
    /// empty array when the backend omits it. Never returns null.
    pub async fn query(&self, payload: Value) -> Result<Value, AppError> {
        let bearer = self.bearer_header().await?;
        let url = format!("{}/{}/q", self.config.database_base_url, self.route);

        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Accept", "application/json")
            .header("Authorization", bearer)
            .json(&payload)
            .send()
            .await?;

        let body = self.json_body(response, StatusCode::OK, "QUERY").await?;
        Ok(body
            .get("data")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    /// Posts a string to the route's default endpoint on ZeAuth
    ///
    /// The string travels as the `str_for_dec` query parameter; there is no
    /// request body. Expects 200 and returns the parsed body.
    pub async fn post_data(&self, str_for_dec: &str) -> Result<Value, AppError> {
        let bearer = self.bearer_header().await?;
        let url = format!("{}/{}", self.config.zeauth_base_url, self.route);

        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Accept", "application/json")
            .header("Authorization", bearer)
            .query(&[("str_for_dec", str_for_dec)])
            .send()
            .await?;

        self.json_body(response, StatusCode::OK, "POST").await
    }

    /// Composes the Authorization header value, logging in on first use
    async fn bearer_header(&self) -> Result<String, AppError> {
        let token = self.auth.bearer().await?;
        Ok(format!("Bearer {token}"))
    }

    /// Collection URL: `{base}/{route}s/`
    fn collection_url(&self) -> String {
        format!("{}/{}s/", self.config.database_base_url, self.route)
    }

    /// Item URL: `{base}/{route}s/{route}_id`
    ///
    /// The trailing `{route}_id` path segment is literal (e.g. `/users/user_id`);
    /// the actual id travels in the query parameter of the same name. Backend
    /// routing quirk, preserved for wire compatibility.
    fn item_url(&self) -> String {
        format!(
            "{}/{}s/{}_id",
            self.config.database_base_url, self.route, self.route
        )
    }

    /// Query parameter name carrying the id for item operations
    fn id_param(&self) -> String {
        format!("{}_id", self.route)
    }

    /// Checks the expected status and parses the body as JSON
    async fn json_body(
        &self,
        response: Response,
        expected: StatusCode,
        op: &str,
    ) -> Result<Value, AppError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if status != expected {
            let body = response.text().await.unwrap_or_default();
            error!("{} failed with status {}: {}", op, status, body);
            return Err(AppError::RequestFailed { status, body });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
