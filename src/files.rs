/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Anonymous asset client for the ZeCommon file service
//!
//! ZeCommon does not require a token, so a [`FilesClient`] never performs an
//! authentication step. The error-mapping policy is the same as for the data
//! client: one exact expected status per operation, anything else fails with
//! [`AppError::RequestFailed`].

use crate::config::Config;
use crate::constants::{UPLOAD_FILE_FIELD, UPLOAD_FILE_NAME, USER_AGENT};
use crate::error::AppError;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

/// File/asset client bound to a single ZeCommon route
pub struct FilesClient {
    route: String,
    config: Arc<Config>,
    http_client: Client,
}

impl FilesClient {
    /// Creates a new client for the given asset route
    ///
    /// # Arguments
    /// * `route` - Asset family name, typically `"asset"`
    /// * `config` - Configuration with the ZeCommon base URL
    pub fn new(route: impl Into<String>, config: Config) -> Self {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            route: route.into(),
            config: Arc::new(config),
            http_client,
        }
    }

    /// Returns the asset route this client is bound to
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Downloads the raw content of an uploaded file or image
    ///
    /// Expects 200 and returns the response bytes unparsed.
    pub async fn get_asset(&self, id: Uuid) -> Result<Bytes, AppError> {
        let url = self.asset_url(id);

        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .query(&[("id", id.to_string())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("GET_ASSET failed with status {}: {}", status, body);
            return Err(AppError::RequestFailed { status, body });
        }

        Ok(response.bytes().await?)
    }

    /// Fetches the stored metadata of a file
    ///
    /// Expects 200 and returns the parsed body.
    pub async fn get_file_info(&self, id: Uuid) -> Result<Value, AppError> {
        let url = self.asset_url(id);

        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        self.json_body(response, StatusCode::OK, "GET_FILE_INFO")
            .await
    }

    /// Uploads a file as multipart form data
    ///
    /// The file is read fully into memory first; an unreadable path fails with
    /// [`AppError::Io`] before any network call. Entries of `extra_fields` are
    /// sent as additional text parts, string values as their bare text and
    /// anything else in JSON notation. Expects 200 and returns the parsed
    /// body.
    ///
    /// # Arguments
    /// * `file_path` - Path of the local file to upload
    /// * `extra_fields` - Optional form fields sent alongside the file
    pub async fn upload(
        &self,
        file_path: impl AsRef<Path>,
        extra_fields: Option<Map<String, Value>>,
    ) -> Result<Value, AppError> {
        let content = tokio::fs::read(file_path).await?;

        let mut form = Form::new().part(
            UPLOAD_FILE_FIELD,
            Part::bytes(content).file_name(UPLOAD_FILE_NAME),
        );

        for (key, value) in extra_fields.unwrap_or_default() {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            form = form.text(key, text);
        }

        let url = format!("{}/{}/", self.config.zecommon_base_url, self.route);

        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Accept", "application/json")
            .multipart(form)
            .send()
            .await?;

        self.json_body(response, StatusCode::OK, "UPLOAD").await
    }

    /// Deletes an uploaded file or image
    ///
    /// Expects 204 and returns `true`; any other status is an error, so this
    /// never returns `false`.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let url = self.asset_url(id);

        debug!("DELETE {}", url);

        let response = self
            .http_client
            .delete(&url)
            .header("Accept", "application/json")
            .query(&[("id", id.to_string())])
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

    /// Asset URL: `{base}/{route}/{id}`
    fn asset_url(&self, id: Uuid) -> String {
        format!("{}/{}/{}", self.config.zecommon_base_url, self.route, id)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_embeds_id() {
        let config = Config::with_values(
            "svc@example.com",
            "secret",
            "http://db.local",
            "http://auth.local",
            "http://files.local",
        );
        let client = FilesClient::new("asset", config);
        let id = Uuid::nil();
        assert_eq!(
            client.asset_url(id),
            format!("http://files.local/asset/{id}")
        );
    }
}
