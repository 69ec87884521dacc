//! Thin adapter over `reqwest` carrying the dashboard's wire conventions.
//!
//! Every request rides the cookie store (session credentials), JSON bodies
//! get `Content-Type: application/json`, and multipart uploads leave the
//! content type to the transport so the boundary is computed correctly.
//! Any non-2xx response is surfaced as [`RepositoryError::Request`] with the
//! response body text, matching how the dashboard reports server errors.

use log::debug;
use reqwest::multipart;
use reqwest::{Method, Response};
use serde::Serialize;
use serde_json::Value;

use crate::domain::region::ImageUpload;
use crate::models::config::ApiConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| RepositoryError::Unexpected(format!("failed to build client: {e}")))?;
        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get_json(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> RepositoryResult<Value> {
        debug!("GET {path}");
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;
        Self::into_json(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> RepositoryResult<Value> {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> RepositoryResult<Value> {
        self.send_json(Method::PATCH, path, body).await
    }

    /// Bodyless PATCH used by action endpoints like soft-delete and restore.
    pub async fn patch_empty(&self, path: &str) -> RepositoryResult<Value> {
        debug!("PATCH {path}");
        let response = self.client.patch(self.url(path)).send().await?;
        Self::into_json(response).await
    }

    pub async fn delete_json(&self, path: &str) -> RepositoryResult<Value> {
        debug!("DELETE {path}");
        let response = self.client.delete(self.url(path)).send().await?;
        Self::into_json(response).await
    }

    /// Uploads a single file as multipart form data under the `file` field.
    pub async fn post_multipart(&self, path: &str, file: &ImageUpload) -> RepositoryResult<Value> {
        debug!("POST {path} (multipart, {} bytes)", file.content.len());
        let part = multipart::Part::bytes(file.content.clone()).file_name(file.file_name.clone());
        let form = multipart::Form::new().part("file", part);
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::into_json(response).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> RepositoryResult<Value> {
        debug!("{method} {path}");
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::into_json(response).await
    }

    async fn into_json(response: Response) -> RepositoryResult<Value> {
        let status = response.status();
        if !status.is_success() {
            // Body read failures are swallowed; the status alone must do.
            let text = response.text().await.unwrap_or_default();
            let message = if text.trim().is_empty() {
                "Request failed".to_string()
            } else {
                text
            };
            return Err(RepositoryError::Request(message));
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| RepositoryError::Unexpected(format!("invalid JSON response: {e}")))
    }
}
