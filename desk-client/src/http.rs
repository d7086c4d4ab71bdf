//! HTTP client for the persistence API
//!
//! [`HttpClient`] is the seam the submission service and endpoint wrappers
//! are written against; [`NetworkHttpClient`] is the `reqwest` implementation.

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::ErrorBody;
use std::time::Duration;

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    fn token(&self) -> Option<&str>;
    fn set_token(&mut self, token: Option<String>);
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = self.authorize(req).send().await?;
        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await?;
        let err = error_from_body(status, &text);
        tracing::warn!(status = status.as_u16(), error = %err, "API request failed");
        return Err(err);
    }
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        ClientError::InvalidResponse(format!("{e} (status {})", status.as_u16()))
    })
}

/// Map a failure response to an error, keeping the server's own message.
pub(crate) fn error_from_body(status: StatusCode, text: &str) -> ClientError {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text)
        && let Some(message) = body.message()
    {
        return ClientError::Api {
            status: status.as_u16(),
            message: message.to_string(),
        };
    }
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::NOT_FOUND => ClientError::NotFound(text.to_string()),
        _ => ClientError::Api {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        },
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        self.send(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "PUT");
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "DELETE");
        self.send(self.client.delete(self.url(path))).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
