//! Sensu HTTP client.

use crate::auth::BasicAuth;
use crate::error::SensuError;
use crate::types::{ResolveRequest, StashRequest};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};
use urlencoding::encode;

/// Raw outcome of a single Sensu API call.
///
/// Status codes are not interpreted here; each command decides which
/// codes it expects.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SensuError> {
        serde_json::from_str(&self.body).map_err(SensuError::from)
    }

    /// Re-serialize the body as pretty-printed JSON, keeping key order.
    pub fn pretty_json(&self) -> Result<String, SensuError> {
        let value: serde_json::Value = self.json()?;
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Error for a status the caller did not expect.
    pub fn unexpected(&self) -> SensuError {
        SensuError::UnexpectedStatus {
            status: self.status(),
            url: self.url.clone(),
        }
    }
}

/// Sensu API client.
#[derive(Clone)]
pub struct SensuClient {
    client: Client,
    base_url: String,
    auth: Option<BasicAuth>,
}

impl SensuClient {
    /// Create a new Sensu client. Requests carry a Basic-Auth header
    /// only when `auth` is given.
    pub fn new(
        base_url: impl Into<String>,
        auth: Option<BasicAuth>,
        timeout: Duration,
    ) -> Result<Self, SensuError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /clients/:name`
    #[instrument(skip(self))]
    pub async fn client(&self, name: &str) -> Result<ApiResponse, SensuError> {
        self.send(Method::GET, &format!("/clients/{}", encode(name)), None::<&()>)
            .await
    }

    /// `GET /clients/:name/history`
    #[instrument(skip(self))]
    pub async fn client_history(&self, name: &str) -> Result<ApiResponse, SensuError> {
        self.send(
            Method::GET,
            &format!("/clients/{}/history", encode(name)),
            None::<&()>,
        )
        .await
    }

    /// `GET /clients`
    #[instrument(skip(self))]
    pub async fn clients(&self) -> Result<ApiResponse, SensuError> {
        self.send(Method::GET, "/clients", None::<&()>).await
    }

    /// `GET /events`, or `GET /events/:client` when a client is given.
    #[instrument(skip(self))]
    pub async fn events(&self, client: Option<&str>) -> Result<ApiResponse, SensuError> {
        let path = match client {
            Some(name) => format!("/events/{}", encode(name)),
            None => "/events".to_string(),
        };
        self.send(Method::GET, &path, None::<&()>).await
    }

    /// `GET /info`
    #[instrument(skip(self))]
    pub async fn info(&self) -> Result<ApiResponse, SensuError> {
        self.send(Method::GET, "/info", None::<&()>).await
    }

    /// `DELETE /clients/:name`
    #[instrument(skip(self))]
    pub async fn remove_client(&self, name: &str) -> Result<ApiResponse, SensuError> {
        self.send(Method::DELETE, &format!("/clients/{}", encode(name)), None::<&()>)
            .await
    }

    /// `POST /resolve`
    #[instrument(skip(self))]
    pub async fn resolve(&self, request: &ResolveRequest) -> Result<ApiResponse, SensuError> {
        self.send(Method::POST, "/resolve", Some(request)).await
    }

    /// `POST /stashes`
    #[instrument(skip(self))]
    pub async fn create_stash(&self, request: &StashRequest) -> Result<ApiResponse, SensuError> {
        self.send(Method::POST, "/stashes", Some(request)).await
    }

    /// `GET /stashes`
    #[instrument(skip(self))]
    pub async fn stashes(&self) -> Result<ApiResponse, SensuError> {
        self.send(Method::GET, "/stashes", None::<&()>).await
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.auth {
            Some(auth) => builder.header("Authorization", auth.header_value()),
            None => builder,
        }
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, SensuError> {
        let url = self.url(path);
        let mut builder = self.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("{} {} -> {}", method, url, status);

        Ok(ApiResponse { url, status, body })
    }
}
