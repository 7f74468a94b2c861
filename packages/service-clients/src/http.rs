//! Shared REST plumbing used by every service client
//!
//! One [`RestClient`] wraps one upstream base URL and one pooled
//! `reqwest::Client`. Calls are made exactly once: there are no retries and no
//! timeouts beyond what the transport applies by default.

use std::time::Duration;

use campus_shared_config::ServiceEndpointConfig;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{ServiceError, ServiceResult};

/// Header carrying the caller's role to upstream services
pub const CALLER_ROLE_HEADER: &str = "X-User-Role";

/// Maximum error body size kept in [`ServiceError::Status`]
const MAX_ERROR_BODY_SIZE: usize = 1000;

#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    http_client: Client,
    service: &'static str,
    base_url: Url,
    caller_role: Option<String>,
}

impl RestClient {
    pub(crate) fn new(endpoint: &ServiceEndpointConfig) -> ServiceResult<Self> {
        let http_client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .user_agent("CampusGateway/1.0")
            .build()?;

        Self::with_client(endpoint, http_client)
    }

    pub(crate) fn with_client(
        endpoint: &ServiceEndpointConfig,
        http_client: Client,
    ) -> ServiceResult<Self> {
        let base_url = Url::parse(&endpoint.url).map_err(|e| ServiceError::InvalidUrl {
            service: endpoint.name,
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl {
                service: endpoint.name,
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            http_client,
            service: endpoint.name,
            base_url,
            caller_role: None,
        })
    }

    /// Copy of this client that forwards `role` on every request
    pub(crate) fn with_caller_role(&self, role: Option<&str>) -> Self {
        Self {
            caller_role: role.map(str::to_string),
            ..self.clone()
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build a URL from percent-encoded path segments
    ///
    /// An empty final segment produces a trailing slash, which the Django
    /// services require.
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let builder = self.http_client.request(method, self.url(segments));
        match &self.caller_role {
            Some(role) => builder.header(CALLER_ROLE_HEADER, role),
            None => builder,
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> ServiceError {
        if e.is_connect() {
            ServiceError::ConnectionRefused {
                service: self.service,
                url: self.base_url.to_string(),
            }
        } else {
            ServiceError::Http(e)
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> ServiceResult<Response> {
        let response = builder.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = truncate_error_body(response.text().await.unwrap_or_default());
            return Err(ServiceError::Status {
                service: self.service,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> ServiceResult<T> {
        let response = self
            .execute(self.request(Method::GET, segments).query(query))
            .await?;
        Self::decode(response).await
    }

    /// GET a single record, mapping 404 to `None`
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> ServiceResult<Option<T>> {
        match self.execute(self.request(Method::GET, segments)).await {
            Ok(response) => Self::decode(response).await.map(Some),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> ServiceResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.request(method, segments).json(body))
            .await?;
        Self::decode(response).await
    }

    /// Send a request whose response body is irrelevant (deletes, unenroll)
    pub(crate) async fn send_discarding<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> ServiceResult<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, segments);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        self.execute(builder).await?;
        Ok(())
    }

    /// Check that the service answers `GET` on `segments` with a non-5xx status
    pub(crate) async fn probe(&self, segments: &[&str]) -> ServiceResult<bool> {
        let response = self
            .request(Method::GET, segments)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(!response.status().is_server_error())
    }
}

/// Truncate error body to prevent memory exhaustion
/// Safely handles UTF-8 boundaries to avoid panics on multi-byte characters
fn truncate_error_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_SIZE {
        return body;
    }

    let truncate_at = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
        .last()
        .unwrap_or(0);

    format!("{}... (truncated)", &body[..truncate_at])
}
