pub mod components;
pub mod incidents;
pub mod pages;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod stub;

use crate::config::Config;
use crate::error::{StatuspageError, TransportError};
use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method};
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use components::ComponentService;
use incidents::IncidentService;
use pages::PageService;
use transport::{HttpClient, HttpRequest, HttpResponse, ReqwestTransport};

const JSON: &str = "application/json";

/// Entry point for the Statuspage API.
///
/// Cloning is cheap; clones share configuration and the underlying
/// connection pool, and may be used from many tasks at once.
#[derive(Debug)]
pub struct StatuspageClient<T: HttpClient = ReqwestTransport> {
    inner: Arc<ClientInner<T>>,
}

#[derive(Debug)]
struct ClientInner<T> {
    config: Config,
    transport: T,
}

impl<T: HttpClient> Clone for StatuspageClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl StatuspageClient<ReqwestTransport> {
    pub fn new(config: Config) -> Result<Self, StatuspageError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpClient> StatuspageClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self {
            inner: Arc::new(ClientInner { config, transport }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn incidents(&self) -> IncidentService<'_, T> {
        IncidentService::new(self)
    }

    pub fn components(&self) -> ComponentService<'_, T> {
        ComponentService::new(self)
    }

    pub fn pages(&self) -> PageService<'_, T> {
        PageService::new(self)
    }

    /// Build a request for `path`, resolved against the configured base URL.
    ///
    /// The base URL must end in `/` so that relative paths extend it rather
    /// than replace its last segment.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, StatuspageError>
    where
        B: Serialize + ?Sized,
    {
        let config = &self.inner.config;
        if !config.api_url.ends_with('/') {
            return Err(StatuspageError::RequestConstruction(format!(
                "base URL must have a trailing slash, but {:?} does not",
                config.api_url
            )));
        }

        let base = Url::parse(&config.api_url).map_err(|e| {
            StatuspageError::RequestConstruction(format!(
                "invalid base URL {:?}: {e}",
                config.api_url
            ))
        })?;
        let url = base.join(path).map_err(|e| {
            StatuspageError::RequestConstruction(format!("cannot resolve path {path:?}: {e}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            StatuspageError::RequestConstruction(format!("invalid user agent: {e}"))
        })?;
        headers.insert(USER_AGENT, user_agent);

        let body = match body {
            Some(value) => {
                let encoded = serde_json::to_vec(value).map_err(|e| {
                    StatuspageError::RequestConstruction(format!("failed to encode body: {e}"))
                })?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
                Some(Bytes::from(encoded))
            }
            None => None,
        };

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    /// Send a request and return the successful response.
    ///
    /// Attaches credentials, then races the transport against `cancel`.
    /// Non-2xx responses become [`StatuspageError::Api`] or
    /// [`StatuspageError::Http`].
    pub async fn execute(
        &self,
        cancel: &CancellationToken,
        mut request: HttpRequest,
    ) -> Result<HttpResponse, StatuspageError> {
        if let Some(api_key) = &self.inner.config.api_key {
            let mut value = HeaderValue::from_str(&format!("OAuth {api_key}")).map_err(|e| {
                StatuspageError::RequestConstruction(format!("invalid API key: {e}"))
            })?;
            value.set_sensitive(true);
            request.headers.insert(AUTHORIZATION, value);
        }

        debug!(method = %request.method, url = %request.url, "sending request");

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(TransportError::Cancelled.into()),
            result = self.inner.transport.send(request) => result?,
        };

        debug!(status = %response.status, "received response");

        if !response.status.is_success() {
            return Err(StatuspageError::from_response(
                response.status,
                response.body,
            ));
        }

        Ok(response)
    }

    /// One round trip: build, execute, and decode the JSON result.
    pub(crate) async fn send<B, R>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, StatuspageError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.new_request(method, path, body)?;
        let response = self.execute(cancel, request).await?;
        serde_json::from_slice(&response.body).map_err(StatuspageError::Decode)
    }

    /// Like [`send`](Self::send) for operations whose response body carries nothing.
    pub(crate) async fn send_without_result<B>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), StatuspageError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.new_request(method, path, body)?;
        self.execute(cancel, request).await?;
        Ok(())
    }
}
