//! Async HTTP client for the REST services.
//!
//! Requests carry a Basic `Authorization` header built from the client's own
//! credential when one was set with [`RestClient::set_credential`], otherwise
//! from the process-wide current login credential.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use tokio::sync::Mutex;

use crate::config::RestConfig;
use crate::credential::{current_login_credential, LoginCredential};
use crate::error::{handle_api_error, RestError};
use crate::params::{append_query, ParamMap};
use crate::uri_builder::UriBuilder;

const ACCEPT_JSON: &str = "application/vnd.emc.documentum+json, application/json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Main client to interact with the REST services.
#[derive(Clone)]
pub struct RestClient {
    uri: UriBuilder,
    http: Client,
    credential: Arc<Mutex<Option<LoginCredential>>>,
}

impl Debug for RestClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("uri", &self.uri)
            .field("http", &"reqwest::Client")
            .field("credential", &self.credential)
            .finish()
    }
}

impl RestClient {
    /// Construct a client for the services described by `uri`.
    pub fn new(uri: UriBuilder) -> Result<Self, RestError> {
        let http = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(REQUEST_TIMEOUT)
            .use_rustls_tls()
            .build()
            .map_err(RestError::ReqwestError)?;

        Ok(Self {
            uri,
            http,
            credential: Arc::new(Mutex::new(None)),
        })
    }

    pub fn from_config(config: &RestConfig) -> Result<Self, RestError> {
        Self::new(config.uri_builder())
    }

    pub fn uri(&self) -> &UriBuilder {
        &self.uri
    }

    /* ─────────────────────────── Runtime helpers ─────────────────────────── */

    /// Set or clear this client's own credential. While unset, the current
    /// login credential of the process is used.
    pub async fn set_credential(&self, credential: Option<LoginCredential>) {
        *self.credential.lock().await = credential;
    }

    /// The credential the next request will authenticate with.
    pub async fn effective_credential(&self) -> LoginCredential {
        match self.credential.lock().await.clone() {
            Some(credential) => credential,
            None => current_login_credential(),
        }
    }

    /// Build an authenticated `reqwest::RequestBuilder`.
    pub async fn authed_request(&self, method: Method, url: &str) -> RequestBuilder {
        let credential = self.effective_credential().await;

        tracing::debug!(%method, url, "building request");
        let mut req = self.http.request(method, url).header(ACCEPT, ACCEPT_JSON);

        if credential.is_set() {
            req = req.header(AUTHORIZATION, credential.basic_auth_header());
        }

        req
    }

    /* ───────────── Convenience wrappers around HTTP verbs ───────────── */

    pub async fn authed_get(&self, url: &str) -> Result<Response, RestError> {
        self.authed_request(Method::GET, url)
            .await
            .send()
            .await
            .map_err(RestError::ReqwestError)
    }

    pub async fn authed_get_with_query(
        &self,
        url: &str,
        query: &ParamMap,
    ) -> Result<Response, RestError> {
        let url = append_query(url, query)?;
        self.authed_request(Method::GET, &url)
            .await
            .send()
            .await
            .map_err(RestError::ReqwestError)
    }
}

/// Parse the body as JSON **iff** the response status is success.
pub async fn parse_json_if_ok<T: serde::de::DeserializeOwned>(
    resp: Response,
) -> Result<T, RestError> {
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(RestError::ReqwestError)?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "request failed");
        if let Ok(api_err) = serde_json::from_slice::<crate::types::error_types::Error>(&bytes) {
            return Err(handle_api_error(api_err));
        }

        return Err(RestError::HttpStatus {
            code: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).to_string(),
        });
    }

    serde_json::from_slice::<T>(&bytes).map_err(RestError::SerdeError)
}
