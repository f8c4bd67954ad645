//! HTTP client for Docker Distribution registries.
//!
//! This module provides a thin HTTP client built on reqwest for the two
//! listing endpoints of the registry v2 API. Every request carries the Basic
//! authorization header from the [`RegistryHandle`]. Responses are read once:
//! there is no retry and `Link` pagination headers are not followed.

use crate::error::{Result, ReglsError};
use crate::registry::RegistryHandle;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::Deserialize;


/// Response from the catalog API endpoint.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    /// List of repository names
    repositories: Vec<String>,
}

/// Response from the tags list API endpoint. The `name` field is not needed.
#[derive(Debug, Deserialize)]
struct TagsResponse {
    /// List of tag names
    tags: Vec<String>,
}

/// HTTP client for registry operations.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http_client: ReqwestClient,
    /// Host, scheme and credentials for every request
    handle: RegistryHandle,
}

impl Client {
    /// Creates a new client for the registry described by `handle`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregls::auth::Credentials;
    /// use libregls::client::Client;
    /// use libregls::registry::RegistryHandle;
    ///
    /// let handle = RegistryHandle::new("localhost:5000", Credentials::basic("u", "p")).unwrap();
    /// let client = Client::new(handle).unwrap();
    /// assert_eq!(client.registry_url(), "https://localhost:5000");
    /// ```
    pub fn new(handle: RegistryHandle) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .user_agent(concat!("regls/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReglsError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            handle,
        })
    }

    /// Returns the registry handle this client was built from.
    pub fn handle(&self) -> &RegistryHandle {
        &self.handle
    }

    /// Returns the base registry URL (`{scheme}://{host}`).
    pub fn registry_url(&self) -> String {
        self.handle.base_url()
    }

    /// Lists the repositories in the registry catalog.
    ///
    /// Performs `GET /v2/_catalog` and returns the `repositories` array in
    /// the order the registry sent it. Only the first page is read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libregls::auth::Credentials;
    /// use libregls::client::Client;
    /// use libregls::registry::RegistryHandle;
    ///
    /// # async fn example() -> libregls::error::Result<()> {
    /// let handle = RegistryHandle::new("reg.example.com", Credentials::basic("u", "p"))?;
    /// let client = Client::new(handle)?;
    /// for repo in client.list_repositories().await? {
    ///     println!("{}", repo);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The registry is unreachable
    /// - The registry answers with a non-success status
    /// - The body has no `repositories` array
    pub async fn list_repositories(&self) -> Result<Vec<String>> {
        let response = self.get("_catalog").await?;
        let catalog: CatalogResponse = Self::decode(response, "catalog").await?;

        Ok(catalog.repositories)
    }

    /// Lists the tags of `repository`.
    ///
    /// Performs `GET /v2/<repository>/tags/list` and returns the `tags` array
    /// in the order the registry sent it. Only the first page is read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The registry is unreachable
    /// - The registry answers with a non-success status (404 for unknown repositories)
    /// - The body has no `tags` array
    pub async fn list_tags(&self, repository: &str) -> Result<Vec<String>> {
        let response = self.get(&format!("{}/tags/list", repository)).await?;
        let tags: TagsResponse = Self::decode(response, "tags").await?;

        Ok(tags.tags)
    }

    /// Performs an authenticated `GET /v2/<path>`.
    ///
    /// Non-success statuses are turned into errors, so the returned response
    /// always has a 2xx status.
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}/v2/{}", self.handle.base_url(), path);

        let response = self
            .http_client
            .get(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                self.handle.credentials().to_header_value(),
            )
            .send()
            .await
            .map_err(|e| Self::translate_reqwest_error(e, &url))?;

        Self::check_response_status(response).await
    }

    /// Reads the body of `response` and decodes it as JSON.
    async fn decode<T>(response: Response, what: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = response.url().to_string();
        let body = response.text().await.map_err(|e| {
            ReglsError::network_with_source(format!("Failed to read {} response", what), e)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            ReglsError::validation_with_source(
                format!("Failed to parse {} response from {}: {}", what, url, e),
                e,
            )
        })
    }

    /// Translates a reqwest error into a ReglsError.
    fn translate_reqwest_error(error: reqwest::Error, url: &str) -> ReglsError {
        if error.is_timeout() {
            ReglsError::network_with_source(format!("Request to {} timed out", url), error)
        } else if error.is_connect() {
            ReglsError::network_with_source(format!("Failed to connect to {}", url), error)
        } else if error.is_request() {
            ReglsError::network_with_source(format!("Failed to send request to {}", url), error)
        } else {
            ReglsError::network_with_source(
                format!("Network error communicating with {}", url),
                error,
            )
        }
    }

    /// Checks the HTTP response status and translates errors to ReglsError.
    async fn check_response_status(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let reason = status.canonical_reason().unwrap_or("Unknown");
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("(unable to read response body)"));

        match status {
            StatusCode::UNAUTHORIZED => Err(ReglsError::authentication(
                format!("Authentication required for {}: {}", url, error_body),
                Some(401),
            )),
            StatusCode::FORBIDDEN => Err(ReglsError::authentication(
                format!("Access forbidden for {}: {}", url, error_body),
                Some(403),
            )),
            StatusCode::NOT_FOUND => Err(ReglsError::not_found("endpoint", url.as_str())),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => Err(ReglsError::server(
                format!("{} from {}: {}", reason, url, error_body),
                status.as_u16(),
            )),
            _ => Err(ReglsError::http(
                format!("{} from {}: {}", reason, url, error_body),
                status.as_u16(),
            )),
        }
    }
}
