//! Registry connection parameters.
//!
//! A [`RegistryHandle`] is built once per run from the command line and never
//! changes afterwards. Every [`Client`](crate::client::Client) request reads its
//! host, scheme and credentials from it.

use crate::auth::Credentials;
use crate::error::{Result, ReglsError};


/// Host, credentials and transport security for one registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryHandle {
    /// Registry host with optional port (e.g. "reg.example.com:5000")
    host: String,
    /// Credentials sent with every request
    credentials: Credentials,
    /// Use `https://` when true, `http://` otherwise
    use_tls: bool,
}

impl RegistryHandle {
    /// Creates a handle for `host` that talks HTTPS.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregls::auth::Credentials;
    /// use libregls::registry::RegistryHandle;
    ///
    /// let handle = RegistryHandle::new("reg.example.com:5000", Credentials::basic("u", "p")).unwrap();
    /// assert_eq!(handle.base_url(), "https://reg.example.com:5000");
    /// ```
    pub fn new(host: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Self::with_tls(host, credentials, true)
    }

    /// Creates a handle with an explicit choice of scheme.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `host` is blank or already carries a
    /// scheme or path; the scheme is chosen by `use_tls` alone.
    pub fn with_tls(
        host: impl Into<String>,
        credentials: Credentials,
        use_tls: bool,
    ) -> Result<Self> {
        let host = host.into();
        let trimmed = host.trim();

        if trimmed.is_empty() {
            return Err(ReglsError::validation("Registry host cannot be empty"));
        }
        if trimmed.contains("://") {
            return Err(ReglsError::validation(format!(
                "Registry host '{}' must not include a scheme",
                trimmed
            )));
        }
        if trimmed.contains('/') {
            return Err(ReglsError::validation(format!(
                "Registry host '{}' must not include a path",
                trimmed
            )));
        }

        Ok(Self {
            host: trimmed.to_string(),
            credentials,
            use_tls,
        })
    }

    /// Returns the registry host as given on the command line.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the credentials used for every request.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns true when requests use HTTPS.
    pub fn use_tls(&self) -> bool {
        self.use_tls
    }

    /// Returns "https" or "http".
    pub fn scheme(&self) -> &'static str {
        if self.use_tls { "https" } else { "http" }
    }

    /// Returns `{scheme}://{host}` without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.host)
    }
}
