//! Authentication handling for Docker Distribution registries.
//!
//! Registries are accessed with HTTP Basic authentication only. The token is
//! either encoded from an explicit username/password pair or taken verbatim
//! from the Docker credential store (see [`store`]).

use crate::error::{CredentialError, Result, ReglsError};
use base64::{Engine as _, engine::general_purpose};
use std::path::Path;

pub mod store;

pub use store::{CredentialStore, DockerConfigStore};

#[cfg(test)]
mod tests;

/// Credentials for registry authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP Basic authentication with username and password
    Basic {
        /// Username for authentication
        username: String,
        /// Password for authentication
        password: String,
    },

    /// A pre-encoded basic-auth token, as stored in `~/.docker/config.json`
    Encoded {
        /// base64 of `username:password`
        token: String,
    },
}

impl Credentials {
    /// Creates Basic authentication credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregls::auth::Credentials;
    ///
    /// let creds = Credentials::basic("username", "password");
    /// ```
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Wraps a token that is already base64 encoded.
    pub fn encoded(token: impl Into<String>) -> Self {
        Self::Encoded {
            token: token.into(),
        }
    }

    /// Returns the base64 basic-auth token.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregls::auth::Credentials;
    ///
    /// let creds = Credentials::basic("user", "pass");
    /// assert_eq!(creds.token(), "dXNlcjpwYXNz");
    /// ```
    pub fn token(&self) -> String {
        match self {
            Self::Basic { username, password } => {
                let credentials = format!("{}:{}", username, password);
                general_purpose::STANDARD.encode(credentials)
            }
            Self::Encoded { token } => token.clone(),
        }
    }

    /// Returns the Authorization header value for these credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregls::auth::Credentials;
    ///
    /// let creds = Credentials::encoded("dXNlcjpwYXNz");
    /// assert_eq!(creds.to_header_value(), "Basic dXNlcjpwYXNz");
    /// ```
    pub fn to_header_value(&self) -> String {
        format!("Basic {}", self.token())
    }
}

/// Resolves the credentials used for every request to `host`.
///
/// An explicit username/password pair wins and the credential store is not
/// read at all. Without one, the `auths.<host>.auth` entry of the Docker
/// config at `store_path` is returned verbatim.
///
/// # Errors
///
/// Returns [`ReglsError::Credentials`] when the store is missing, unreadable,
/// malformed or has no entry for `host`, and [`ReglsError::Validation`] when
/// only one of `username` and `password` is given.
///
/// # Examples
///
/// ```
/// use libregls::auth::{resolve, Credentials};
/// use std::path::Path;
///
/// let creds = resolve(
///     "reg.example.com",
///     Some("user"),
///     Some("pass"),
///     Path::new("/nonexistent/config.json"),
/// )
/// .unwrap();
/// assert_eq!(creds, Credentials::basic("user", "pass"));
/// ```
pub fn resolve(
    host: &str,
    username: Option<&str>,
    password: Option<&str>,
    store_path: &Path,
) -> Result<Credentials> {
    match (username, password) {
        (Some(username), Some(password)) => Ok(Credentials::basic(username, password)),
        (None, None) => {
            let store = DockerConfigStore::load(store_path)?;
            store.get(host)?.ok_or_else(|| {
                CredentialError::EntryMissing {
                    path: store_path.to_path_buf(),
                    host: host.to_string(),
                }
                .into()
            })
        }
        _ => Err(ReglsError::validation(
            "Both username and password are required",
        )),
    }
}
