//! Error types for regls
//!
//! Registry failures and credential store failures share one error type so the
//! CLI can classify any failure from a single `Result`. Credential store
//! failures keep their own enum because each failure mode is reported
//! separately.

use std::path::PathBuf;
use thiserror::Error;


/// Main error type for regls operations
#[derive(Error, Debug)]
pub enum ReglsError {
    /// Network-related errors (connection, timeout, DNS)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication errors (401, 403)
    #[error("Authentication error (status: {status_code:?}): {message}")]
    Authentication {
        message: String,
        status_code: Option<u16>,
    },

    /// Resource not found errors (404)
    #[error("{resource_type} not found: {name}")]
    NotFound { resource_type: String, name: String },

    /// Server errors (500, 502, 503, 504)
    #[error("Server error (status: {status_code}): {message}")]
    Server { message: String, status_code: u16 },

    /// Any other non-success HTTP status
    #[error("HTTP error (status: {status_code}): {message}")]
    Http { message: String, status_code: u16 },

    /// Response bodies that do not decode into the expected shape
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Credentials could not be resolved from the credential store
    #[error(transparent)]
    Credentials(#[from] CredentialError),
}

/// Failure modes when reading an auth entry from the credential store.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The credential store file does not exist
    #[error("Credential store {} does not exist", path.display())]
    FileNotFound { path: PathBuf },

    /// The credential store file exists but cannot be read
    #[error("Could not read credential store {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credential store is not valid JSON or not shaped like a Docker config
    #[error("Could not parse credential store {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The credential store has no `auths.<host>.auth` entry
    #[error("Could not find auth entry in {} for {host}", path.display())]
    EntryMissing { path: PathBuf, host: String },
}

/// Result type alias for regls operations
pub type Result<T> = std::result::Result<T, ReglsError>;

impl ReglsError {
    /// Creates a new network error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregls::error::ReglsError;
    ///
    /// let err = ReglsError::network("connection refused");
    /// assert!(matches!(err, ReglsError::Network { .. }));
    /// ```
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new authentication error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregls::error::ReglsError;
    ///
    /// let err = ReglsError::authentication("invalid credentials", Some(401));
    /// assert!(matches!(err, ReglsError::Authentication { .. }));
    /// ```
    pub fn authentication<S: Into<String>>(message: S, status_code: Option<u16>) -> Self {
        Self::Authentication {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new not found error.
    pub fn not_found<S: Into<String>>(resource_type: S, name: S) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Creates a new server error.
    pub fn server<S: Into<String>>(message: S, status_code: u16) -> Self {
        Self::Server {
            message: message.into(),
            status_code,
        }
    }

    /// Creates an error for a non-success status that has no dedicated variant.
    pub fn http<S: Into<String>>(message: S, status_code: u16) -> Self {
        Self::Http {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregls::error::ReglsError;
    ///
    /// let err = ReglsError::validation("missing field `tags`");
    /// assert!(matches!(err, ReglsError::Validation { .. }));
    /// ```
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new validation error with a source error.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { status_code, .. } => *status_code,
            Self::NotFound { .. } => Some(404),
            Self::Server { status_code, .. } | Self::Http { status_code, .. } => {
                Some(*status_code)
            }
            _ => None,
        }
    }

    /// Returns true when the error came from resolving credentials rather
    /// than from talking to the registry.
    pub fn is_credentials(&self) -> bool {
        matches!(self, Self::Credentials(_))
    }
}
