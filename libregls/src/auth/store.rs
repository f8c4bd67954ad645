//! Read-only access to the Docker credential store.
//!
//! The Docker CLI keeps registry logins in `~/.docker/config.json`:
//!
//! ```json
//! { "auths": { "reg.example.com:5000": { "auth": "dXNlcjpwYXNz" } } }
//! ```
//!
//! Entries are matched by the exact host string. Nothing here ever writes the
//! file back.

use crate::auth::Credentials;
use crate::error::{CredentialError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the directory holding `config.json`.
pub const DOCKER_CONFIG_ENV: &str = "DOCKER_CONFIG";

/// File name of the Docker CLI configuration.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Trait for looking up registry credentials.
///
/// Implementations are read-only; the credential store is owned by the tool
/// that performed the login.
pub trait CredentialStore {
    /// Retrieve credentials for a registry.
    ///
    /// # Arguments
    ///
    /// * `registry` - The registry host, including the port if the login used one
    ///
    /// # Returns
    ///
    /// Returns `Some(Credentials)` if an entry is found, `None` otherwise.
    fn get(&self, registry: &str) -> Result<Option<Credentials>>;

    /// List all registries with stored credentials, sorted by host.
    fn list(&self) -> Result<Vec<String>>;
}

/// Shape of the Docker CLI configuration file. Only `auths` is read.
#[derive(Debug, Default, Deserialize)]
struct DockerConfigFile {
    #[serde(default)]
    auths: Option<HashMap<String, AuthEntry>>,
}

/// One entry under `auths`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
struct AuthEntry {
    #[serde(default)]
    auth: Option<String>,
}

/// Credential store backed by a Docker `config.json` file.
///
/// # Examples
///
/// ```no_run
/// use libregls::auth::{CredentialStore, DockerConfigStore};
///
/// # fn example() -> libregls::error::Result<()> {
/// let store = DockerConfigStore::load(&DockerConfigStore::default_path())?;
/// if let Some(creds) = store.get("reg.example.com:5000")? {
///     println!("{}", creds.to_header_value());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DockerConfigStore {
    /// Path the store was loaded from
    path: PathBuf,
    /// Host to entry mapping from `auths`
    auths: HashMap<String, AuthEntry>,
}

impl DockerConfigStore {
    /// Loads the credential store from `path`.
    ///
    /// # Errors
    ///
    /// - [`CredentialError::FileNotFound`] if the file does not exist
    /// - [`CredentialError::Unreadable`] if it cannot be read
    /// - [`CredentialError::Malformed`] if it is not a JSON object with an
    ///   object-valued `auths` key
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CredentialError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => CredentialError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Self::from_json(path, &contents)
    }

    /// Parses a credential store from its JSON contents.
    ///
    /// `path` is only used for error reporting.
    pub fn from_json(path: &Path, contents: &str) -> Result<Self> {
        let malformed = |e| CredentialError::Malformed {
            path: path.to_path_buf(),
            source: e,
        };

        // Derived struct decoding also accepts a JSON array
        let value: serde_json::Value = serde_json::from_str(contents).map_err(malformed)?;
        if !value.is_object() {
            return Err(malformed(<serde_json::Error as serde::de::Error>::custom(
                "expected a JSON object at the top level",
            ))
            .into());
        }
        let file: DockerConfigFile = serde_json::from_value(value).map_err(malformed)?;

        Ok(Self {
            path: path.to_path_buf(),
            auths: file.auths.unwrap_or_default(),
        })
    }

    /// Returns the path this store was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the credential store path for the current user.
    ///
    /// Honors `$DOCKER_CONFIG` the same way the Docker CLI does, then falls
    /// back to `~/.docker/config.json`.
    pub fn default_path() -> PathBuf {
        default_path_from(env::var_os(DOCKER_CONFIG_ENV), dirs::home_dir())
    }
}

impl CredentialStore for DockerConfigStore {
    fn get(&self, registry: &str) -> Result<Option<Credentials>> {
        Ok(self
            .auths
            .get(registry)
            .and_then(|entry| entry.auth.as_deref())
            .map(Credentials::encoded))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut hosts: Vec<String> = self.auths.keys().cloned().collect();
        hosts.sort();
        Ok(hosts)
    }
}

/// Computes the credential store path from the `DOCKER_CONFIG` value and the
/// user's home directory.
pub(crate) fn default_path_from(docker_config: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = docker_config.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir).join(CONFIG_FILE_NAME);
    }

    home.unwrap_or_default()
        .join(".docker")
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
