//! regls - Docker Registry Listing Library
//!
//! libregls lists the repositories and tags of a Docker Distribution (v2)
//! registry using HTTP Basic authentication.
//!
//! # Quick Start
//!
//! ```no_run
//! use libregls::{Client, RegistryHandle, auth, auth::DockerConfigStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let host = "reg.example.com:5000";
//!
//!     // Credentials from ~/.docker/config.json
//!     let creds = auth::resolve(host, None, None, &DockerConfigStore::default_path())?;
//!     let client = Client::new(RegistryHandle::new(host, creds)?)?;
//!
//!     for repo in client.list_repositories().await? {
//!         for tag in client.list_tags(&repo).await? {
//!             println!("{}/{}:{}", host, repo, tag);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`Credentials`] - Basic authentication credentials
//! - [`RegistryHandle`] - Host, scheme and credentials of one registry
//! - [`Client`] - Catalog, tag list and raw authenticated GET
//! - [`ReglsError`] - Error type for every operation
//!
//! # Limitations
//!
//! Only the first page of a paginated catalog or tag list is read, and
//! bearer-token registries are not supported.

#![warn(clippy::all)]

/// Returns the libregls crate version.
///
/// # Examples
///
/// ```
/// let version = libregls::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Re-export commonly used types for convenience
pub use auth::Credentials;
pub use client::Client;
pub use error::{CredentialError, Result, ReglsError};
pub use registry::RegistryHandle;

pub mod auth;
pub mod client;
pub mod error;
pub mod registry;
