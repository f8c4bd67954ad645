//! Errors surfaced by the command line driver and their exit codes.

use libregls::ReglsError;
use std::io;
use thiserror::Error;

/// Successful run, `--help` or `--version`.
pub const EXIT_SUCCESS: i32 = 0;

/// Registry request failed (HTTP status, transport, undecodable body).
pub const EXIT_FAILURE: i32 = 1;

/// Bad arguments or unresolvable credentials.
pub const EXIT_USAGE: i32 = 2;

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or inconsistent command line arguments
    #[error("{0}")]
    Argument(String),

    /// No usable credentials for the registry
    #[error("Could not resolve credentials for {host}: {source}")]
    Credentials { host: String, source: ReglsError },

    /// A registry request failed
    #[error("Failed to {operation} on {host}: {source}")]
    Registry {
        operation: String,
        host: String,
        source: ReglsError,
    },

    /// Writing the listing failed (closed pipe, full disk)
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Creates a registry error for `operation` (e.g. "list repositories").
    pub fn registry(operation: impl Into<String>, host: &str, source: ReglsError) -> Self {
        Self::Registry {
            operation: operation.into(),
            host: host.to_string(),
            source,
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Argument(_) | Self::Credentials { .. } => EXIT_USAGE,
            Self::Registry { .. } | Self::Output(_) => EXIT_FAILURE,
        }
    }

    /// Returns true when usage text should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Self::Argument(_))
    }
}
