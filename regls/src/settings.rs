//! Validation of parsed command line flags.
//!
//! Validation is a pure function of the parsed flags: it never prints, exits
//! or touches the filesystem, so every rule is unit-testable.

use crate::Cli;
use crate::error::CliError;
use crate::format::OutputFormat;
use std::path::PathBuf;

/// Validated settings for one listing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Registry host with optional port
    pub host: String,
    /// Explicit username, always paired with `password`
    pub username: Option<String>,
    /// Explicit password, always paired with `username`
    pub password: Option<String>,
    /// `https://` when true, `http://` with `--plain-http`
    pub use_tls: bool,
    /// Credential store override from `--docker-config`
    pub docker_config: Option<PathBuf>,
    /// Output format
    pub format: OutputFormat,
}

impl Settings {
    /// Returns the explicit username/password pair, if one was given.
    pub fn explicit_credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }
}

/// Checks the flag combination and produces [`Settings`].
///
/// Empty values count as absent, so `-u ''` is the same as leaving `-u` out.
///
/// # Errors
///
/// [`CliError::Argument`] when exactly one of username and password is given,
/// or when the registry host is missing or carries a scheme or path.
pub fn validate(cli: &Cli) -> Result<Settings, CliError> {
    let username = non_empty(cli.username.as_deref());
    let password = non_empty(cli.password.as_deref());

    if username.is_some() != password.is_some() {
        return Err(CliError::Argument(
            "Both username and password are required".to_string(),
        ));
    }

    let host = non_empty(cli.registry.as_deref().map(str::trim))
        .ok_or_else(|| CliError::Argument("Registry host is required".to_string()))?;

    if host.contains("://") {
        return Err(CliError::Argument(format!(
            "Registry host '{}' must not include a scheme",
            host
        )));
    }
    if host.contains('/') {
        return Err(CliError::Argument(format!(
            "Registry host '{}' must not include a path",
            host
        )));
    }

    Ok(Settings {
        host,
        username,
        password,
        use_tls: !cli.plain_http,
        docker_config: cli.docker_config.clone(),
        format: cli.format,
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
