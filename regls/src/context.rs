//! Application context that holds resolved runtime settings
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Environment variables (`REGLS_COLOR`, `NO_COLOR`)
//! 3. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::format::ColorChoice;
use std::env;
use std::io::IsTerminal;

/// How much diagnostic output goes to stderr, from the number of `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Errors only
    Normal,
    /// `-v`: high-level progress
    Verbose,
    /// `-vv`: one line per request
    VeryVerbose,
    /// `-vvv` and above: everything
    Trace,
}

impl VerbosityLevel {
    /// Maps a `-v` count to a level.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::VeryVerbose,
            _ => Self::Trace,
        }
    }
}

/// Application context with resolved runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Color choice after applying the environment
    pub color: ColorChoice,
    /// Diagnostic verbosity
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > env vars > CLI flags
    pub fn build(cli_color: Option<ColorChoice>, verbosity: VerbosityLevel) -> Self {
        let env_color = env::var("REGLS_COLOR").ok();
        let color = resolve_color(env_color.as_deref(), cli_color);

        Self { color, verbosity }
    }

    /// Returns true when diagnostics on stderr should be colored.
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal(),
        }
    }
}

/// Picks the color choice: an explicit `--color` (including `auto`) beats
/// `REGLS_COLOR`, which beats the default.
pub(crate) fn resolve_color(env_value: Option<&str>, cli_color: Option<ColorChoice>) -> ColorChoice {
    cli_color
        .or_else(|| env_value.map(ColorChoice::from))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
