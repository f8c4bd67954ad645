use crate::context::{AppContext, VerbosityLevel};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

/// Width of the TAG column.
pub const TAG_COLUMN_WIDTH: usize = 20;

/// Room for the "/" between host and repository plus some slack.
const REPOSITORY_COLUMN_SLACK: usize = 3;

/// Control colored output on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" | "true" | "yes" => ColorChoice::Always,
            "never" | "false" | "no" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

/// Output format for the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width REPOSITORY/TAG table
    #[default]
    Pretty,
    /// JSON array of {repository, tag}
    Json,
    /// YAML sequence of {repository, tag}
    Yaml,
}

/// One output row: a tag of a repository on the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageTag {
    /// `{host}/{repository}`
    pub repository: String,
    /// Tag name
    pub tag: String,
}

impl ImageTag {
    /// Creates a row for `tag` of `repository` on `host`.
    pub fn new(host: &str, repository: &str, tag: &str) -> Self {
        Self {
            repository: format!("{}/{}", host, repository),
            tag: tag.to_string(),
        }
    }
}

/// Column widths of the REPOSITORY/TAG table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Width of the REPOSITORY column
    pub repository_width: usize,
    /// Width of the TAG column
    pub tag_width: usize,
}

impl TableLayout {
    /// Computes the layout for the repositories of a catalog.
    ///
    /// The REPOSITORY column fits the longest repository name (by character
    /// count) prefixed with the host. An empty catalog only reserves room for
    /// the host.
    pub fn for_catalog(host: &str, repositories: &[String]) -> Self {
        let longest = repositories
            .iter()
            .map(|repo| repo.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            repository_width: longest + host.chars().count() + REPOSITORY_COLUMN_SLACK,
            tag_width: TAG_COLUMN_WIDTH,
        }
    }

    /// Formats one row. Cells are left-aligned, padded to their column width
    /// and never truncated.
    pub fn format_row(&self, repository: &str, tag: &str) -> String {
        format!(
            "{:<repo_width$} {:<tag_width$}",
            repository,
            tag,
            repo_width = self.repository_width,
            tag_width = self.tag_width
        )
    }

    /// Formats the header row.
    pub fn header(&self) -> String {
        self.format_row("REPOSITORY", "TAG")
    }

    /// Writes `header()` followed by a newline.
    pub fn write_header(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.header())
    }

    /// Writes one row for `item` followed by a newline.
    pub fn write_row(&self, out: &mut dyn Write, item: &ImageTag) -> io::Result<()> {
        writeln!(out, "{}", self.format_row(&item.repository, &item.tag))
    }
}

/// Format a vector of items as JSON or YAML.
///
/// Pretty output is streamed through [`TableLayout`] instead, so asking for it
/// here is an error.
pub fn format_output_vec<T: Serialize>(
    items: &[T],
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => Err("Pretty output is written as a table".to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(items)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(items).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
    }
}

/// Print a diagnostic message when the context is at least as verbose as `level`.
///
/// Diagnostics go to `err` so they never mix with the table on stdout.
pub fn print(ctx: &AppContext, err: &mut dyn Write, level: VerbosityLevel, message: &str) {
    if ctx.verbosity >= level {
        // Diagnostics are best effort
        let _ = writeln!(err, "{}", message);
    }
}

/// Print an error message with optional coloring
pub fn error(ctx: &AppContext, err: &mut dyn Write, message: &str) {
    let _ = writeln!(err, "{} {}", error_mark(ctx), message);
}

/// Colorize an X mark for errors if colors are enabled
pub fn error_mark(ctx: &AppContext) -> String {
    if ctx.use_color() {
        format!("{}", "✗".red().bold())
    } else {
        "✗".to_string()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
