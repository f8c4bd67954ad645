use crate::context::{AppContext, VerbosityLevel};
use crate::error::CliError;
use crate::format::{self, ImageTag, OutputFormat, TableLayout};
use crate::settings::Settings;
use libregls::auth::{self, DockerConfigStore};
use libregls::{Client, Credentials, RegistryHandle, ReglsError};
use std::io::{self, Write};

/// List every tag of every repository on the registry.
///
/// Pretty output is streamed: the header and the rows of each repository are
/// written as soon as that repository's tags arrive, so a later failure
/// leaves the rows already written in place. JSON and YAML are written only
/// after every request has succeeded.
pub async fn handle_list(
    ctx: &AppContext,
    settings: &Settings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let credentials = resolve_credentials(ctx, settings, err)?;

    let handle = RegistryHandle::with_tls(settings.host.as_str(), credentials, settings.use_tls)
        .map_err(|e| match e {
            ReglsError::Validation { message, .. } => CliError::Argument(message),
            other => CliError::Argument(other.to_string()),
        })?;
    let client = Client::new(handle)
        .map_err(|e| CliError::registry("create HTTP client", &settings.host, e))?;
    let host = client.handle().host();

    format::print(
        ctx,
        err,
        VerbosityLevel::Verbose,
        &format!("Listing repositories from {}", client.registry_url()),
    );

    let repositories = client
        .list_repositories()
        .await
        .map_err(|e| CliError::registry("list repositories", host, e))?;

    format::print(
        ctx,
        err,
        VerbosityLevel::Verbose,
        &format!("Found {} repositories", repositories.len()),
    );

    match settings.format {
        OutputFormat::Pretty => {
            let layout = TableLayout::for_catalog(host, &repositories);
            layout.write_header(out)?;

            for repository in &repositories {
                for item in fetch_tags(ctx, &client, repository, err).await? {
                    layout.write_row(out, &item)?;
                }
            }
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            let mut items = Vec::new();
            for repository in &repositories {
                items.extend(fetch_tags(ctx, &client, repository, err).await?);
            }

            let rendered = format::format_output_vec(&items, settings.format)
                .map_err(|e| CliError::Output(io::Error::other(e)))?;
            writeln!(out, "{}", rendered.trim_end())?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Resolve the credentials for the registry, preferring explicit flags.
fn resolve_credentials(
    ctx: &AppContext,
    settings: &Settings,
    err: &mut dyn Write,
) -> Result<Credentials, CliError> {
    let store_path = settings
        .docker_config
        .clone()
        .unwrap_or_else(DockerConfigStore::default_path);

    match settings.explicit_credentials() {
        Some((username, _)) => format::print(
            ctx,
            err,
            VerbosityLevel::Trace,
            &format!("Using explicit credentials for user '{}'", username),
        ),
        None => format::print(
            ctx,
            err,
            VerbosityLevel::Trace,
            &format!(
                "Reading credentials for {} from {}",
                settings.host,
                store_path.display()
            ),
        ),
    }

    let (username, password) = settings.explicit_credentials().unzip();

    auth::resolve(&settings.host, username, password, &store_path).map_err(|source| {
        if source.is_credentials() {
            CliError::Credentials {
                host: settings.host.clone(),
                source,
            }
        } else {
            CliError::Argument(source.to_string())
        }
    })
}

/// Fetch the tags of one repository as output rows, in registry order.
async fn fetch_tags(
    ctx: &AppContext,
    client: &Client,
    repository: &str,
    err: &mut dyn Write,
) -> Result<Vec<ImageTag>, CliError> {
    let host = client.handle().host();

    format::print(
        ctx,
        err,
        VerbosityLevel::VeryVerbose,
        &format!("Listing tags for {}", repository),
    );

    let tags = client
        .list_tags(repository)
        .await
        .map_err(|e| CliError::registry(format!("list tags for {}", repository), host, e))?;

    Ok(tags
        .iter()
        .map(|tag| ImageTag::new(host, repository, tag))
        .collect())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
