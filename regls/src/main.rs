use clap::{CommandFactory, Parser, error::ErrorKind};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

mod commands;
mod context;
mod error;
mod format;
mod settings;

use context::{AppContext, VerbosityLevel};
use error::{CliError, EXIT_SUCCESS, EXIT_USAGE};
use format::{ColorChoice, OutputFormat};

/// regls - list the repositories and tags of a Docker registry
///
/// Credentials come from -u/-p when both are given, otherwise from the
/// registry's entry in the Docker credential store (~/.docker/config.json).
#[derive(Parser, Debug)]
#[command(name = "regls")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Registry host, with port if needed (e.g. reg.example.com:5000)
    #[arg(short, long, env = "REGLS_REGISTRY", value_name = "HOST[:PORT]")]
    registry: Option<String>,

    /// Username for Basic authentication (requires --password)
    #[arg(short, long, env = "REGLS_USERNAME")]
    username: Option<String>,

    /// Password for Basic authentication (requires --username)
    #[arg(short, long, env = "REGLS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Talk to the registry over plain HTTP instead of HTTPS
    #[arg(long)]
    plain_http: bool,

    /// Credential store to read instead of the Docker default
    #[arg(long, value_name = "FILE")]
    docker_config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Verbose output on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output [default: auto, or $REGLS_COLOR]
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,
}

fn main() {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock());
    std::process::exit(code);
}

/// Runs one invocation and returns its exit code.
///
/// This is the only place that turns errors into output; everything below it
/// returns `Result`.
fn run<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let ctx = AppContext::build(cli.color, VerbosityLevel::from_count(cli.verbose));

    let result = settings::validate(&cli).and_then(|settings| {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(commands::list::handle_list(&ctx, &settings, out, err))
    });

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&ctx, &e, err),
    }
}

/// Prints help/version to stdout (exit 0) or a parse error to stderr (exit 2).
fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = write!(out, "{}", e.render());
            EXIT_SUCCESS
        }
        _ => {
            let _ = write!(err, "{}", e.render());
            EXIT_USAGE
        }
    }
}

fn report_error(ctx: &AppContext, e: &CliError, err: &mut dyn Write) -> i32 {
    format::error(ctx, err, &e.to_string());
    if e.wants_usage() {
        let _ = writeln!(err, "{}", Cli::command().render_usage());
    }
    e.exit_code()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
