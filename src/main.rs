use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fixture_scope::cli;
use fixture_scope::ScopeError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fixture-scope", version, about = "Inspect and validate fixture scopes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every scope, broadest first
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a scope label
    Check {
        label: String,
        /// Calling context shown in the error message
        #[arg(long, default_value = "for check")]
        descr: String,
        /// Where the label came from (e.g. a test node id)
        #[arg(long)]
        origin: Option<String>,
    },
    /// Print the next narrower scope
    Next { label: String },
    /// Validate every scope declared in a fixture manifest
    Validate {
        /// Manifest path (default: .fixture-scope/fixtures.yml)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

fn run(args: Cli) -> anyhow::Result<()> {
    match args.command {
        Command::List { json } => cli::list::run(json)?,
        Command::Check {
            label,
            descr,
            origin,
        } => cli::check::run_check(&label, &descr, origin.as_deref())?,
        Command::Next { label } => cli::check::run_next(&label)?,
        Command::Validate { manifest } => cli::validate::run(manifest.as_deref())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FIXTURE_SCOPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // User input errors are shown as bare messages.
            match e.downcast_ref::<ScopeError>() {
                Some(err) if err.is_user_error() => eprintln!("fixture-scope: {err}"),
                _ => eprintln!("fixture-scope: error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
