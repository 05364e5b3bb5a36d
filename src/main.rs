//! modcheck - Go module update checker CLI tool
//!
//! Lists newer versions of the modules required by a go.mod:
//! - Plain text, one line per module
//! - Table (`--pretty`)
//! - JSON (`--json`)

use clap::Parser;
use modcheck::cli::{CliArgs, Command};
use modcheck::orchestrator::{Orchestrator, OrchestratorConfig};
use modcheck::output::{create_formatter, ListFormatter, OutputConfig, OutputFormatter};
use modcheck::registry::{resolve_proxy_url, GoProxySource, HttpClient};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let color = args.use_color() && console::colors_enabled();
    if !color {
        colored::control::set_override(false);
    }
    init_tracing(args.verbose, color);

    match run(args, color).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `MODCHECK_LOG` wins over `RUST_LOG`
fn init_tracing(verbose: bool, ansi: bool) {
    let default = if verbose {
        "modcheck=debug"
    } else {
        "modcheck=warn"
    };

    let filter = ["MODCHECK_LOG", "RUST_LOG"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(io::stderr)
        .try_init();
}

/// Main application logic
async fn run(args: CliArgs, color: bool) -> anyhow::Result<ExitCode> {
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        path = %args.path.display(),
        "starting"
    );

    let proxy = resolve_proxy_url(args.proxy.as_deref())?;
    debug!(proxy = %proxy, "using module proxy");

    let source = Arc::new(GoProxySource::with_base_url(HttpClient::new()?, proxy));
    let orchestrator = Orchestrator::new(OrchestratorConfig::from(&args), source);
    let result = orchestrator.run().await?;

    let formatter: Box<dyn OutputFormatter> = match args.command {
        Some(Command::Show { old }) => Box::new(ListFormatter::new(old)),
        None => create_formatter(
            OutputConfig::new(args.output_format(), args.upgrade_filter())
                .with_per_row(args.versions_per_row())
                .with_color(color),
        ),
    };

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    if result.has_errors() {
        eprintln!();
        eprintln!("Errors encountered:");
        for error in &result.errors {
            eprintln!("  - {}", error);
        }
        // Partial success - some modules could not be checked
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}
