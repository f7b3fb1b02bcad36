//! Emblem - Entry point
//!
//! Resolves the runtime configuration (server bindings, metric registry)
//! before any listener is started. A configuration failure of any kind is
//! fatal: the process emits one diagnostic and exits non-zero without
//! serving a single request.

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use emblem_config::RuntimeConfig;

/// Command-line arguments.
///
/// Screens the argument list before it is handed to configuration
/// resolution: `--config`/`-c` pass through, anything unrecognized is
/// rejected up front.
struct Args {
    raw: Vec<String>,
}

impl Args {
    fn parse() -> Self {
        let raw: Vec<String> = std::env::args().skip(1).collect();
        let mut args = raw.iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    args.next();
                }
                _ if arg.starts_with("--config=") => {}
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                "--version" | "-v" => {
                    println!("emblem {}", emblem_config::VERSION);
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown argument: {other}");
                    eprintln!("Use --help for usage information");
                    std::process::exit(1);
                }
            }
        }

        Self { raw }
    }
}

fn print_help() {
    println!(
        r"Emblem - Metrics-to-badge rendering service

USAGE:
    emblem [OPTIONS]

OPTIONS:
    -c, --config <PATH>    Path to the YAML metric-definition file
                           (default: {default_path})
    -h, --help             Print help information
    -v, --version          Print version information

ENVIRONMENT VARIABLES:
    SERVER_HOST            Host to bind to (default: localhost)
    SERVER_PORT            Port to bind to (default: 8888)
    SERVER_READ_TIMEOUT    Socket read timeout, e.g. '10s' (default: none)
    SERVER_WRITE_TIMEOUT   Socket write timeout, e.g. '10s' (default: none)

EXAMPLES:
    # Run with the default configuration path
    emblem

    # Run with an explicit configuration file
    emblem --config /etc/emblem/config.yaml
",
        default_path = emblem_config::source::DEFAULT_CONFIG_PATH
    );
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emblem=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Parse arguments
    let args = Args::parse();

    // Resolve the runtime configuration. Failure here is terminal: no
    // partial startup, no degraded mode.
    let runtime = match RuntimeConfig::initialize(args.raw) {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("failed to load configuration: {}", Report(&e));
            std::process::exit(1);
        }
    };

    info!("starting emblem v{}", emblem_config::VERSION);
    info!("listening on {}", runtime.bindings().addr());
    match runtime.prometheus() {
        Some(upstream) => info!("upstream metrics backend: {upstream}"),
        None => info!("no upstream metrics backend configured"),
    }
    info!("{} metrics registered", runtime.registry().len());
}

// Renders an error with its source chain on one line.
struct Report<'a>(&'a dyn std::error::Error);

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}
