//! probekit: run configured scripts on `/probe` and republish their output
//! as metrics.
//!
//! - `/probe?script=...` : run a script, respond with exposition text
//! - `/metrics`          : exporter self-metrics
//! - `--create-token`    : print a bearer token for the configured key

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use probekit_core::error::{ProbeError, Result};
use probekit_gateway::{app_state, auth, build_info::BUILD, config, router};

/// Prometheus exporter that runs scripts and republishes their output.
#[derive(Parser, Debug)]
#[command(name = "probekit", disable_version_flag = true)]
struct Args {
    /// Address to listen on for web interface and telemetry
    #[arg(long = "web.listen-address", env = "PROBEKIT_LISTEN_ADDRESS", default_value = ":9469")]
    listen_address: String,

    /// Configuration file in YAML format
    #[arg(long = "config.file", env = "PROBEKIT_CONFIG_FILE", default_value = "config.yaml")]
    config_file: String,

    /// Create bearer token for authentication and exit
    #[arg(long = "create-token")]
    create_token: bool,

    /// Show version information and exit
    #[arg(long)]
    version: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long = "log.level", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.version {
        println!("{}", BUILD.print("probekit"));
        return ExitCode::SUCCESS;
    }

    init_logging(&args.log_level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "probekit exited");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt().with_env_filter(filter).init();
}

async fn run(args: Args) -> Result<()> {
    let cfg = config::load_from_file(&args.config_file)?;

    if args.create_token {
        let token = auth::issue_token(&cfg.bearer_auth.signing_key)?;
        println!("Bearer token: {token}");
        return Ok(());
    }

    if cfg.tls.active {
        return Err(ProbeError::Config(
            "tls.active is set but probekit serves plain HTTP; terminate TLS in front of it".into(),
        ));
    }

    let listen = config::listen_addr(&args.listen_address)?;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(version = %BUILD.info(), build = %BUILD.build_context(), "starting probekit");
    tracing::info!(%listen, "probekit listening");

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ProbeError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ProbeError::Internal(format!("server failed: {e}")))
}
