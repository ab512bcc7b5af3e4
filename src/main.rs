use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

use docserve::config::Config;
use docserve::error::FatalError;
use docserve::server::listener::{self, ServeContext};

/// Serve files from a directory over HTTP
#[derive(Debug, Parser)]
#[command(name = "docserve", version)]
struct Args {
    /// Port to listen on (default 8000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory to serve, relative to the working directory (default '.')
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// YAML configuration file (overrides DOCSERVE_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let init = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    if let Err(e) = init {
        let err = FatalError::Log(e.to_string());
        eprintln!("{err}");
        return ExitCode::from(err.exit_code());
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(FatalError::Help) => ExitCode::from(FatalError::Help.exit_code()),
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), FatalError> {
    info!("Starting HTTP server");

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return Err(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => FatalError::Help,
                kind => FatalError::Args(kind.to_string()),
            });
        }
    };

    let cfg = load_config(&args).map_err(|e| FatalError::Args(format!("{e:#}")))?;

    let cwd = std::env::current_dir()
        .context("could not get current working directory")
        .map_err(FatalError::Misc)?;
    let root = cfg.resolve_root(&cwd)?;
    info!("Serving data from '{}'", root.display());

    let listener = listener::create_listener(cfg.port).map_err(FatalError::Socket)?;
    let ctx = ServeContext {
        root: Arc::new(root),
        buffer_capacity: cfg.buffer_capacity,
    };

    tokio::select! {
        res = listener::run(listener, ctx) => {
            res.map_err(FatalError::Misc)?;
        }

        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => Config::from_file(path)?.with_env_overrides()?,
        None => Config::load()?,
    };

    if let Some(port) = args.port {
        cfg = cfg.with_port(port);
    }
    if let Some(dir) = &args.dir {
        cfg.root_dir = dir.clone();
    }

    Ok(cfg)
}
