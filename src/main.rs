// src/main.rs

//! The main entry point for the Tracelink client.

use anyhow::Result;
use std::env;
use std::sync::Arc;
use tracelink::config::{Config, ExecutionMode};
use tracelink::core::commands::{self, CommandContext};
use tracelink::core::fs::LocalFileSystem;
use tracelink::core::net::{ConnectionBus, LocalNetworkResolver};
use tracelink::tui::{
    BatchModeExecutor, ClientWriter, Dispatcher, InteractiveShellExecutor, TtyClientReader,
};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Define version information.
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Collect command-line arguments to decide the execution mode.
    let args: Vec<String> = env::args().collect();

    // Handle the --version flag.
    if args.contains(&"--version".to_string()) {
        println!("Tracelink version {VERSION}");
        return Ok(());
    }

    // Determine the configuration path, provided via a --config flag.
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str());

    // Everything after --batch is one command line; its presence forces
    // batch mode regardless of the configured default.
    let batch_line = args
        .iter()
        .position(|arg| arg == "--batch")
        .map(|i| args[i + 1..].join(" "));

    let mut config = match Config::load(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    if batch_line.is_some() {
        config.mode = ExecutionMode::Batch;
    }

    // Setup logging. Logs go to stderr so they cannot interleave with
    // command output on stdout.
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(true)
        .init();

    info!("Starting Tracelink {} in {} mode", VERSION, config.mode);

    let cw = ClientWriter::stdout();
    let bus = Arc::new(ConnectionBus::new());
    let ctx = CommandContext {
        cw: cw.clone(),
        fs: Arc::new(LocalFileSystem),
        resolver: Arc::new(LocalNetworkResolver),
        recordings_path: config.recordings_path.clone(),
        remote_timeout: config.remote_timeout,
    };
    let registry = commands::build_registry(&ctx, &bus)?;
    let dispatcher = Dispatcher::new(registry, cw.clone());

    match config.mode {
        ExecutionMode::Interactive => {
            let executor = Arc::new(InteractiveShellExecutor::new(cw, dispatcher));
            bus.subscribe(executor.clone());
            let mut reader = TtyClientReader::new();
            executor.run(&mut reader).await?;
        }
        ExecutionMode::Batch => {
            let line = batch_line.unwrap_or_default();
            BatchModeExecutor::new(cw, dispatcher).run(&line).await?;
        }
    }

    Ok(())
}
