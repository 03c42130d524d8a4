//! logship: write log lines and ship a snapshot to a collector.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller ──▶ LoggingSystem::with_logger ──▶ Logger (cached per category)
//!                      │                           │
//!                      │                           ▼
//!                      │                      MemorySink + tracing
//!                      ▼
//!            detached continuation
//!                      │ consent? (MainContext)
//!                      ▼
//!            snapshot ──▶ HttpUploader ──▶ collector
//!                      │
//!                      ▼
//!            uploaded history (MainContext)
//! ```

use clap::Parser;
use std::path::PathBuf;

use logship::config::loader::load_config;
use logship::observability::{logging, metrics};
use logship::{
    HttpUploader, LogLevel, LoggingSystem, LogshipConfig, MainContext, MemorySettings,
    StandardCategory,
};

#[derive(Parser)]
#[command(name = "logship")]
#[command(about = "Write log lines and upload a snapshot to a collector", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Category to write under
    #[arg(short = 'C', long, default_value = "general")]
    category: StandardCategory,

    /// Level to write at
    #[arg(short, long, default_value = "info")]
    level: LogLevel,

    /// Upload a snapshot after writing
    #[arg(short, long)]
    upload: bool,

    /// Withdraw upload consent for this run
    #[arg(long)]
    opt_out: bool,

    /// Write the current snapshot to a temporary file and print its path
    #[arg(long)]
    dump: bool,

    /// Messages to write
    #[arg(required = true)]
    messages: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LogshipConfig::default(),
    };

    logging::init(&config.logging);
    tracing::info!(
        subsystem = %config.subsystem,
        endpoint = %config.upload.endpoint,
        "logship v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    if config.metrics.enabled {
        if let Ok(addr) = config.metrics.address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.metrics.address,
                "Failed to parse metrics address"
            );
        }
    }

    let settings = MainContext::new(MemorySettings::new(
        config.upload.do_upload_logs && !cli.opt_out,
    ));
    let uploader = HttpUploader::new(&config.upload)?;
    let system = LoggingSystem::new(config.subsystem.clone(), settings, uploader)?;

    let last = cli.messages.len() - 1;
    for (i, message) in cli.messages.iter().enumerate() {
        system.log(cli.category, cli.upload && i == last, |logger| {
            logger.log(cli.level, message.as_str());
        });
    }

    system.flush().await;

    if cli.dump {
        let path = system.snapshot()?.write_to_disk()?;
        println!("{}", path.display());
    }

    let history = system.uploaded_logs().await;
    if !history.is_empty() {
        println!("{}", serde_json::to_string_pretty(&history)?);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
