//! Phishwatch: lookalike-domain similarity scanner

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishwatch::{
    config::Config,
    engine::ScanEngine,
    http::{AppState, HttpServer},
    whitelist,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "phishwatch")]
#[command(about = "Scan candidate domains for lookalike impersonation of a trusted whitelist")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Whitelist CSV path override
    #[arg(short, long)]
    whitelist: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP scanning service
    Serve {
        /// Listen address override (e.g., "0.0.0.0:8080")
        #[arg(short, long)]
        listen: Option<String>,
    },
    /// One-shot scan of a candidates file, result mapping JSON to stdout
    Scan {
        /// Newline-delimited candidate domains
        #[arg(short = 'f', long)]
        candidates: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        info!("no config file at {}, using defaults", cli.config.display());
        Config::default()
    };

    if let Some(path) = cli.whitelist {
        config.whitelist_path = path;
    }

    match cli.command {
        Commands::Serve { listen } => {
            if let Some(listen) = listen {
                config.http.listen_addr = listen;
            }
            serve(config).await
        }
        Commands::Scan { candidates } => scan_once(config, candidates).await,
    }
}

async fn serve(config: Config) -> Result<()> {
    let parents = whitelist::load(&config.whitelist_path)?;
    let engine = ScanEngine::new(&config)?;

    let state = AppState {
        engine: Arc::new(engine),
        whitelist: Arc::new(parents),
    };

    HttpServer::new(config.http.clone(), state).run().await
}

async fn scan_once(config: Config, candidates_path: PathBuf) -> Result<()> {
    let parents = whitelist::load(&config.whitelist_path)?;
    let blob = std::fs::read_to_string(&candidates_path)?;
    let candidates = phishwatch::http::handlers::parse_candidates(&blob);

    anyhow::ensure!(
        !candidates.is_empty(),
        "candidates file '{}' contains no domains",
        candidates_path.display()
    );

    let engine = ScanEngine::new(&config)?;
    let mapping = engine.run(&parents, &candidates).await;

    println!("{}", serde_json::to_string_pretty(&mapping)?);
    Ok(())
}
