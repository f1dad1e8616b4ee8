use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use search_core::PreprocessorConfig;
use server::build_app;
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Corpus path (JSON/JSONL file or directory)
    #[arg(long, default_value = "./corpus")]
    corpus: PathBuf,
    /// Preprocessor configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Language code, overrides the configuration file
    #[arg(long)]
    language: Option<String>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let reader = BufReader::new(File::open(path).with_context(|| format!("opening {}", path.display()))?);
            serde_json::from_reader(reader).with_context(|| format!("parsing {}", path.display()))?
        }
        None => PreprocessorConfig::default(),
    };
    if let Some(language) = args.language {
        config.language = language;
    }
    let app: Router = build_app(&args.corpus, config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
