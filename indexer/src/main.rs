use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use search_core::source::{load_path, save_preprocessed};
use search_core::{ingest, DocIdAllocator, Preprocessor, PreprocessorConfig, SimilarityEngine};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a TF-IDF index over a corpus and query it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Input path (JSON/JSONL file or directory)
    #[arg(long)]
    input: PathBuf,
    /// Preprocessor configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Language code, overrides the configuration file
    #[arg(long)]
    language: Option<String>,
    /// Skip documents whose detected language differs
    #[arg(long, default_value_t = false)]
    recognize_language: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and print corpus statistics
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Number of most widespread terms to list
        #[arg(long, default_value_t = 10)]
        top_terms: usize,
    },
    /// Normalize a corpus with the language gate on and save the terms as JSON
    Preprocess {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[arg(long)]
        output: PathBuf,
    },
    /// Build the index and rank documents against a query
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Serialize)]
struct Stats {
    documents: usize,
    skipped: usize,
    vocabulary: usize,
    top_terms: Vec<TermSummary>,
}

#[derive(Serialize)]
struct TermSummary {
    term: String,
    document_frequency: u32,
    collection_frequency: u64,
}

#[derive(Serialize)]
struct Hit<'a> {
    doc_id: u32,
    score: f64,
    external_id: Option<&'a str>,
    title: Option<&'a str>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { corpus, top_terms } => stats(&corpus, top_terms),
        Commands::Preprocess { mut corpus, output } => {
            corpus.recognize_language = true;
            preprocess(&corpus, &output)
        }
        Commands::Search { corpus, query, limit } => search(&corpus, &query, limit),
    }
}

fn load_config(args: &CorpusArgs) -> Result<PreprocessorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let reader = BufReader::new(File::open(path).with_context(|| format!("opening {}", path.display()))?);
            serde_json::from_reader(reader).with_context(|| format!("parsing {}", path.display()))?
        }
        None => PreprocessorConfig::default(),
    };
    if let Some(language) = &args.language {
        config.language = language.clone();
    }
    if args.recognize_language {
        config.recognize_language = true;
    }
    Ok(config)
}

fn build_engine(args: &CorpusArgs) -> Result<(SimilarityEngine, search_core::Corpus)> {
    let preprocessor = Preprocessor::new(load_config(args)?)?;
    let records = load_path(&args.input)?;
    let ids = DocIdAllocator::new();
    let mut corpus = ingest(records, &preprocessor, &ids)?;
    tracing::info!(documents = corpus.len(), skipped = corpus.skipped, "ingested documents");
    let documents = std::mem::take(&mut corpus.documents);
    let engine = SimilarityEngine::build(documents, preprocessor)?;
    Ok((engine, corpus))
}

fn stats(args: &CorpusArgs, top_terms: usize) -> Result<()> {
    let (engine, corpus) = build_engine(args)?;
    let index = engine.index();
    let mut terms: Vec<TermSummary> = index
        .iter()
        .map(|(term, s)| TermSummary {
            term: term.clone(),
            document_frequency: s.document_frequency,
            collection_frequency: s.collection_frequency,
        })
        .collect();
    terms.sort_by(|a, b| b.document_frequency.cmp(&a.document_frequency).then_with(|| a.term.cmp(&b.term)));
    terms.truncate(top_terms);

    let out = Stats {
        documents: engine.documents().len(),
        skipped: corpus.skipped,
        vocabulary: index.len(),
        top_terms: terms,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn preprocess(args: &CorpusArgs, output: &Path) -> Result<()> {
    let preprocessor = Preprocessor::new(load_config(args)?)?;
    let corpus = ingest(load_path(&args.input)?, &preprocessor, &DocIdAllocator::new())?;
    save_preprocessed(&corpus, output)?;
    println!("{}", serde_json::json!({ "documents": corpus.len(), "skipped": corpus.skipped, "output": output }));
    Ok(())
}

fn search(args: &CorpusArgs, query: &str, limit: usize) -> Result<()> {
    let (engine, corpus) = build_engine(args)?;
    for (score, doc) in engine.get_top_n(query, limit) {
        let meta = corpus.docs.get(&doc.id());
        let hit = Hit {
            doc_id: doc.id(),
            score,
            external_id: meta.and_then(|m| m.external_id.as_deref()),
            title: meta.and_then(|m| m.title.as_deref()),
        };
        println!("{}", serde_json::to_string(&hit)?);
    }
    tracing::info!(query, "search complete");
    Ok(())
}
