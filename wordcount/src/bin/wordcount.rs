//! Time whole-word term counting over a play-script corpus.
//!
//! Usage:
//!     cargo run --release --bin wordcount -- data/shakespeare-plays.csv --term thee
//!     cargo run --release --bin wordcount -- --synthetic 1000000 --mode parallel
//!
//! Without a path or `--synthetic`, the bundled sample corpus is searched.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordcount::{compare, decode, ReportFormat, SearchMode, SearchTerm};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Corpus file (comma-delimited records, text after the 4th comma)
    #[arg(conflicts_with = "synthetic")]
    corpus: Option<PathBuf>,

    /// Term to count (lowercased before matching)
    #[arg(short, long, default_value = "thee")]
    term: String,

    /// Implementations to time, in order
    #[arg(short, long, value_delimiter = ',', default_value = "sequential,parallel")]
    mode: Vec<SearchMode>,

    /// Generate a synthetic corpus with this many records instead of reading a file
    #[arg(short, long)]
    synthetic: Option<usize>,

    /// Seed for the synthetic corpus
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Worker threads for parallel mode (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Raw corpus bytes; decoding happens once in `main`.
fn load_corpus(args: &Args) -> Result<Cow<'static, [u8]>> {
    if let Some(path) = &args.corpus {
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "loaded corpus");
        return Ok(Cow::Owned(bytes));
    }
    if let Some(records) = args.synthetic {
        let text = demo_data::synthetic_corpus(records, args.seed)
            .context("Failed to generate synthetic corpus")?;
        info!(records, seed = args.seed, bytes = text.len(), "generated corpus");
        return Ok(Cow::Owned(text.into_bytes()));
    }
    info!("using bundled sample corpus");
    Ok(Cow::Borrowed(demo_data::sample_corpus().as_bytes()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let term = SearchTerm::parse(&args.term).context("Invalid --term")?;
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let bytes = load_corpus(&args)?;
    let corpus = decode(&bytes).context("Corpus is not valid UTF-8")?;
    let format = if args.json { ReportFormat::Json } else { ReportFormat::Text };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let runs = compare(corpus, term.as_str(), &args.mode, format, &mut out)
        .context("Failed to write report")?;
    out.flush()?;

    if runs.windows(2).any(|w| w[0].count() != w[1].count()) {
        let counts: Vec<usize> = runs.iter().map(|r| r.count()).collect();
        anyhow::bail!("implementations disagree: {:?}", counts);
    }
    Ok(())
}
