use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gene_screen::index::sam::SuffixAutomaton;
use gene_screen::io::{panel, report::ReportFormat};
use gene_screen::screen;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "gene-screen", author, version, about = "Screen gene panels against a DNA reference", arg_required_else_help = true)]
struct Cli {
    /// Log phase timings and per-disease counts
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank diseases by the share of their genes detected in the reference
    Run {
        /// Panel file: threshold, reference, then diseases with their genes
        input: String,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Override the minimum match length given in the panel file
        #[arg(long = "min-match")]
        min_match: Option<usize>,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Fail on empty genes or diseases instead of scoring them as 0
        #[arg(long)]
        strict: bool,
    },
    /// Print reference length and suffix automaton size for a panel file
    Stats {
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("gene_screen=debug,info")
    } else {
        EnvFilter::new("gene_screen=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run { input, out, format, min_match, threads, strict } => {
            if threads == 0 {
                anyhow::bail!("--threads must be at least 1");
            }
            screen::screen_file(&input, out.as_deref(), format, min_match, threads, strict)
        }
        Commands::Stats { input } => run_stats(&input),
    }
}

fn run_stats(input: &str) -> Result<()> {
    let fh = std::fs::File::open(input)
        .map_err(|e| anyhow::anyhow!("cannot open input '{}': {}", input, e))?;
    let p = panel::read_panel(std::io::BufReader::new(fh))?;
    let sam = SuffixAutomaton::build(&p.reference).context("invalid reference sequence")?;
    let genes: usize = p.collections.iter().map(|c| c.genes.len()).sum();

    println!("input: {}", input);
    println!("min_match_len: {}", p.min_match_len);
    println!("reference_len: {}", sam.reference_len());
    println!("states: {}", sam.len());
    println!("transitions: {}", sam.transition_count());
    println!("diseases: {}", p.collections.len());
    println!("genes: {}", genes);
    Ok(())
}
