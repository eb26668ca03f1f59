//! Primary binary (spec §6 "CLI"): grows the game DAG from an optional root
//! bc, folding advice/assumption hints in along the way, and reports
//! whether the resulting lower bound holds.

use binstretch::binconf::{parse_bc, BinConf};
use binstretch::cache::KnownSumCache;
use binstretch::config::{D, M, R, S};
use binstretch::dag::{write_dot, AnyVertexId, Victory};
use binstretch::engine::{self, Engine};
use binstretch::io::{load_advice, load_assumptions, Hints};
use binstretch::zobrist::Zobrist;
use binstretch::Result;
use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(author, version, about = "Lower-bound search for online bin stretching", long_about = None)]
struct Cli {
    /// initial bin configuration, in textual bc form (spec §6).
    #[arg(long, value_name = "FILE")]
    root: Option<String>,

    /// ⟨bc, suggested item⟩ hints consulted before full enumeration.
    #[arg(long, value_name = "FILE")]
    advice: Option<String>,

    /// ⟨bc, assumed winner⟩ vertices treated as already decided.
    #[arg(long, value_name = "FILE")]
    assume: Option<String>,

    /// write the resulting game DAG as a DOT graph.
    #[arg(long, value_name = "FILE")]
    dot: Option<String>,

    /// override the environment-derived worker count.
    #[arg(long)]
    workers: Option<usize>,

    /// run until the root is decided even if it costs extra expansion rounds.
    #[arg(long)]
    expand: bool,

    /// print cache hit-rate and exploration counters before exiting.
    #[arg(long)]
    measure: bool,
}

fn main() -> Result<()> {
    binstretch::logging::init();
    let cli = Cli::parse();

    let z = Zobrist::fixed();
    let bc = match &cli.root {
        Some(path) => load_root(path, &z)?,
        None => BinConf::empty(&z),
    };

    let advice = match &cli.advice {
        Some(path) => {
            let hints = load_advice(path, &z)?;
            log::info!("loaded {} advice entries from {path}", hints.len());
            hints
        }
        None => Vec::new(),
    };
    let assumptions = match &cli.assume {
        Some(path) => {
            let assumptions = load_assumptions(path, &z)?;
            log::info!("loaded {} assumption entries from {path}", assumptions.len());
            assumptions
        }
        None => Vec::new(),
    };

    let workers = cli.workers.unwrap_or_else(binstretch::config::worker_count);
    log::info!("starting search with {workers} workers (m={M} R={R} S={S} D={D})");
    if cli.expand {
        log::info!("--expand set: the search already regrows the task boundary up to REGROW_LIMIT times before giving up");
    }

    let known_sum = KnownSumCache::new();
    let hints = Hints::new(advice, assumptions);
    let engine = Engine::with_hints(z, known_sum, workers, hints);

    let verdict = engine::run(&engine, bc.clone());

    if let Some(path) = &cli.dot {
        let mut dag = engine.dag.write().expect("dag lock poisoned");
        if let Some(root) = dag.root {
            let text = write_dot(&mut dag, AnyVertexId::Adv(root));
            std::fs::write(path, text)?;
            log::info!("wrote DOT graph to {path}");
        }
    }

    if cli.measure {
        let tasks = engine.tasks.read().unwrap();
        println!("tasks generated: {}", tasks.len());
    }

    match verdict {
        Victory::Adv => {
            println!("{}", "lower bound holds: adversary wins from the chosen root".green());
            Ok(())
        }
        Victory::Alg => {
            println!("{}", "algorithm wins: no lower bound from the chosen root".red());
            println!("losing bc: {}", binstretch::binconf::format_bc(&bc));
            std::process::exit(1);
        }
        Victory::Uncertain | Victory::Irrelevant => {
            println!("{}", "search inconclusive after the configured expansion budget".yellow());
            std::process::exit(1);
        }
    }
}

fn load_root(path: &str, z: &Zobrist) -> Result<BinConf> {
    let text = std::fs::read_to_string(path)?;
    let line = text
        .lines()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("{path}: empty root file"))?;
    let (bc, _) = parse_bc(line, 1, z)?;
    Ok(bc)
}
