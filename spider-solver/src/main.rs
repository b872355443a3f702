//! Spider Solitaire Solver
//!
//! Reads a two-suit (or one-suit) Spider solitaire game file, fills the
//! unknown-card pool, and runs the heuristic best-first search in
//! `spider-engine` to find a winning move sequence.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod formatter;
mod gamefile;
mod shuffler;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use spider_engine::deck::Deck;
use spider_engine::error::SpiderError;
use thiserror::Error;

use shuffler::Variant;

/// Heuristic best-first solver for two-suit Spider solitaire.
#[derive(Parser, Debug)]
#[command(name = "spider-solver")]
struct Cli {
    /// Path to the game description file.
    game_file: String,

    /// Per-bucket frontier capacity.
    #[arg(short = 'c', long = "cap", default_value_t = 500)]
    cap: usize,

    /// Verbose search-depth tracing, plus a JSON trace summary on stderr.
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Recursive re-solve: try to shorten the winning trail (§6.4).
    #[arg(short = 'r')]
    recursive: bool,

    /// Seed for shuffling the unknown-card pool.
    #[arg(long = "seed", default_value_t = 1)]
    seed: u64,

    /// Use the one-suit (all-Spades) variant instead of two-suit.
    #[arg(long = "one-suit")]
    one_suit: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Spider(#[from] SpiderError),
}

#[derive(Serialize)]
struct SearchTrace {
    cap: usize,
    final_depth: i64,
    move_count: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    // `clap`'s own `Parser::parse()` exits with its USAGE code (2) on a
    // malformed CLI; `spec.md` §6 mandates exit code 1 for that case, so
    // the error path is handled explicitly instead.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let text = fs::read_to_string(&cli.game_file).map_err(|source| CliError::Io {
        path: cli.game_file.clone(),
        source,
    })?;
    let mut deck = gamefile::parse(&text)?;

    let variant = if cli.one_suit { Variant::OneSuit } else { Variant::TwoSuit };
    if let Err(e) = shuffler::fill_unknowns(&mut deck, variant, cli.seed) {
        eprintln!("Required left: {e}");
        return Err(e.into());
    }
    deck.check_invariants()?;

    let initial = deck.clone();
    let mut best = deck;
    let depth = best.shortest_path(cli.cap, cli.debug)?;

    if depth < 0 {
        if cli.debug {
            emit_trace(cli.cap, depth, 0);
        }
        return Ok(());
    }

    if cli.recursive {
        best = recursive_resolve(&initial, best, cli.cap, cli.debug);
    }

    print!("{}", formatter::format_solution(&initial, best.moves()));

    if cli.debug {
        emit_trace(cli.cap, depth, best.moves().len());
    }
    Ok(())
}

fn emit_trace(cap: usize, final_depth: i64, move_count: usize) {
    let trace = SearchTrace { cap, final_depth, move_count };
    if let Ok(json) = serde_json::to_string(&trace) {
        eprintln!("{json}");
    }
}

/// §6.4: replay a shrinking prefix of `best`'s trail from `initial` and try
/// re-solving from the resulting position. `Deck::shortest_path` carries the
/// replayed prefix forward into any winning trail it finds, so a successful
/// re-solve's move count is directly comparable to `best`'s.
fn recursive_resolve(initial: &Deck, mut best: Deck, cap: usize, debug: bool) -> Deck {
    let mut undo = 1usize;
    while undo < best.moves().len() {
        let prefix_len = best.moves().len() - undo;
        let mut candidate = initial.clone();
        for &m in &best.moves()[..prefix_len] {
            candidate = candidate.apply_move(m);
        }

        // Each loop iteration is an independent search (§5/§9): the intern
        // table is process-wide, so it must be reset between them or it
        // leaks every prior iteration's piles for the rest of the process.
        spider_engine::pile::reset_intern_table();

        match candidate.shortest_path(cap, debug) {
            Ok(d) if d > 0 && candidate.moves().len() <= best.moves().len() => {
                best = candidate;
                undo += 1;
            }
            _ => break,
        }
    }
    best
}
