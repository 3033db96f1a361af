//! Preflop equity smoke test.
//!
//! Evaluates one starting hand and prints the solver's response, e.g.
//! `preflop-equity As,Ad 6 400`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use preflop_equity::cards::HoleCards;
use preflop_equity::equity::{EquityReport, EquitySolver, SolverConfig, ValidatedRequest};
use preflop_equity::ValidationError;

#[derive(Parser, Debug)]
#[command(
    name = "preflop-equity",
    about = "Monte Carlo preflop equity for a Texas Hold'em starting hand"
)]
struct Args {
    /// Two comma-separated cards, e.g. As,Ad
    cards: String,

    /// Number of players (2-10)
    #[arg(default_value_t = 2)]
    players: u8,

    /// Solver time budget in ms (100-5000)
    #[arg(default_value_t = 800)]
    timeout_ms: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Solver configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logger already initialized: {}", e);
    }
}

fn validate(args: &Args) -> Result<ValidatedRequest, ValidationError> {
    let hero: HoleCards = args.cards.parse()?;
    ValidatedRequest::new(hero, args.players, args.timeout_ms)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => match SolverConfig::from_json_file(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SolverConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let request = match validate(&args) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "evaluating {} with {} players in {}ms",
        request.hero,
        request.players,
        request.time_budget_ms
    );

    let solver = EquitySolver::new(config);
    let start = Instant::now();
    let result = solver.evaluate_validated(&request);
    let latency_ms = start.elapsed().as_millis();
    let report = EquityReport::from(&result);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Solver response:");
    println!("  win_prob       : {:.4}", report.win_prob);
    println!("  tie_prob       : {:.4}", report.tie_prob);
    println!("  loss_prob      : {:.4}", report.loss_prob);
    println!("  expected_value : {:.4} bb", report.ev_bb);
    println!("  recommendation : {}", report.recommendation);
    println!("  confidence     : {}", report.confidence);
    println!("  iterations     : {}", report.iterations);
    println!("  solver_version : {}", report.solver_version);
    println!("  latency_ms     : {}", latency_ms);

    ExitCode::SUCCESS
}
