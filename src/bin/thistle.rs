use clap::Parser;
use color_eyre::eyre::WrapErr;
use log::{info, LevelFilter};

use thistlethwaite::cube333::moves::Move333;
use thistlethwaite::cube333::scramble::scramble;
use thistlethwaite::cube333::thistlethwaite::Solver;
use thistlethwaite::cube333::CubieCube;
use thistlethwaite::moves::MoveSequence;

/// Scramble a cube and solve it with Thistlethwaite's algorithm.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Scramble to solve, e.g. "R U2 F'". A random scramble is used if not given.
    #[arg(short, long, conflicts_with = "count")]
    scramble: Option<String>,
    /// Length of the random scramble.
    #[arg(short, long, default_value_t = 25)]
    length: usize,
    /// Seed for the random scramble.
    #[arg(long)]
    seed: Option<u64>,
    /// Solve this many random scrambles and report the average solution length.
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    count: Option<u64>,
    /// Merge moves across phase boundaries.
    #[arg(short, long)]
    cancel: bool,
    /// Log more. Repeat for even more.
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let solver = Solver::new().with_cancellation(cli.cancel);
    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    if let Some(count) = cli.count {
        info!("scrambling with seed {}", rng.get_seed());
        return solve_batch(&solver, &mut rng, count, cli.length);
    }

    let alg: MoveSequence<Move333> = match cli.scramble {
        Some(s) => s
            .parse()
            .wrap_err_with(|| format!("could not read scramble `{s}`"))?,
        None => {
            info!("scrambling with seed {}", rng.get_seed());
            scramble(cli.length, &mut rng)
        }
    };
    println!("Scramble: {alg}");

    let cube = CubieCube::SOLVED.make_moves(&alg);
    let phases = solver.solve_phases(&cube)?;
    for (i, phase) in phases.iter().enumerate() {
        println!("Phase {}: {phase} ({} moves)", i + 1, phase.len());
    }

    let solution = solver.join(phases);
    println!("Solution: {solution} ({} moves)", solution.len());

    Ok(())
}

fn solve_batch(
    solver: &Solver,
    rng: &mut fastrand::Rng,
    count: u64,
    length: usize,
) -> color_eyre::Result<()> {
    let mut total = 0;
    for i in 0..count {
        let alg = scramble(length, rng);
        let solution = solver
            .solve(&CubieCube::SOLVED.make_moves(&alg))
            .wrap_err_with(|| format!("could not solve scramble {} `{alg}`", i + 1))?;
        total += solution.len();
    }

    println!(
        "Solved {count} scrambles, average solution length {:.2} moves",
        total as f64 / count as f64
    );
    Ok(())
}
