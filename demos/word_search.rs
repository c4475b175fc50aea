use clap::Parser;
use necto::problems::word_search::{placement_problem, render_grid, Word};
use necto::solver::{assignment::Assignment, engine::SolverEngine, stats::render_stats_table};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const WORDS: [Word; 11] = [
    "ANNA", "BRANDYN", "COURTNEY", "ELI", "FEDERICO", "HENRI", "LANE", "LORENA", "JUSTIN",
    "PATRICK", "SARAH",
];

/// Hide a list of words in a letter grid, crossing only on shared letters.
#[derive(Parser)]
struct Args {
    /// Grid width and height.
    #[arg(long, default_value_t = 16)]
    grid: i32,

    /// Seed for placement shuffling and filler letters.
    #[arg(long)]
    seed: Option<u64>,

    /// Print per-constraint search statistics.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let problem = placement_problem(&WORDS, args.grid, &mut rng)
        .expect("each word constrains only itself");
    let (solution, stats) = SolverEngine::new().solve_with_stats(&problem, Assignment::new());

    match solution {
        Some(solution) => {
            println!("Solution:");
            println!("{}", render_grid(&solution, args.grid, &mut rng));
        }
        None => {
            eprintln!("The words do not fit on a {0}x{0} grid.", args.grid);
            std::process::exit(1);
        }
    }

    if args.stats {
        println!("\n{}", render_stats_table(&stats, &problem));
    }
}
