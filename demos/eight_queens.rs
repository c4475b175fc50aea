use clap::Parser;
use necto::problems::n_queens::{queens_problem, render_board};
use necto::solver::{assignment::Assignment, engine::SolverEngine, stats::render_stats_table};
use tracing_subscriber::EnvFilter;

/// Place N queens on an NxN board so that none attacks another.
#[derive(Parser)]
struct Args {
    /// Board size.
    #[arg(long, default_value_t = 8)]
    n: i32,

    /// Print per-constraint search statistics.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let problem = queens_problem(args.n).expect("pairwise constraints only name declared rows");
    let (solution, stats) = SolverEngine::new().solve_with_stats(&problem, Assignment::new());

    match solution {
        Some(solution) => {
            println!("Solution:");
            for row in problem.variables() {
                let column = solution.get(row).expect("solution is complete");
                println!("QUEEN: Row {row}, Column {column}");
            }
            println!("\n{}", render_board(&solution, args.n));
        }
        None => {
            eprintln!("No solution for N={}.", args.n);
            std::process::exit(1);
        }
    }

    if args.stats {
        println!("{}", render_stats_table(&stats, &problem));
    }
}
