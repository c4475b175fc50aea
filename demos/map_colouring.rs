use clap::Parser;
use necto::problems::map_colouring::{canada_problem, Colour};
use necto::solver::{assignment::Assignment, engine::SolverEngine, stats::render_stats_table};
use tracing_subscriber::EnvFilter;

/// Colour the map of Canada so that no two bordering regions match.
#[derive(Parser)]
struct Args {
    /// Number of colours in the palette (1 to 4).
    #[arg(long, default_value_t = 4)]
    colours: usize,

    /// Print the solution as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Print per-constraint search statistics.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let palette = &Colour::ALL[..args.colours.clamp(1, Colour::ALL.len())];

    let problem = canada_problem(palette).expect("the border list only names declared regions");
    let (solution, stats) = SolverEngine::new().solve_with_stats(&problem, Assignment::new());

    match solution {
        Some(solution) => {
            if args.json {
                let out: serde_json::Map<String, serde_json::Value> = problem
                    .variables()
                    .iter()
                    .map(|province| {
                        let colour = solution.get(province).expect("solution is complete");
                        (
                            province.to_string(),
                            serde_json::to_value(colour).expect("colour serializes"),
                        )
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out).expect("valid JSON"));
            } else {
                println!("Solution:");
                for province in problem.variables() {
                    let colour = solution.get(province).expect("solution is complete");
                    println!("{province} => {colour:?}");
                }
            }
        }
        None => {
            eprintln!("No solution with {} colour(s).", palette.len());
            std::process::exit(1);
        }
    }

    if args.stats {
        println!("\n{}", render_stats_table(&stats, &problem));
    }
}
