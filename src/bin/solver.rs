use clap::Parser;
use graphsearch::search::{
    heuristics::HeuristicNames, problem_formulations::GraphProblem,
    search_engines::SearchEngineName, validate, SearchProblem,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Search a graph description file for a path from its start node to one of
/// its goal nodes.
struct Cli {
    #[arg(help = "The graph description file (JSON)")]
    graph: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value = "astar"
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use (A* only)",
        long = "heuristic",
        id = "HEURISTIC",
        default_value = "zero"
    )]
    heuristic_name: HeuristicNames,
    #[arg(
        help = "The output plan file, printed to stdout if not given",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    plan: Option<PathBuf>,
    #[arg(
        help = "Increase log verbosity, may be repeated",
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count
    )]
    verbose: u8,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let problem = GraphProblem::from_path(&cli.graph).expect("Failed to load graph file");
    let mut heuristic = cli.heuristic_name.create(&problem);

    match cli.search_engine_name.search(&problem, heuristic.as_mut()) {
        Ok(plan) => {
            info!("validating plan");
            match validate(&plan, &problem) {
                Ok(()) => info!("plan is valid"),
                Err(e) => {
                    info!("plan is invalid: {}", e);
                    return;
                }
            }
            info!(plan_length = plan.len());

            println!("Plan found:");
            println!("{}", plan);
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {}", problem.cost_of_actions(plan.steps()));

            if let Some(path) = cli.plan {
                std::fs::write(path, format!("{}\n", plan)).expect("Failed to write plan file");
            }
        }
        Err(e) => {
            info!("no plan found");
            println!("No plan found: {}", e);
        }
    }
}
