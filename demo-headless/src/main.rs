use clap::Parser;
use heatplate_core::{render_grid, render_report, solve, SolverConfig};

/// Steady-state heat plate demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "heatplate-demo")]
#[command(about = "2-D Laplace solver demo (Liebmann's method)", long_about = None)]
struct Args {
    /// Fixed temperature along the top edge
    #[arg(short, long, default_value_t = 100.0)]
    top: f64,

    /// Fixed temperature along the left edge
    #[arg(short, long, default_value_t = 75.0)]
    left: f64,

    /// Fixed temperature along the right edge
    #[arg(short, long, default_value_t = 50.0)]
    right: f64,

    /// Interior node count (grid dimension is ceil(sqrt(n)) + 2)
    #[arg(short = 'n', long, default_value_t = 49)]
    interior_nodes: usize,

    /// SOR relaxation factor, strictly between 0 and 2
    #[arg(long, default_value_t = 1.5)]
    lambda: f64,

    /// Convergence tolerance on the max relative change per sweep
    #[arg(long, default_value_t = 0.01)]
    tolerance: f64,

    /// Maximum number of relaxation sweeps before giving up
    #[arg(long, default_value_t = 10_000)]
    max_iterations: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = SolverConfig {
        top_temp: args.top,
        left_temp: args.left,
        right_temp: args.right,
        interior_nodes: args.interior_nodes,
        relaxation_factor: args.lambda,
        tolerance: args.tolerance,
        max_iterations: args.max_iterations,
    };

    match solve(&config) {
        Ok(solution) => {
            println!("Liebmann's Method (insulated bottom boundary):\n");
            print!("{}", render_grid(&solution.field));
            println!("{}", render_report(solution.iterations));
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
