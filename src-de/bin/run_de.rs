//! Run the DE optimizer on a named benchmark function and print the
//! report as JSON.
//!
//! ```bash
//! cargo run --bin run_de -- --function rosenbrock --dim 10 --constrained --seed 42
//! ```

use clap::Parser;
use ndarray::Array1;

use globopt_de::{DEConfigBuilder, DEReport, Mutation, differential_evolution,
	differential_evolution_constrained};
use globopt_testfunctions::{ackley, create_bounds, rastrigin, rosenbrock, schaffer_n2, sphere,
	sum_budget_constraint};

#[derive(Parser, Debug)]
#[command(name = "run_de", about = "Differential Evolution demo runner")]
struct Args {
	/// Benchmark function: sphere | rosenbrock | ackley | schaffer2 | rastrigin
	#[arg(long, default_value = "sphere")]
	function: String,

	/// Problem dimension (2-D only functions ignore values other than 2)
	#[arg(long, default_value_t = 2)]
	dim: usize,

	/// Half-width of the symmetric bounds [-range, range]
	#[arg(long, default_value_t = 5.0)]
	range: f64,

	/// Add the sum(x) - 10 <= 0 budget constraint
	#[arg(long)]
	constrained: bool,

	/// Maximum number of generations
	#[arg(long, default_value_t = 1000)]
	maxiter: usize,

	/// Stop after this many generations without improvement
	#[arg(long, default_value_t = 100)]
	breakafter: usize,

	/// Population size multiplier (total NP = popsize * dim)
	#[arg(long, default_value_t = 16)]
	popsize: usize,

	/// Recombination probability CR
	#[arg(long, default_value_t = 0.8)]
	recombination: f64,

	/// Fixed mutation factor; dithering in [0.5, 0.8) when omitted
	#[arg(long)]
	mutation: Option<f64>,

	/// RNG seed for reproducible runs
	#[arg(long)]
	seed: Option<u64>,

	/// Print progress at each generation
	#[arg(long)]
	verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	let func: fn(&Array1<f64>) -> f64 = match args.function.as_str() {
		"sphere" => sphere,
		"rosenbrock" => rosenbrock,
		"ackley" => ackley,
		"schaffer2" => schaffer_n2,
		"rastrigin" => rastrigin,
		other => return Err(format!("unknown function: {}", other).into()),
	};
	let dim = match args.function.as_str() {
		// 2-D only benchmarks
		"ackley" | "schaffer2" => 2,
		_ => args.dim,
	};

	let mut builder = DEConfigBuilder::new()
		.maxiter(args.maxiter)
		.breakafter(args.breakafter)
		.popsize(args.popsize)
		.recombination(args.recombination)
		.disp(args.verbose);
	if let Some(f) = args.mutation {
		builder = builder.mutation(Mutation::Factor(f));
	}
	if let Some(s) = args.seed {
		builder = builder.seed(s);
	}
	let config = builder.build();

	let bounds = create_bounds(dim, -args.range, args.range);
	let report: DEReport = if args.constrained {
		differential_evolution_constrained(&func, &sum_budget_constraint, &bounds, config)?
	} else {
		differential_evolution(&func, &bounds, config)?
	};

	println!("{}", serde_json::to_string_pretty(&report)?);

	Ok(())
}
