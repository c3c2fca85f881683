#[macro_use] extern crate log;
extern crate percolation;
extern crate rand;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::Path;
use std::process;

use percolation::{Config, PercolationStats, Result};

// usage: percolation_stats [--config FILE] [n trials [seed]]
fn run() -> Result<()> {
	let mut args: Vec<String> = env::args().skip(1).collect();
	let mut config = if args.first().map(String::as_str) == Some("--config") && args.len() >= 2 {
		let path = args.remove(1);
		args.remove(0);
		Config::load(Path::new(&path))?
	} else {
		Config::default()
	};
	config.apply_args(args.into_iter())?;
	config.init_logger()?;

	let mut rng = match config.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};
	info!("running {} trials on a {}x{} grid", config.trials, config.grid_size, config.grid_size);
	let stats = PercolationStats::run(config.grid_size, config.trials, &mut rng)?;

	println!("mean                    = {}", stats.mean());
	println!("stddev                  = {}", stats.stddev());
	println!("95% confidence interval = [{}, {}]", stats.confidence_lo(), stats.confidence_hi());
	debug!("{}", stats.to_json());
	Ok(())
}

fn main() {
	if let Err(e) = run() {
		eprintln!("percolation_stats: {}", e);
		process::exit(1);
	}
}
