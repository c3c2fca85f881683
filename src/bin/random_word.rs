#[macro_use] extern crate log;
extern crate percolation;

use std::io::{BufRead, BufReader, stdin};
use std::process;

use percolation::{Config, ReservoirSampler};

// Reads whitespace separated words from stdin and prints one of them,
// each with equal probability.
fn main() {
	let _ = Config::default().init_logger();

	let stdin = stdin();
	let reader = BufReader::new(stdin.lock());
	let mut sampler = ReservoirSampler::new();
	for line in reader.lines() {
		let line = match line {
			Ok(line) => line,
			Err(e) => {
				error!("reading stdin: {}", e);
				process::exit(1);
			}
		};
		for token in line.split_whitespace() {
			sampler.observe(token);
		}
	}
	debug!("picked from {} words", sampler.seen());
	println!("{}", sampler.result());
}
