extern crate percolation;

use std::env;
use std::path::Path;
use std::process;

use percolation::{Config, Percolation, Result};

// Walks a 5x5 grid through a fixed sequence of opens and prints what the
// grid reports after each step.
fn demo() -> Result<()> {
	let mut p = Percolation::new(5)?;
	println!("Open (1,1).");
	p.open(1, 1)?;
	println!("Is (1,1) open? {}", p.is_open(1, 1)?);
	println!("Is (1,1) full? {}", p.is_full(1, 1)?);
	println!("Is (1,2) open? {}", p.is_open(1, 2)?);
	println!("Is (1,2) full? {}", p.is_full(1, 2)?);
	println!("Open (1,2).");
	p.open(1, 2)?;
	println!("Is (1,2) open? {}", p.is_open(1, 2)?);
	println!("Is (1,2) full? {}", p.is_full(1, 2)?);
	println!("Open (3,2).");
	p.open(3, 2)?;
	println!("Is (3,2) open? {}", p.is_open(3, 2)?);
	println!("Is (3,2) full? {}", p.is_full(3, 2)?);
	println!("Open (2,2).");
	p.open(2, 2)?;
	println!("Is (2,2) open? {}", p.is_open(2, 2)?);
	println!("Is (2,2) full? {}", p.is_full(2, 2)?);
	println!("Is (3,2) full? {}", p.is_full(3, 2)?);
	println!("Open (4,2).");
	p.open(4, 2)?;
	println!("Does it percolate? {}", p.percolates());
	println!("Open (5,2).");
	p.open(5, 2)?;
	println!("Does it percolate? {}", p.percolates());
	println!("Open sites: {}", p.number_of_open_sites());
	Ok(())
}

fn main() {
	// optional JSON config file as the only argument
	let config = match env::args().nth(1) {
		Some(path) => Config::load(Path::new(&path)),
		None => Ok(Config::default()),
	};
	let result = config
		.and_then(|config| config.init_logger())
		.and_then(|_| demo());
	if let Err(e) = result {
		eprintln!("percolation: {}", e);
		process::exit(1);
	}
}
