#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;
extern crate simplelog;
extern crate rand;

mod error;
mod disjoint_set;
mod percolation;
mod reservoir;
mod stats;
mod config;

pub use error::{Error, Result};
pub use disjoint_set::DisjointSet;
pub use percolation::Percolation;
pub use reservoir::ReservoirSampler;
pub use stats::PercolationStats;
pub use config::{Config, DEFAULT_GRID_SIZE, DEFAULT_TRIALS};
