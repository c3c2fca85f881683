use error::{Error, Result};
use percolation::{site_count, Percolation};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use std::mem;

const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold: the fraction of open
/// sites at which a random n-by-n grid starts to percolate.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    pub fn run<R: Rng + ?Sized>(n: isize, trials: isize, rng: &mut R) -> Result<PercolationStats> {
        let num_sites = site_count(n)? as f64;
        if trials <= 0 || trials as usize > isize::max_value() as usize / mem::size_of::<f64>() {
            return Err(Error::InvalidTrials(trials));
        }

        let mut sites: Vec<(isize, isize)> = (1..=n)
            .flat_map(|r| (1..=n).map(move |c| (r, c)))
            .collect();

        let mut thresholds = Vec::new();
        for _ in 0..trials {
            let mut grid = Percolation::new(n)?;
            sites.shuffle(rng);
            for &(row, col) in sites.iter() {
                grid.open(row, col)?;
                if grid.percolates() {
                    break;
                }
            }
            thresholds.push(grid.number_of_open_sites() as f64 / num_sites);
        }

        let stats = PercolationStats { n: n as usize, thresholds };
        info!("{} trials on a {}x{} grid: mean threshold {:.6}",
            trials, n, n, stats.mean());
        Ok(stats)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation; NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        let t = self.thresholds.len() as f64;
        let mean = self.mean();
        let ss: f64 = self.thresholds.iter().map(|x| (x - mean) * (x - mean)).sum();
        (ss / (t - 1.0)).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "n": self.n,
            "trials": self.thresholds.len(),
            "mean": self.mean(),
            "stddev": self.stddev(),
            "confidence_lo": self.confidence_lo(),
            "confidence_hi": self.confidence_hi(),
        })
    }
}
