extern crate percolation;
extern crate rand;

use percolation::{Error, Percolation, PercolationStats, ReservoirSampler};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn new_grids_start_closed() {
    for n in 1..8 {
        let p = Percolation::new(n).unwrap();
        assert_eq!(p.number_of_open_sites(), 0);
        if n > 1 {
            assert!(!p.percolates());
        }
    }
}

#[test]
fn construction_rejects_non_positive_sizes() {
    assert!(Percolation::new(0).unwrap_err().is_invalid_argument());
    assert!(Percolation::new(-1).unwrap_err().is_invalid_argument());
}

#[test]
fn boundary_coordinates_are_rejected() {
    let n = 4;
    let mut p = Percolation::new(n).unwrap();
    for &(r, c) in [(0, 1), (n + 1, 1), (1, 0), (1, n + 1)].iter() {
        assert!(p.open(r, c).unwrap_err().is_invalid_argument(), "open({}, {})", r, c);
    }
    assert_eq!(p.number_of_open_sites(), 0);
}

#[test]
fn one_by_one_grid() {
    let mut p = Percolation::new(1).unwrap();
    assert!(!p.percolates());
    p.open(1, 1).unwrap();
    assert!(p.percolates());
    assert!(p.is_full(1, 1).unwrap());
}

#[test]
fn demo_sequence_on_five_by_five() {
    let mut p = Percolation::new(5).unwrap();
    p.open(1, 1).unwrap();
    assert!(p.is_full(1, 1).unwrap());
    assert!(!p.is_open(1, 2).unwrap());
    p.open(1, 2).unwrap();
    assert!(p.is_full(1, 2).unwrap());
    p.open(3, 2).unwrap();
    assert!(p.is_open(3, 2).unwrap());
    assert!(!p.is_full(3, 2).unwrap());
    p.open(2, 2).unwrap();
    assert!(p.is_full(2, 2).unwrap());
    assert!(p.is_full(3, 2).unwrap());
    p.open(4, 2).unwrap();
    assert!(!p.percolates());
    p.open(5, 2).unwrap();
    assert!(p.percolates());
    assert_eq!(p.number_of_open_sites(), 6);
}

#[test]
fn errors_are_comparable() {
    let p = Percolation::new(2).unwrap();
    assert_eq!(p.is_full(3, 1), Err(Error::RowOutOfBounds { row: 3, n: 2 }));
}

#[test]
fn reservoir_over_a_word_stream() {
    let text = "it was the best of times it was the worst of times";
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut rng = StdRng::seed_from_u64(12);
    let mut sampler = ReservoirSampler::new();
    for w in &words {
        sampler.observe_with_rng(w, &mut rng);
    }
    assert_eq!(sampler.seen(), words.len());
    assert!(words.contains(&sampler.result()));
}

#[test]
fn stats_on_a_small_grid() {
    let mut rng = StdRng::seed_from_u64(4);
    let stats = PercolationStats::run(20, 30, &mut rng).unwrap();
    assert_eq!(stats.size(), 20);
    assert!(stats.mean() > 0.4 && stats.mean() < 0.8, "mean {}", stats.mean());
    assert!(stats.confidence_lo() < stats.confidence_hi());
}
