use rand::{thread_rng, Rng};

/// Keeps one token out of a stream of unknown length, chosen uniformly.
///
/// The i-th token replaces the champion with probability 1/i. After k tokens
/// each of them has survived with probability 1/k.
#[derive(Debug, Clone, Default)]
pub struct ReservoirSampler {
    champion: String,
    seen: usize,
}

impl ReservoirSampler {
    pub fn new() -> ReservoirSampler {
        ReservoirSampler::default()
    }

    pub fn observe(&mut self, token: &str) {
        let mut rng = thread_rng();
        self.observe_with_rng(token, &mut rng);
    }

    pub fn observe_with_rng<R: Rng + ?Sized>(&mut self, token: &str, rng: &mut R) {
        self.seen += 1;
        if rng.gen_bool(1.0 / self.seen as f64) {
            trace!("token {} replaces {:?}", self.seen, self.champion);
            self.champion.clear();
            self.champion.push_str(token);
        }
    }

    /// The current champion, empty if nothing has been observed.
    pub fn result(&self) -> &str {
        &self.champion
    }

    pub fn seen(&self) -> usize {
        self.seen
    }
}
