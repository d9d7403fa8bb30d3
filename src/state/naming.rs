use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::config::NamingConfig;

/// Candidate names for new drawings.
///
/// A handful of random suffixes is drawn up front; each save picks one of
/// them at random. Candidates whose key is already taken are skipped, and if
/// every candidate is taken a UUID suffix is used instead.
#[derive(Debug, Clone)]
pub struct NamePool {
    prefix: String,
    candidates: Vec<u32>,
}

impl NamePool {
    /// Draw the pool. An inverted suffix range is read with its bounds swapped.
    pub fn generate<R: Rng + ?Sized>(config: &NamingConfig, rng: &mut R) -> Self {
        let (low, high) = if config.min_suffix <= config.max_suffix {
            (config.min_suffix, config.max_suffix)
        } else {
            log::warn!(
                "Name suffix range {}..={} is inverted",
                config.min_suffix,
                config.max_suffix
            );
            (config.max_suffix, config.min_suffix)
        };
        let candidates = (0..config.pool_size.max(1))
            .map(|_| rng.gen_range(low..=high))
            .collect();
        Self {
            prefix: config.prefix.clone(),
            candidates,
        }
    }

    pub fn candidates(&self) -> &[u32] {
        &self.candidates
    }

    pub fn candidate_names(&self) -> impl Iterator<Item = String> + '_ {
        self.candidates.iter().map(|n| format!("{}{}", self.prefix, n))
    }

    /// Pick a name for which `is_taken` returns false.
    pub fn choose<R, F>(&self, rng: &mut R, mut is_taken: F) -> String
    where
        R: Rng + ?Sized,
        F: FnMut(&str) -> bool,
    {
        let mut order: Vec<String> = self.candidate_names().collect();
        order.shuffle(rng);

        if let Some(name) = order.into_iter().find(|name| !is_taken(name)) {
            return name;
        }

        let fallback = format!("{}-{}", self.prefix, Uuid::new_v4().simple());
        log::warn!("All drawing name candidates taken, using {}", fallback);
        fallback
    }
}
