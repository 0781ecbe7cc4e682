use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::*;

/// Uniform selection without replacement, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomCategorySelector {
    seed: u64,
}

impl RandomCategorySelector {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl CategorySelector for RandomCategorySelector {
    fn select(self, pool: &[CategoryId], count: usize) -> Result<Vec<CategoryId>> {
        use rand::rngs::SmallRng;
        use rand::seq::index;
        use rand::SeedableRng;

        let mut seen = BTreeSet::new();
        let unique: Vec<CategoryId> = pool.iter().copied().filter(|&id| seen.insert(id)).collect();

        if unique.len() < count {
            return Err(BoardError::InsufficientPool {
                requested: count,
                available: unique.len(),
            });
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let picked: Vec<CategoryId> = index::sample(&mut rng, unique.len(), count)
            .into_iter()
            .map(|i| unique[i])
            .collect();

        log::debug!("selected {} of {} categories: {:?}", count, unique.len(), picked);
        Ok(picked)
    }
}
