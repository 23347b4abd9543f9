//! Identifier pools.
//!
//! A pool is a fixed-size set of unique, deterministically generated UUID
//! v4 identifiers for one entity type. Foreign keys are drawn from pools
//! either positionally (row index divided by a group size) or by uniform
//! random sampling, per the configured [`FkStrategy`].

use std::collections::HashSet;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

use crate::config::FkStrategy;
use crate::error::GenerationError;

/// A fixed-size set of unique identifiers for one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPool {
    entity: &'static str,
    ids: Vec<Uuid>,
}

impl IdPool {
    /// Generates a pool of `count` unique identifiers from the RNG.
    ///
    /// Identifiers carry UUID v4 version and variant bits, so their textual
    /// form matches what the consuming schema expects. Collisions from the
    /// RNG are discarded and redrawn, keeping the pool pairwise distinct.
    #[must_use]
    pub fn generate(entity: &'static str, count: usize, rng: &mut ChaCha8Rng) -> Self {
        let mut seen = HashSet::with_capacity(count);
        let mut ids = Vec::with_capacity(count);
        while ids.len() < count {
            let id = Builder::from_random_bytes(rng.random()).into_uuid();
            if seen.insert(id) {
                ids.push(id);
            }
        }
        Self { entity, ids }
    }

    /// Returns the number of identifiers in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the pool holds no identifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the identifiers in generation order.
    #[must_use]
    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }

    /// Returns the identifier at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::PoolIndexOutOfRange`] if `index` is past
    /// the end of the pool. This surfaces count configurations the up-front
    /// validation could not see (a defensive bound, not a recovery path).
    pub fn get(&self, index: usize) -> Result<Uuid, GenerationError> {
        self.ids
            .get(index)
            .copied()
            .ok_or(GenerationError::PoolIndexOutOfRange {
                entity: self.entity,
                index,
                pool_len: self.ids.len(),
            })
    }

    /// Samples one identifier uniformly at random, with replacement.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyPool`] if the pool is empty.
    pub fn pick(&self, rng: &mut ChaCha8Rng) -> Result<Uuid, GenerationError> {
        if self.ids.is_empty() {
            return Err(GenerationError::EmptyPool {
                entity: self.entity,
            });
        }
        let index = rng.random_range(0..self.ids.len());
        self.get(index)
    }

    /// Selects the identifier for row `row` under the given strategy.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the derived index is out of range,
    /// the group size is zero, or the pool is empty.
    #[expect(
        clippy::integer_division,
        reason = "positional derivation maps consecutive rows onto one pool slot"
    )]
    pub fn select(
        &self,
        strategy: FkStrategy,
        row: usize,
        rng: &mut ChaCha8Rng,
    ) -> Result<Uuid, GenerationError> {
        match strategy {
            FkStrategy::UniformRandom => self.pick(rng),
            FkStrategy::Positional { group_size } => {
                if group_size == 0 {
                    return Err(GenerationError::ZeroGroupSize {
                        entity: self.entity,
                    });
                }
                self.get(row / group_size)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn generates_requested_count_of_distinct_ids() {
        let pool = IdPool::generate("user", 100, &mut rng(42));

        assert_eq!(pool.len(), 100);
        let unique: HashSet<_> = pool.ids().iter().collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let first = IdPool::generate("user", 10, &mut rng(7));
        let second = IdPool::generate("user", 10, &mut rng(7));

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_produce_different_ids() {
        let first = IdPool::generate("user", 1, &mut rng(1));
        let second = IdPool::generate("user", 1, &mut rng(2));

        assert_ne!(first.ids(), second.ids());
    }

    #[test]
    fn ids_carry_uuid_v4_version() {
        let pool = IdPool::generate("study", 20, &mut rng(42));

        for id in pool.ids() {
            assert_eq!(id.get_version_num(), 4, "expected v4 UUID: {id}");
        }
    }

    #[test]
    fn get_reports_out_of_range_index() {
        let pool = IdPool::generate("study", 5, &mut rng(42));

        assert_eq!(
            pool.get(5),
            Err(GenerationError::PoolIndexOutOfRange {
                entity: "study",
                index: 5,
                pool_len: 5,
            })
        );
    }

    #[test]
    fn pick_reports_empty_pool() {
        let pool = IdPool::generate("comment", 0, &mut rng(42));

        assert_eq!(
            pool.pick(&mut rng(1)),
            Err(GenerationError::EmptyPool { entity: "comment" })
        );
    }

    #[rstest]
    #[case(0, 0)]
    #[case(4, 0)]
    #[case(5, 1)]
    #[case(19, 3)]
    fn positional_selection_maps_rows_to_slots(#[case] row: usize, #[case] slot: usize) {
        let pool = IdPool::generate("user", 4, &mut rng(42));
        let mut sample_rng = rng(9);

        let selected = pool
            .select(FkStrategy::Positional { group_size: 5 }, row, &mut sample_rng)
            .expect("selection succeeds");

        assert_eq!(Ok(selected), pool.get(slot));
    }

    #[test]
    fn positional_selection_rejects_zero_group_size() {
        let pool = IdPool::generate("user", 4, &mut rng(42));

        assert_eq!(
            pool.select(FkStrategy::Positional { group_size: 0 }, 0, &mut rng(9)),
            Err(GenerationError::ZeroGroupSize { entity: "user" })
        );
    }

    #[test]
    fn uniform_selection_stays_within_pool() {
        let pool = IdPool::generate("study", 10, &mut rng(42));
        let members: HashSet<_> = pool.ids().iter().copied().collect();
        let mut sample_rng = rng(9);

        for row in 0..100 {
            let selected = pool
                .select(FkStrategy::UniformRandom, row, &mut sample_rng)
                .expect("selection succeeds");
            assert!(members.contains(&selected));
        }
    }
}
