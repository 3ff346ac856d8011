//! Memoized pairwise distances.

use super::{haversine_distance, Coordinate};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Order-independent key for a coordinate pair.
///
/// Built from the raw bit patterns so that every `f64` (NaN included)
/// maps to a stable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PairKey([u64; 4]);

impl PairKey {
    fn new(a: Coordinate, b: Coordinate) -> Self {
        let ka = [a.longitude.to_bits(), a.latitude.to_bits()];
        let kb = [b.longitude.to_bits(), b.latitude.to_bits()];
        let (lo, hi) = if ka <= kb { (ka, kb) } else { (kb, ka) };
        Self([lo[0], lo[1], hi[0], hi[1]])
    }
}

/// Cache of great-circle distances keyed by unordered coordinate pair.
///
/// `get_or_compute(a, b)` and `get_or_compute(b, a)` share one entry, so
/// the cached value is symmetric by construction. The cache only grows;
/// call [`clear`](Self::clear) between unrelated planning sessions to bound
/// memory.
///
/// Access goes through an `RwLock`, so one cache can serve concurrent
/// pair evaluations.
#[derive(Debug, Default)]
pub struct DistanceCache {
    entries: RwLock<HashMap<PairKey, f64>>,
}

impl DistanceCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached distance, computing and storing it on a miss.
    pub fn get_or_compute(&self, a: Coordinate, b: Coordinate) -> f64 {
        let key = PairKey::new(a, b);
        if let Some(&d) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return d;
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another writer may have filled the slot between the two locks.
        *entries.entry(key).or_insert_with(|| haversine_distance(a, b))
    }

    /// Returns the cached distance without computing it.
    pub fn get(&self, a: Coordinate, b: Coordinate) -> Option<f64> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&PairKey::new(a, b))
            .copied()
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all entries.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
