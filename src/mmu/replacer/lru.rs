//! LRU (Least-Recently-Used) replacement policy.

/// Recency-stamp victim selection.
///
/// Each slot carries the clock value of its last access. The victim is the
/// slot with the smallest stamp; on ties the lowest index wins, which is what
/// a single forward scan that keeps the first minimum produces.
#[derive(Debug, Clone)]
pub struct LruReplacer {
    /// Last-access clock value per slot (0 = never accessed).
    stamps: Vec<u64>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "replacer capacity must be > 0");
        Self {
            stamps: vec![0; capacity],
        }
    }

    /// Record that `slot` was accessed at `clock`.
    #[inline]
    pub fn record_access(&mut self, slot: usize, clock: u64) {
        self.stamps[slot] = clock;
    }

    /// Last-access stamp of `slot`.
    #[inline]
    pub fn stamp(&self, slot: usize) -> u64 {
        self.stamps[slot]
    }

    /// Select the least recently used slot.
    pub fn victim(&self) -> usize {
        // min_by_key keeps the first of equal minimums
        self.stamps
            .iter()
            .enumerate()
            .min_by_key(|&(_, &stamp)| stamp)
            .map_or(0, |(slot, _)| slot)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.stamps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_basic() {
        let mut replacer = LruReplacer::new(3);

        replacer.record_access(0, 1);
        replacer.record_access(1, 2);
        replacer.record_access(2, 3);

        assert_eq!(replacer.victim(), 0);
    }

    #[test]
    fn test_lru_reaccess_reorders() {
        let mut replacer = LruReplacer::new(3);

        replacer.record_access(0, 1);
        replacer.record_access(1, 2);
        replacer.record_access(2, 3);
        replacer.record_access(0, 4);

        assert_eq!(replacer.victim(), 1);
        assert_eq!(replacer.stamp(0), 4);
    }

    #[test]
    fn test_lru_tie_breaks_by_lowest_index() {
        let mut replacer = LruReplacer::new(4);

        replacer.record_access(0, 9);
        replacer.record_access(1, 5);
        replacer.record_access(2, 9);
        replacer.record_access(3, 5);

        assert_eq!(replacer.victim(), 1);
    }

    #[test]
    fn test_lru_untouched_slots_first() {
        let mut replacer = LruReplacer::new(3);
        replacer.record_access(0, 7);

        assert_eq!(replacer.victim(), 1);
    }

    #[test]
    fn test_lru_victim_does_not_mutate() {
        let mut replacer = LruReplacer::new(2);
        replacer.record_access(0, 1);
        replacer.record_access(1, 2);

        assert_eq!(replacer.victim(), 0);
        assert_eq!(replacer.victim(), 0);
    }
}
