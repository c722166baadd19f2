//! Eviction policy implementations (replacers).
//!
//! - [`FifoReplacer`] - Round-robin over slots
//! - [`LruReplacer`] - Oldest recency stamp
//!
//! [`Replacer`] wraps both behind one interface. The TLB and the frame
//! allocator each own one, chosen independently at construction.

mod fifo;
mod lru;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

use crate::common::EvictionPolicy;

/// An eviction policy over `capacity` numbered slots.
#[derive(Debug, Clone)]
pub enum Replacer {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
}

impl Replacer {
    /// Create the replacer for `policy`.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(policy: EvictionPolicy, capacity: usize) -> Self {
        match policy {
            EvictionPolicy::Fifo => Replacer::Fifo(FifoReplacer::new(capacity)),
            EvictionPolicy::Lru => Replacer::Lru(LruReplacer::new(capacity)),
        }
    }

    pub fn policy(&self) -> EvictionPolicy {
        match self {
            Replacer::Fifo(_) => EvictionPolicy::Fifo,
            Replacer::Lru(_) => EvictionPolicy::Lru,
        }
    }

    /// Record that `slot` was accessed at `clock`.
    ///
    /// FIFO ignores access history.
    #[inline]
    pub fn record_access(&mut self, slot: usize, clock: u64) {
        if let Replacer::Lru(lru) = self {
            lru.record_access(slot, clock);
        }
    }

    /// Select the slot to evict next.
    pub fn victim(&mut self) -> usize {
        match self {
            Replacer::Fifo(fifo) => fifo.victim(),
            Replacer::Lru(lru) => lru.victim(),
        }
    }

    /// Last-access stamp of `slot`, if the policy tracks one.
    pub fn stamp(&self, slot: usize) -> Option<u64> {
        match self {
            Replacer::Fifo(_) => None,
            Replacer::Lru(lru) => Some(lru.stamp(slot)),
        }
    }

    pub fn capacity(&self) -> usize {
        match self {
            Replacer::Fifo(fifo) => fifo.capacity(),
            Replacer::Lru(lru) => lru.capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacer_policy() {
        assert_eq!(Replacer::new(EvictionPolicy::Fifo, 4).policy(), EvictionPolicy::Fifo);
        assert_eq!(Replacer::new(EvictionPolicy::Lru, 4).policy(), EvictionPolicy::Lru);
        assert_eq!(Replacer::new(EvictionPolicy::Lru, 4).capacity(), 4);
    }

    #[test]
    fn test_fifo_ignores_access() {
        let mut replacer = Replacer::new(EvictionPolicy::Fifo, 3);

        replacer.record_access(0, 100);
        assert_eq!(replacer.stamp(0), None);
        assert_eq!(replacer.victim(), 0);
        assert_eq!(replacer.victim(), 1);
    }

    #[test]
    fn test_lru_follows_access() {
        let mut replacer = Replacer::new(EvictionPolicy::Lru, 3);

        replacer.record_access(0, 3);
        replacer.record_access(1, 1);
        replacer.record_access(2, 2);

        assert_eq!(replacer.stamp(1), Some(1));
        assert_eq!(replacer.victim(), 1);
    }
}
