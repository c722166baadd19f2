//! FIFO (First-In-First-Out) replacement policy.

/// Round-robin victim selection over a fixed number of slots.
///
/// The cursor advances on every victim selection regardless of how recently
/// the slot was used, so slots are evicted in the order they were filled.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    /// Slot that will be returned by the next `victim()` call.
    next: usize,

    capacity: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "replacer capacity must be > 0");
        Self { next: 0, capacity }
    }

    /// Select a victim and advance the cursor.
    pub fn victim(&mut self) -> usize {
        let victim = self.next;
        self.next = (self.next + 1) % self.capacity;
        victim
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new(3);

        assert_eq!(replacer.victim(), 0);
        assert_eq!(replacer.victim(), 1);
        assert_eq!(replacer.victim(), 2);
    }

    #[test]
    fn test_fifo_wraps() {
        let mut replacer = FifoReplacer::new(2);

        assert_eq!(replacer.victim(), 0);
        assert_eq!(replacer.victim(), 1);
        assert_eq!(replacer.victim(), 0);
        assert_eq!(replacer.victim(), 1);
    }

    #[test]
    fn test_fifo_single_slot() {
        let mut replacer = FifoReplacer::new(1);

        for _ in 0..5 {
            assert_eq!(replacer.victim(), 0);
        }
    }

    #[test]
    #[should_panic(expected = "replacer capacity must be > 0")]
    fn test_fifo_zero_capacity() {
        FifoReplacer::new(0);
    }
}
