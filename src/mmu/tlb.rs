//! Translation-lookaside buffer.
//!
//! The [`Tlb`] is a small, flat, fully searched cache of page → frame
//! mappings. It mirrors a subset of the page table and is kept consistent
//! with it by [`Tlb::invalidate`], which the page-fault path calls whenever
//! a frame changes owner.

use tracing::trace;

use crate::common::{EvictionPolicy, FrameId, PageNumber};
use crate::mmu::replacer::Replacer;

/// One TLB slot.
///
/// The recency stamp used by LRU lives in the TLB's [`Replacer`], indexed by
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlbEntry {
    pub page_number: PageNumber,
    pub frame_id: FrameId,
    pub valid: bool,
}

impl TlbEntry {
    /// An empty slot.
    pub const EMPTY: TlbEntry = TlbEntry {
        page_number: PageNumber(0),
        frame_id: FrameId(0),
        valid: false,
    };
}

/// A fixed-capacity cache of page → frame mappings.
///
/// # Replacement
/// - **FIFO**: a circular cursor; every insert overwrites the slot under the
///   cursor, valid or not.
/// - **LRU**: the first invalid slot if there is one, otherwise the slot with
///   the oldest stamp (lowest index on ties).
///
/// # Example
/// ```
/// use vmsim::mmu::Tlb;
/// use vmsim::{EvictionPolicy, FrameId, PageNumber};
///
/// let mut tlb = Tlb::new(16, EvictionPolicy::Lru);
/// tlb.insert(PageNumber::new(3), FrameId::new(0), 1);
/// assert_eq!(tlb.lookup(PageNumber::new(3), 2), Some(FrameId::new(0)));
/// ```
#[derive(Debug, Clone)]
pub struct Tlb {
    entries: Vec<TlbEntry>,
    replacer: Replacer,
}

impl Tlb {
    /// Create an empty TLB.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        assert!(capacity > 0, "TLB capacity must be > 0");
        Self {
            entries: vec![TlbEntry::EMPTY; capacity],
            replacer: Replacer::new(policy, capacity),
        }
    }

    /// Look up the frame cached for `page_number`.
    ///
    /// A hit refreshes the entry's recency stamp to `clock`.
    pub fn lookup(&mut self, page_number: PageNumber, clock: u64) -> Option<FrameId> {
        let slot = self
            .entries
            .iter()
            .position(|e| e.valid && e.page_number == page_number)?;

        self.replacer.record_access(slot, clock);
        Some(self.entries[slot].frame_id)
    }

    /// Cache `page_number → frame_id`, evicting an entry if needed.
    ///
    /// Returns the slot that was written.
    pub fn insert(&mut self, page_number: PageNumber, frame_id: FrameId, clock: u64) -> usize {
        let slot = match self.replacer {
            Replacer::Fifo(ref mut fifo) => fifo.victim(),
            Replacer::Lru(ref lru) => self
                .entries
                .iter()
                .position(|e| !e.valid)
                .unwrap_or_else(|| lru.victim()),
        };

        let displaced = self.entries[slot];
        if displaced.valid {
            trace!(
                slot,
                evicted = %displaced.page_number,
                "TLB entry replaced"
            );
        }

        self.entries[slot] = TlbEntry {
            page_number,
            frame_id,
            valid: true,
        };
        self.replacer.record_access(slot, clock);
        slot
    }

    /// Invalidate every entry for `page_number`.
    ///
    /// Idempotent: invalidating a page that is not cached is a no-op.
    /// Returns the number of entries cleared.
    pub fn invalidate(&mut self, page_number: PageNumber) -> usize {
        let mut cleared = 0;
        for entry in self
            .entries
            .iter_mut()
            .filter(|e| e.valid && e.page_number == page_number)
        {
            entry.valid = false;
            cleared += 1;
        }
        cleared
    }

    /// All slots, valid or not.
    #[inline]
    pub fn entries(&self) -> &[TlbEntry] {
        &self.entries
    }

    /// Iterate over valid entries only.
    pub fn valid_entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.entries.iter().filter(|e| e.valid)
    }

    /// Number of valid entries.
    pub fn len(&self) -> usize {
        self.valid_entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn policy(&self) -> EvictionPolicy {
        self.replacer.policy()
    }

    /// Recency stamp of `slot` (LRU only).
    pub fn stamp(&self, slot: usize) -> Option<u64> {
        self.replacer.stamp(slot)
    }
}
