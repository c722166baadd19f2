//! Frame allocator - hands out free frames, then victims.

use crate::common::{EvictionPolicy, FrameId};
use crate::mmu::replacer::Replacer;

/// Where an allocated frame came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// A frame that has never held a page.
    Free(FrameId),
    /// An occupied frame chosen by the eviction policy; its current page
    /// must be unmapped before reuse.
    Victim(FrameId),
}

impl Allocation {
    #[inline]
    pub fn frame_id(self) -> FrameId {
        match self {
            Allocation::Free(fid) | Allocation::Victim(fid) => fid,
        }
    }

    #[inline]
    pub fn is_eviction(self) -> bool {
        matches!(self, Allocation::Victim(_))
    }
}

/// Tracks frame usage and selects victims once memory is full.
///
/// Free frames are handed out in increasing index order starting at 0.
/// None is handed out twice until every frame is in use; after that every
/// allocation is an eviction.
#[derive(Debug, Clone)]
pub struct FrameAllocator {
    /// Lowest frame index that has never been allocated.
    next_free: usize,

    frame_count: usize,

    replacer: Replacer,
}

impl FrameAllocator {
    /// Create an allocator over `frame_count` frames.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize, policy: EvictionPolicy) -> Self {
        assert!(frame_count > 0, "frame_count must be > 0");
        Self {
            next_free: 0,
            frame_count,
            replacer: Replacer::new(policy, frame_count),
        }
    }

    /// Get a frame for a new page, evicting if necessary.
    pub fn allocate(&mut self) -> Allocation {
        if self.next_free < self.frame_count {
            let frame_id = FrameId::new(self.next_free);
            self.next_free += 1;
            return Allocation::Free(frame_id);
        }

        Allocation::Victim(FrameId::new(self.replacer.victim()))
    }

    /// Record an access to `frame_id` at `clock`.
    #[inline]
    pub fn touch(&mut self, frame_id: FrameId, clock: u64) {
        self.replacer.record_access(frame_id.0, clock);
    }

    /// Number of frames never allocated.
    #[inline]
    pub fn free_frame_count(&self) -> usize {
        self.frame_count - self.next_free
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[inline]
    pub fn policy(&self) -> EvictionPolicy {
        self.replacer.policy()
    }

    /// Recency stamp of `frame_id` (LRU only).
    pub fn stamp(&self, frame_id: FrameId) -> Option<u64> {
        self.replacer.stamp(frame_id.0)
    }
}
