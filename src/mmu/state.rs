//! Translation state - everything the MMU mutates, in one owner.

use tracing::debug;

use crate::common::{FrameId, PageNumber, Result, SimConfig};
use crate::mmu::{Allocation, FrameAllocator, PageTable, PhysicalMemory, Tlb};
use crate::storage::BackingStore;

/// What a page fault did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFault {
    /// Frame the page was loaded into.
    pub frame_id: FrameId,
    /// Page that previously occupied the frame, if memory was full.
    pub evicted: Option<PageNumber>,
    /// TLB entries cleared for the evicted page.
    pub tlb_invalidations: usize,
}

/// The clock, TLB, page table, frame allocator and physical memory.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────────┐
/// │                   TranslationState                     │
/// │  ┌──────────┐   ┌──────────────┐   ┌────────────────┐  │
/// │  │   tlb    │──▶│  page_table  │──▶│     memory     │  │
/// │  │ (subset) │   │ Page → Frame │   │ Vec<Frame>     │  │
/// │  └──────────┘   └──────────────┘   └────────────────┘  │
/// │  ┌──────────┐   ┌──────────────┐                       │
/// │  │  clock   │   │    frames    │  (free list + victim) │
/// │  └──────────┘   └──────────────┘                       │
/// └────────────────────────────────────────────────────────┘
/// ```
///
/// # Invariants
/// - The page table is injective.
/// - Every valid TLB entry `(P, F)` has `page_table[P] == F`.
/// - Every mapped frame's owner tag names the page mapping it.
///
/// Eviction clears the page-table entry and the TLB entries of the victim's
/// page in the same call, so the invariants hold between any two public
/// operations.
#[derive(Debug)]
pub struct TranslationState {
    pub(crate) clock: u64,
    pub(crate) tlb: Tlb,
    pub(crate) page_table: PageTable,
    pub(crate) frames: FrameAllocator,
    pub(crate) memory: PhysicalMemory,
}

impl TranslationState {
    /// Create an empty state: nothing resident, TLB invalid, clock at 0.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `config` does not validate.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            clock: 0,
            tlb: Tlb::new(config.tlb_entries, config.tlb_policy),
            page_table: PageTable::new(),
            frames: FrameAllocator::new(config.frame_count, config.frame_policy),
            memory: PhysicalMemory::new(config.frame_count),
        })
    }

    /// Advance the clock by one tick and return the new value.
    #[inline]
    pub(crate) fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Load `page_number` from `backing_store` into a frame.
    ///
    /// Must only be called for a page that is not resident. Uses a free frame
    /// if one remains; otherwise evicts a victim chosen by the frame policy,
    /// unmapping its page and invalidating that page in the TLB.
    ///
    /// The page is read before any mapping changes, so a failed read leaves
    /// the state untouched.
    ///
    /// # Errors
    /// - `Error::TruncatedBackingStore` on a short read
    /// - `Error::Io` on a failed read
    ///
    /// # Panics
    /// Panics if a victim frame has no owning page, or the page table
    /// disagrees with the frame about its owner.
    pub fn fault_in<B: BackingStore + ?Sized>(
        &mut self,
        page_number: PageNumber,
        backing_store: &mut B,
    ) -> Result<PageFault> {
        debug_assert!(
            self.page_table.resolve(page_number).is_none(),
            "{} is already resident",
            page_number
        );

        let page = backing_store.read_page(page_number)?;

        let allocation = self.frames.allocate();
        let frame_id = allocation.frame_id();
        let mut evicted = None;
        let mut tlb_invalidations = 0;

        if let Allocation::Victim(victim) = allocation {
            let owner = self
                .memory
                .owner(victim)
                .unwrap_or_else(|| panic!("victim {} has no owning page", victim));
            let unmapped = self.page_table.unmap(owner);
            assert_eq!(
                unmapped,
                Some(victim),
                "page table maps {} to {:?}, but {} claims it",
                owner,
                unmapped,
                victim
            );
            tlb_invalidations = self.tlb.invalidate(owner);

            debug!(
                frame = victim.0,
                evicted = owner.0,
                tlb_invalidations,
                "evicted page"
            );
            evicted = Some(owner);
        } else {
            debug_assert!(self.memory.frame(frame_id).is_empty());
        }

        self.memory.load(frame_id, page_number, page);
        self.page_table.map(page_number, frame_id);
        self.frames.touch(frame_id, self.clock);

        debug!(page = page_number.0, frame = frame_id.0, "page fault served");

        Ok(PageFault {
            frame_id,
            evicted,
            tlb_invalidations,
        })
    }

    /// Panic if any cross-structure invariant is broken.
    pub fn assert_invariants(&self) {
        let mut owners: Vec<Option<PageNumber>> = vec![None; self.memory.frame_count()];

        for (page_number, frame_id) in self.page_table.mappings() {
            assert!(
                frame_id.0 < owners.len(),
                "{} maps to {} outside physical memory",
                page_number,
                frame_id
            );
            if let Some(other) = owners[frame_id.0].replace(page_number) {
                panic!("{} mapped by both {} and {}", frame_id, other, page_number);
            }
            assert_eq!(
                self.memory.owner(frame_id),
                Some(page_number),
                "{} owner tag disagrees with page table",
                frame_id
            );
        }

        let in_use = self.frames.frame_count() - self.frames.free_frame_count();
        assert_eq!(
            self.page_table.mapped_count(),
            in_use,
            "resident pages do not match frames in use"
        );

        for entry in self.tlb.valid_entries() {
            assert_eq!(
                self.page_table.resolve(entry.page_number),
                Some(entry.frame_id),
                "stale TLB entry {:?}",
                entry
            );
        }
    }

    /// Current clock value (number of addresses processed).
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    #[inline]
    pub fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    #[inline]
    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    #[inline]
    pub fn frames(&self) -> &FrameAllocator {
        &self.frames
    }

    #[inline]
    pub fn memory(&self) -> &PhysicalMemory {
        &self.memory
    }
}
