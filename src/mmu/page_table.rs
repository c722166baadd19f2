//! Page table - the single source of truth for page residency.

use crate::common::config::PAGE_TABLE_SIZE;
use crate::common::{FrameId, PageNumber};

/// Maps every page number to the frame holding it, or to nothing.
///
/// # Invariant
/// The mapping is injective: at most one page maps to a given frame. The
/// fault path relies on this to find the unique owner of a victim frame.
#[derive(Debug, Clone)]
pub struct PageTable {
    entries: Vec<Option<FrameId>>,
}

impl PageTable {
    /// Create a page table with every page unmapped.
    pub fn new() -> Self {
        Self {
            entries: vec![None; PAGE_TABLE_SIZE],
        }
    }

    /// Frame holding `page_number`, if resident.
    #[inline]
    pub fn resolve(&self, page_number: PageNumber) -> Option<FrameId> {
        self.entries[page_number.index()]
    }

    /// Map `page_number` to `frame_id`.
    ///
    /// The caller must have cleared any previous owner of `frame_id`.
    pub fn map(&mut self, page_number: PageNumber, frame_id: FrameId) {
        debug_assert!(
            self.owner_of(frame_id).is_none(),
            "{} is already mapped by {:?}",
            frame_id,
            self.owner_of(frame_id)
        );
        self.entries[page_number.index()] = Some(frame_id);
    }

    /// Clear the mapping for `page_number`, returning the frame it held.
    pub fn unmap(&mut self, page_number: PageNumber) -> Option<FrameId> {
        self.entries[page_number.index()].take()
    }

    /// Page currently mapped to `frame_id`, found by scanning.
    pub fn owner_of(&self, frame_id: FrameId) -> Option<PageNumber> {
        self.mappings()
            .find(|&(_, fid)| fid == frame_id)
            .map(|(page_number, _)| page_number)
    }

    /// Iterate over resident pages in page-number order.
    pub fn mappings(&self) -> impl Iterator<Item = (PageNumber, FrameId)> + '_ {
        PageNumber::all()
            .zip(self.entries.iter())
            .filter_map(|(page_number, entry)| entry.map(|fid| (page_number, fid)))
    }

    /// Number of resident pages.
    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}
