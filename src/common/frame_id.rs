//! Frame identifier type.

use std::fmt;

use crate::common::config::PAGE_SIZE;

/// Identifies a frame in physical memory.
///
/// The same id is used by the page table, the TLB, the frame allocator and
/// physical memory, so a frame index can never be confused with a page
/// number or a byte offset.
///
/// # Example
/// ```
/// use vmsim::FrameId;
///
/// let frame_id = FrameId::new(5);
/// assert_eq!(frame_id.base_address(), 5 * 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// Physical address of the first byte of this frame.
    #[inline]
    pub fn base_address(self) -> usize {
        self.0 * PAGE_SIZE
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
