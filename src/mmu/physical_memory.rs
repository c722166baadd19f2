//! Physical memory - a fixed array of frames.

use crate::common::config::PAGE_SIZE;
use crate::common::{FrameId, PageNumber, PhysicalAddress};
use crate::mmu::Frame;
use crate::storage::Page;

/// Physical memory sized exactly `frame_count × PAGE_SIZE` bytes.
///
/// # Layout
/// ```text
/// ┌─────────┬─────────┬─────────┬─────────┐
/// │ Frame 0 │ Frame 1 │  ...    │ Frame N │
/// │ (256B)  │ (256B)  │         │ (256B)  │
/// └─────────┴─────────┴─────────┴─────────┘
/// Address: 0       256      ...    N×256
/// ```
///
/// Access past the last frame is a logic error and panics.
#[derive(Debug)]
pub struct PhysicalMemory {
    frames: Vec<Frame>,
}

impl PhysicalMemory {
    /// Allocate `frame_count` empty frames.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        assert!(frame_count > 0, "frame_count must be > 0");
        Self {
            frames: (0..frame_count).map(|_| Frame::default()).collect(),
        }
    }

    /// Copy `page` into `frame_id`, recording `page_number` as its owner.
    pub fn load(&mut self, frame_id: FrameId, page_number: PageNumber, page: Page) {
        self.frame_mut(frame_id).load(page_number, page);
    }

    /// Read the signed byte at `address`.
    ///
    /// # Panics
    /// Panics if `address` is outside physical memory.
    pub fn read(&self, address: PhysicalAddress) -> i8 {
        self.frame(address.frame_id()).byte(address.offset()) as i8
    }

    /// Page number loaded in `frame_id`.
    #[inline]
    pub fn owner(&self, frame_id: FrameId) -> Option<PageNumber> {
        self.frame(frame_id).page_number()
    }

    /// Get a frame.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    pub fn frame(&self, frame_id: FrameId) -> &Frame {
        assert!(
            frame_id.0 < self.frames.len(),
            "{} outside physical memory of {} frames",
            frame_id,
            self.frames.len()
        );
        &self.frames[frame_id.0]
    }

    fn frame_mut(&mut self, frame_id: FrameId) -> &mut Frame {
        assert!(
            frame_id.0 < self.frames.len(),
            "{} outside physical memory of {} frames",
            frame_id,
            self.frames.len()
        );
        &mut self.frames[frame_id.0]
    }

    /// Iterate over `(FrameId, &Frame)` pairs.
    pub fn frames(&self) -> impl Iterator<Item = (FrameId, &Frame)> {
        self.frames
            .iter()
            .enumerate()
            .map(|(i, frame)| (FrameId::new(i), frame))
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Total size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.frames.len() * PAGE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_filled(value: u8) -> Page {
        let mut page = Page::new();
        page.as_mut_slice().fill(value);
        page
    }

    #[test]
    fn test_size_is_exact() {
        let memory = PhysicalMemory::new(128);
        assert_eq!(memory.frame_count(), 128);
        assert_eq!(memory.size(), 128 * 256);
    }

    #[test]
    fn test_load_and_read() {
        let mut memory = PhysicalMemory::new(4);
        let mut page = Page::new();
        page.as_mut_slice()[7] = 0x80;
        memory.load(FrameId::new(2), PageNumber::new(9), page);

        assert_eq!(memory.read(PhysicalAddress::new(FrameId::new(2), 7)), -128);
        assert_eq!(memory.read(PhysicalAddress::new(FrameId::new(2), 8)), 0);
        assert_eq!(memory.owner(FrameId::new(2)), Some(PageNumber::new(9)));
        assert_eq!(memory.owner(FrameId::new(1)), None);
    }

    #[test]
    fn test_frames_are_independent() {
        let mut memory = PhysicalMemory::new(2);
        memory.load(FrameId::new(0), PageNumber::new(1), page_filled(1));
        memory.load(FrameId::new(1), PageNumber::new(2), page_filled(2));

        assert_eq!(memory.read(PhysicalAddress(255)), 1);
        assert_eq!(memory.read(PhysicalAddress(256)), 2);

        let owners: Vec<_> = memory.frames().map(|(_, f)| f.page_number()).collect();
        assert_eq!(owners, vec![Some(PageNumber::new(1)), Some(PageNumber::new(2))]);
    }

    #[test]
    #[should_panic(expected = "outside physical memory")]
    fn test_read_out_of_range_panics() {
        let memory = PhysicalMemory::new(2);
        memory.read(PhysicalAddress(2 * 256));
    }
}
