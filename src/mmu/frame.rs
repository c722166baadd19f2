//! Frame - a page-sized slot in physical memory.
//!
//! A [`Frame`] holds a [`Page`] plus the page number it was loaded for, so
//! an eviction can find the page to unmap without trusting anything else.

use crate::common::PageNumber;
use crate::storage::Page;

/// A frame in physical memory.
///
/// Frames start empty (`Frame::default()`) and only ever change through
/// [`Frame::load`].
#[derive(Debug, Default)]
pub struct Frame {
    /// The page data.
    page: Page,

    /// Which page is currently loaded, or None if frame is empty.
    page_number: Option<PageNumber>,
}

impl Frame {
    /// Replace the frame's contents with `page`, owned by `page_number`.
    pub fn load(&mut self, page_number: PageNumber, page: Page) {
        self.page = page;
        self.page_number = Some(page_number);
    }

    /// Page data.
    #[inline]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Page number of the loaded page.
    #[inline]
    pub fn page_number(&self) -> Option<PageNumber> {
        self.page_number
    }

    /// Byte at `offset` within the frame.
    #[inline]
    pub fn byte(&self, offset: u8) -> u8 {
        self.page.byte(offset)
    }

    /// Check if the frame is empty (no page loaded).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_number.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_default_is_empty() {
        let frame = Frame::default();
        assert!(frame.is_empty());
        assert_eq!(frame.page_number(), None);
        assert_eq!(frame.byte(0), 0);
    }

    #[test]
    fn test_frame_load() {
        let mut frame = Frame::default();
        let mut page = Page::new();
        page.as_mut_slice()[10] = 0xAB;

        frame.load(PageNumber::new(42), page);

        assert!(!frame.is_empty());
        assert_eq!(frame.page_number(), Some(PageNumber::new(42)));
        assert_eq!(frame.byte(10), 0xAB);
        assert_eq!(frame.page().as_slice()[10], 0xAB);
    }

    #[test]
    fn test_frame_reload_replaces_contents() {
        let mut frame = Frame::default();
        let mut first = Page::new();
        first.as_mut_slice()[0] = 1;
        frame.load(PageNumber::new(1), first);

        frame.load(PageNumber::new(2), Page::new());

        assert_eq!(frame.page_number(), Some(PageNumber::new(2)));
        assert_eq!(frame.byte(0), 0);
    }
}
