//! Page number type.

use std::fmt;

use crate::common::config::PAGE_SIZE;

/// Identifies a virtual page (the high byte of a logical address).
///
/// Using `u8` makes every value a valid page-table index: there are exactly
/// 256 pages, so no sentinel or range check is needed.
///
/// # Example
/// ```
/// use vmsim::PageNumber;
///
/// let page = PageNumber::new(5);
/// assert_eq!(page.index(), 5);
/// assert_eq!(page.backing_store_offset(), 5 * 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(pub u8);

impl PageNumber {
    /// Create a new PageNumber.
    #[inline]
    pub fn new(number: u8) -> Self {
        PageNumber(number)
    }

    /// Index into the page table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Byte offset of this page inside the backing store.
    #[inline]
    pub fn backing_store_offset(self) -> u64 {
        (self.0 as u64) * (PAGE_SIZE as u64)
    }

    /// Every page number, in ascending order.
    pub fn all() -> impl Iterator<Item = PageNumber> {
        (0..=u8::MAX).map(PageNumber)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_new() {
        let page = PageNumber::new(42);
        assert_eq!(page.0, 42);
        assert_eq!(page.index(), 42);
    }

    #[test]
    fn test_page_number_offset() {
        assert_eq!(PageNumber::new(0).backing_store_offset(), 0);
        assert_eq!(PageNumber::new(255).backing_store_offset(), 255 * 256);
    }

    #[test]
    fn test_page_number_all() {
        let all: Vec<PageNumber> = PageNumber::all().collect();
        assert_eq!(all.len(), 256);
        assert_eq!(all[0], PageNumber::new(0));
        assert_eq!(all[255], PageNumber::new(255));
    }

    #[test]
    fn test_page_number_display() {
        assert_eq!(format!("{}", PageNumber::new(42)), "Page(42)");
    }
}
