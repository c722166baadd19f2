//! Page - the fixed-size unit of transfer between backing store and memory.

use crate::common::config::PAGE_SIZE;

/// One page of data (256 bytes).
///
/// This is the unit read from the backing store on a page fault and held by
/// a [`Frame`](crate::mmu::Frame) in physical memory.
///
/// # Clone Implementation
/// `Page` does NOT implement `Clone` outside tests; loading a frame moves the
/// page in, so every copy is explicit.
///
/// # Example
/// ```
/// use vmsim::storage::Page;
///
/// let mut page = Page::new();
/// page.as_mut_slice()[0] = 0xFF;
/// assert_eq!(page.byte(0), 0xFF);
/// ```
pub struct Page {
    data: [u8; PAGE_SIZE],
}

impl Page {
    /// Create a new zeroed page.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0u8; PAGE_SIZE],
        }
    }

    /// Get immutable slice of page data.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable slice of page data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte at `offset`. Every `u8` offset is inside the page.
    #[inline]
    pub fn byte(&self, offset: u8) -> u8 {
        self.data[offset as usize]
    }

}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("len", &PAGE_SIZE)
            .field("head", &&self.data[..8])
            .finish()
    }
}

// Clone only available in tests - forces explicit copying in production
#[cfg(test)]
impl Clone for Page {
    fn clone(&self) -> Self {
        let mut new_page = Page::new();
        new_page.data.copy_from_slice(&self.data);
        new_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size() {
        assert_eq!(std::mem::size_of::<Page>(), PAGE_SIZE);
        assert_eq!(Page::new().as_slice().len(), 256);
    }

    #[test]
    fn test_page_new() {
        let page = Page::new();
        assert_eq!(page.byte(0), 0);
        assert_eq!(page.byte(255), 0);
    }

    #[test]
    fn test_page_read_write() {
        let mut page = Page::new();

        page.as_mut_slice()[0] = 0xFF;
        page.as_mut_slice()[100] = 0xAB;
        page.as_mut_slice()[255] = 0xCD;

        assert_eq!(page.byte(0), 0xFF);
        assert_eq!(page.byte(100), 0xAB);
        assert_eq!(page.byte(255), 0xCD);
    }

    #[test]
    fn test_page_clone_in_tests() {
        let mut page = Page::new();
        page.as_mut_slice()[0] = 0xAB;

        let cloned = page.clone();
        assert_eq!(cloned.byte(0), 0xAB);
        assert_eq!(page.byte(0), 0xAB);
    }
}
