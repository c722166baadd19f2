//! Logical and physical addresses.

use std::fmt;

use crate::common::config::PAGE_SIZE;
use crate::common::{FrameId, PageNumber};

/// A 16-bit address as seen by the running program.
///
/// # Layout
/// ```text
///  15            8 7             0
/// ┌───────────────┬───────────────┐
/// │  page number  │    offset     │
/// └───────────────┴───────────────┘
/// ```
///
/// # Example
/// ```
/// use vmsim::{LogicalAddress, PageNumber};
///
/// let addr = LogicalAddress::new(16916);
/// assert_eq!(addr.page_number(), PageNumber::new(66));
/// assert_eq!(addr.offset(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalAddress(pub u16);

impl LogicalAddress {
    #[inline]
    pub fn new(value: u16) -> Self {
        LogicalAddress(value)
    }

    /// Build an address from its page number and offset.
    #[inline]
    pub fn from_parts(page: PageNumber, offset: u8) -> Self {
        LogicalAddress(((page.0 as u16) << 8) | offset as u16)
    }

    #[inline]
    pub fn page_number(self) -> PageNumber {
        PageNumber(((self.0 >> 8) & 0xFF) as u8)
    }

    #[inline]
    pub fn offset(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A byte address inside physical memory: `frame * PAGE_SIZE + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhysicalAddress(pub usize);

impl PhysicalAddress {
    #[inline]
    pub fn new(frame_id: FrameId, offset: u8) -> Self {
        PhysicalAddress(frame_id.base_address() + offset as usize)
    }

    /// Frame containing this address.
    #[inline]
    pub fn frame_id(self) -> FrameId {
        FrameId(self.0 / PAGE_SIZE)
    }

    #[inline]
    pub fn offset(self) -> u8 {
        (self.0 % PAGE_SIZE) as u8
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        let addr = LogicalAddress::new(5 * 256 + 17);
        assert_eq!(addr.page_number(), PageNumber::new(5));
        assert_eq!(addr.offset(), 17);
    }

    #[test]
    fn test_decompose_extremes() {
        let low = LogicalAddress::new(0);
        assert_eq!(low.page_number(), PageNumber::new(0));
        assert_eq!(low.offset(), 0);

        let high = LogicalAddress::new(u16::MAX);
        assert_eq!(high.page_number(), PageNumber::new(255));
        assert_eq!(high.offset(), 255);
    }

    #[test]
    fn test_from_parts() {
        let addr = LogicalAddress::from_parts(PageNumber::new(66), 20);
        assert_eq!(addr.value(), 16916);
    }

    #[test]
    fn test_physical_address() {
        let pa = PhysicalAddress::new(FrameId::new(3), 200);
        assert_eq!(pa.0, 3 * 256 + 200);
        assert_eq!(pa.frame_id(), FrameId::new(3));
        assert_eq!(pa.offset(), 200);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LogicalAddress::new(1280)), "1280");
        assert_eq!(format!("{}", PhysicalAddress(42)), "42");
    }
}
