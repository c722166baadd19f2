//! Per-access observation records.

use std::fmt;

use crate::common::{LogicalAddress, PhysicalAddress};

/// Which level of the lookup resolved an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Found in the TLB.
    TlbHit,
    /// TLB miss, page resident.
    PageTableHit,
    /// Page loaded from the backing store.
    PageFault,
}

/// The result of translating one logical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub logical: LogicalAddress,
    pub physical: PhysicalAddress,
    /// Byte at `physical`, read as a signed value.
    pub value: i8,
    pub outcome: Outcome,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Logical: {}   Physical: {}    Value: {}",
            self.logical, self.physical, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_display() {
        let access = Access {
            logical: LogicalAddress::new(16916),
            physical: PhysicalAddress(20),
            value: -5,
            outcome: Outcome::PageFault,
        };

        assert_eq!(
            format!("{}", access),
            "Logical: 16916   Physical: 20    Value: -5"
        );
    }
}
