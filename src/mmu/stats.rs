//! Translation statistics tracking.

use std::fmt;

use crate::mmu::Outcome;

/// Counters kept by the [`Translator`](crate::mmu::Translator).
///
/// Plain integers: the simulator is single-threaded and the translator owns
/// its stats exclusively.
///
/// # Example
/// ```
/// use vmsim::mmu::{Outcome, TranslationStats};
///
/// let mut stats = TranslationStats::new();
/// stats.record(Outcome::PageFault);
/// stats.record(Outcome::TlbHit);
/// assert_eq!(stats.page_fault_rate(), 50.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TranslationStats {
    /// Number of addresses translated.
    pub total_accesses: u64,

    /// Translations satisfied by the TLB.
    pub tlb_hits: u64,

    /// TLB misses satisfied by the page table.
    pub page_table_hits: u64,

    /// Translations that had to load a page from the backing store.
    pub page_faults: u64,

    /// Page faults that displaced a resident page.
    pub frame_evictions: u64,

    /// TLB entries invalidated because their frame was evicted.
    pub tlb_invalidations: u64,
}

impl TranslationStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one translation with the given outcome.
    pub fn record(&mut self, outcome: Outcome) {
        self.total_accesses += 1;
        match outcome {
            Outcome::TlbHit => self.tlb_hits += 1,
            Outcome::PageTableHit => self.page_table_hits += 1,
            Outcome::PageFault => self.page_faults += 1,
        }
    }

    /// Page faults as a percentage of all accesses (0.0 to 100.0).
    pub fn page_fault_rate(&self) -> f64 {
        percentage(self.page_faults, self.total_accesses)
    }

    /// TLB hits as a percentage of all accesses (0.0 to 100.0).
    pub fn tlb_hit_rate(&self) -> f64 {
        percentage(self.tlb_hits, self.total_accesses)
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for TranslationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total Accesses: {}    Page Faults: {}    TLB Hits: {}",
            self.total_accesses, self.page_faults, self.tlb_hits
        )?;
        write!(
            f,
            "Page Fault Rate: {:.1}%    TLB Hit Rate: {:.1}%",
            self.page_fault_rate(),
            self.tlb_hit_rate()
        )
    }
}
