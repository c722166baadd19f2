//! Translator - the per-address lookup state machine.
//!
//! The [`Translator`] provides:
//! - TLB → page table → page fault resolution of logical addresses
//! - Demand paging from a [`BackingStore`]
//! - Access records and running statistics

use tracing::trace;

use crate::common::{LogicalAddress, PhysicalAddress, Result, SimConfig};
use crate::mmu::{Access, Outcome, TranslationState, TranslationStats};
use crate::storage::BackingStore;

/// Resolves logical addresses to physical bytes.
///
/// # Lookup
/// ```text
///  tlb.lookup ──hit──────────────────────────────────┐
///      │ miss                                        │
///  page_table.resolve ──hit──┐                       │
///      │ miss                │                       │
///  fault_in (evict?) ────────┴──▶ tlb.insert ──▶ read byte
/// ```
///
/// A TLB hit never inserts into the TLB and never changes the page table.
///
/// # Usage
/// ```
/// use vmsim::mmu::{Outcome, Translator};
/// use vmsim::storage::MemoryBackingStore;
/// use vmsim::{LogicalAddress, SimConfig};
///
/// let mut store = MemoryBackingStore::zeroed();
/// store.set_byte(5 * 256, 42);
///
/// let mut translator = Translator::new(SimConfig::default(), store).unwrap();
/// let access = translator.translate(LogicalAddress::new(5 * 256)).unwrap();
/// assert_eq!(access.value, 42);
/// assert_eq!(access.outcome, Outcome::PageFault);
/// ```
#[derive(Debug)]
pub struct Translator<B> {
    config: SimConfig,
    state: TranslationState,
    backing_store: B,
    stats: TranslationStats,
}

impl<B: BackingStore> Translator<B> {
    /// Create a translator with empty TLB, page table and memory.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `config` does not validate.
    pub fn new(config: SimConfig, backing_store: B) -> Result<Self> {
        let state = TranslationState::new(&config)?;

        Ok(Self {
            config,
            state,
            backing_store,
            stats: TranslationStats::new(),
        })
    }

    /// Translate one logical address and read the byte it refers to.
    ///
    /// # Errors
    /// Propagates backing-store failures from a page fault. These are fatal:
    /// the translator should not be used afterwards.
    pub fn translate(&mut self, logical: LogicalAddress) -> Result<Access> {
        let clock = self.state.tick();
        let page_number = logical.page_number();
        let offset = logical.offset();

        let (frame_id, outcome) = match self.state.tlb.lookup(page_number, clock) {
            Some(frame_id) => {
                trace!(page = page_number.0, frame = frame_id.0, "TLB hit");
                (frame_id, Outcome::TlbHit)
            }
            None => {
                let (frame_id, outcome) = match self.state.page_table.resolve(page_number) {
                    Some(frame_id) => (frame_id, Outcome::PageTableHit),
                    None => {
                        let fault = self
                            .state
                            .fault_in(page_number, &mut self.backing_store)?;
                        if fault.evicted.is_some() {
                            self.stats.frame_evictions += 1;
                        }
                        self.stats.tlb_invalidations += fault.tlb_invalidations as u64;
                        (fault.frame_id, Outcome::PageFault)
                    }
                };
                self.state.tlb.insert(page_number, frame_id, clock);
                (frame_id, outcome)
            }
        };

        self.state.frames.touch(frame_id, clock);

        let physical = PhysicalAddress::new(frame_id, offset);
        let value = self.state.memory.read(physical);
        self.stats.record(outcome);

        #[cfg(debug_assertions)]
        self.state.assert_invariants();

        Ok(Access {
            logical,
            physical,
            value,
            outcome,
        })
    }

    /// Translate every address in `addresses`, passing each access to
    /// `observer`, and return the final statistics.
    ///
    /// # Errors
    /// Stops at the first backing-store failure.
    pub fn run<I, F>(&mut self, addresses: I, mut observer: F) -> Result<TranslationStats>
    where
        I: IntoIterator<Item = LogicalAddress>,
        F: FnMut(&Access),
    {
        for logical in addresses {
            let access = self.translate(logical)?;
            observer(&access);
        }
        Ok(self.stats)
    }

    /// Get translation statistics.
    #[inline]
    pub fn stats(&self) -> &TranslationStats {
        &self.stats
    }

    /// Get the TLB, page table and memory state.
    #[inline]
    pub fn state(&self) -> &TranslationState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
