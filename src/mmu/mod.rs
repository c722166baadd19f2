//! Memory-management unit.
//!
//! The MMU resolves logical addresses through a TLB and a page table, and
//! pages in from the backing store on a miss.
//!
//! # Components
//! - [`Translator`] - The per-address lookup state machine
//! - [`TranslationState`] - Clock, TLB, page table, frames and memory
//! - [`Tlb`] - Small cache of page → frame mappings
//! - [`PageTable`] - Page residency
//! - [`FrameAllocator`] - Free frames first, then victims
//! - [`PhysicalMemory`] / [`Frame`] - Loaded page data
//! - [`TranslationStats`] - Hit, fault and eviction counters
//! - [`replacer`] - Eviction policy implementations

mod access;
mod frame;
mod frame_allocator;
mod page_table;
mod physical_memory;
pub mod replacer;
mod state;
mod stats;
mod tlb;
mod translator;

pub use access::{Access, Outcome};
pub use frame::Frame;
pub use frame_allocator::{Allocation, FrameAllocator};
pub use page_table::PageTable;
pub use physical_memory::PhysicalMemory;
pub use state::{PageFault, TranslationState};
pub use stats::TranslationStats;
pub use tlb::{Tlb, TlbEntry};
pub use translator::Translator;
