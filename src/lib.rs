//! vmsim - a paged virtual-memory simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                             vmsim                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Input Layer (input/)                        │   │
//! │  │           AddressReader: one address per line            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       MMU (mmu/)  [Policies chosen at construction]      │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   TLB policy: FIFO | LRU   Frame policy: FIFO | LRU │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │   Translator + TLB + PageTable + FrameAllocator + Stats  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Storage Layer (storage/)                       │   │
//! │  │         BackingStore (file | memory) + Page              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageNumber, FrameId, addresses, Error, config)
//! - [`mmu`] - Address translation, TLB, page table and eviction policies
//! - [`storage`] - Backing store and page format
//! - [`input`] - Logical address sources
//!
//! # Quick Start
//! ```no_run
//! use vmsim::input::AddressReader;
//! use vmsim::mmu::Translator;
//! use vmsim::storage::FileBackingStore;
//! use vmsim::SimConfig;
//!
//! let store = FileBackingStore::open("BACKING_STORE.bin").unwrap();
//! let mut translator = Translator::new(SimConfig::default(), store).unwrap();
//!
//! for address in AddressReader::open("addresses.txt").unwrap().skip_malformed() {
//!     let access = translator.translate(address.unwrap()).unwrap();
//!     println!("{}", access);
//! }
//! println!("{}", translator.stats());
//! ```

pub mod common;
pub mod input;
pub mod mmu;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::PAGE_SIZE;
pub use common::{
    Error, EvictionPolicy, FrameId, LogicalAddress, PageNumber, PhysicalAddress, Result,
    SimConfig,
};

pub use mmu::{Access, Outcome, TranslationStats, Translator};
pub use storage::{BackingStore, FileBackingStore, MemoryBackingStore, Page};
