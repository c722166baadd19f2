//! Storage layer - the backing store and the page format.
//!
//! This module handles the read-only secondary storage:
//! - [`BackingStore`] - Page-granular random access
//! - [`Page`] - The 256-byte unit of transfer

mod backing_store;
mod page;

pub use backing_store::{BackingStore, FileBackingStore, MemoryBackingStore};
pub use page::Page;
