//! Configuration constants and simulator settings.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};

/// Size of a page (and of a frame) in bytes.
///
/// A logical address is 16 bits: the high byte selects the page and the
/// low byte is the offset within it, so a page is exactly 256 bytes.
pub const PAGE_SIZE: usize = 256;

/// Number of entries in the page table (one per possible page number).
pub const PAGE_TABLE_SIZE: usize = 256;

/// Minimum size of a complete backing store image in bytes.
pub const BACKING_STORE_SIZE: usize = PAGE_TABLE_SIZE * PAGE_SIZE;

/// Default number of physical frames.
pub const DEFAULT_FRAME_COUNT: usize = 128;

/// Default number of TLB entries.
pub const DEFAULT_TLB_ENTRIES: usize = 16;

/// Replacement policy used when a TLB or the frame pool is full.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvictionPolicy {
    /// Evict in insertion order using a round-robin cursor.
    Fifo,
    /// Evict the slot with the oldest recency stamp.
    #[default]
    Lru,
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionPolicy::Fifo => write!(f, "fifo"),
            EvictionPolicy::Lru => write!(f, "lru"),
        }
    }
}

impl FromStr for EvictionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(EvictionPolicy::Fifo),
            "lru" => Ok(EvictionPolicy::Lru),
            other => Err(Error::InvalidConfig(format!(
                "unknown eviction policy {:?} (expected fifo or lru)",
                other
            ))),
        }
    }
}

/// Settings fixed for the lifetime of one simulation.
///
/// The page size is not configurable; see [`PAGE_SIZE`].
///
/// # Example
/// ```
/// use vmsim::common::{EvictionPolicy, SimConfig};
///
/// let config = SimConfig::new()
///     .with_frame_count(64)
///     .with_tlb_policy(EvictionPolicy::Fifo);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of TLB entries.
    pub tlb_entries: usize,
    /// Number of frames in physical memory.
    pub frame_count: usize,
    /// Replacement policy for TLB entries.
    pub tlb_policy: EvictionPolicy,
    /// Replacement policy for physical frames.
    pub frame_policy: EvictionPolicy,
}

impl SimConfig {
    /// Create a configuration with the default sizes and LRU everywhere.
    pub fn new() -> Self {
        Self {
            tlb_entries: DEFAULT_TLB_ENTRIES,
            frame_count: DEFAULT_FRAME_COUNT,
            tlb_policy: EvictionPolicy::Lru,
            frame_policy: EvictionPolicy::Lru,
        }
    }

    pub fn with_tlb_entries(mut self, tlb_entries: usize) -> Self {
        self.tlb_entries = tlb_entries;
        self
    }

    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }

    pub fn with_tlb_policy(mut self, policy: EvictionPolicy) -> Self {
        self.tlb_policy = policy;
        self
    }

    pub fn with_frame_policy(mut self, policy: EvictionPolicy) -> Self {
        self.frame_policy = policy;
        self
    }

    /// Check that the sizes describe a usable machine.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if either capacity is zero or there are
    /// more frames than pages.
    pub fn validate(&self) -> Result<()> {
        if self.tlb_entries == 0 {
            return Err(Error::InvalidConfig("TLB must have at least one entry".into()));
        }
        if self.frame_count == 0 {
            return Err(Error::InvalidConfig("physical memory must have at least one frame".into()));
        }
        if self.frame_count > PAGE_TABLE_SIZE {
            return Err(Error::InvalidConfig(format!(
                "{} frames requested but only {} pages exist",
                self.frame_count, PAGE_TABLE_SIZE
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
