//! Common types and utilities shared across vmsim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`SimConfig`]
//! - Error types
//! - Identifiers and addresses (PageNumber, FrameId, LogicalAddress, PhysicalAddress)

mod address;
pub mod config;
pub mod error;
mod frame_id;
mod page_number;

pub use address::{LogicalAddress, PhysicalAddress};
pub use config::{EvictionPolicy, SimConfig};
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_number::PageNumber;
