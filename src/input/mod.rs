//! Input layer - the stream of logical addresses to translate.

mod address_reader;

pub use address_reader::AddressReader;
