//! Infrastructure Layer
//!
//! Concrete store implementations behind the domain's `ResourceStore`
//! contract. The only backend here is process-local memory.

pub mod stores;

pub use stores::MemoryStore;
