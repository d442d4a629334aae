//! Store Implementations

mod memory;

pub use memory::MemoryStore;
