//! In-memory storage for parcels and vehicles

pub mod keyed;
pub mod memory;

pub use keyed::{Keyed, KeyedStore};
pub use memory::MemoryStorage;
