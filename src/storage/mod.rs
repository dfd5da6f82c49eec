mod collection;
mod mem_store;

pub use collection::Collection;
pub use mem_store::{MemStore, StoreStats};
