pub mod api;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod schema;
pub mod seed;
pub mod storage;

pub use api::CohortServer;
pub use error::{CohortError, Result};
pub use storage::MemStore;
