pub mod initialize;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod repository;
pub mod stats;
pub mod store;

pub use memory::MemoryStore;
pub use pool::DbPool;
pub use repository::{RecordRepository, SessionRepository, UserRepository};
