//! Storage seams used by the core logic.
//!
//! Logic receives a store by reference from the command layer and never
//! reaches for a global. `DbPool` (SQLite) and `MemoryStore` implement all
//! three traits.

use crate::errors::AppResult;
use crate::models::{User, WorkRecord};

pub trait RecordRepository {
    /// Append a record (and its photos).
    fn add_record(&mut self, record: &WorkRecord) -> AppResult<()>;

    /// Remove a record by id. Returns `false` if nothing matched.
    fn delete_record(&mut self, id: &str) -> AppResult<bool>;

    fn get_record(&self, id: &str) -> AppResult<Option<WorkRecord>>;

    /// One user's records, most recent `date` first. Records sharing a date
    /// keep insertion order.
    fn records_by_user(&self, user_id: &str) -> AppResult<Vec<WorkRecord>>;

    /// Every record, in insertion order.
    fn all_records(&self) -> AppResult<Vec<WorkRecord>>;
}

pub trait UserRepository {
    fn users(&self) -> AppResult<Vec<User>>;

    /// Case-insensitive lookup.
    fn user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    fn user_by_id(&self, id: &str) -> AppResult<Option<User>>;

    fn insert_user(&mut self, user: &User) -> AppResult<()>;
}

/// The "who is logged in" slot.
pub trait SessionRepository {
    fn current_user_id(&self) -> AppResult<Option<String>>;

    fn set_current_user(&mut self, user_id: &str) -> AppResult<()>;

    fn clear_session(&mut self) -> AppResult<()>;
}
