//! Vec-backed store, used by tests and by callers that do not want a file.

use crate::db::repository::{RecordRepository, SessionRepository, UserRepository};
use crate::errors::{AppError, AppResult};
use crate::models::{User, WorkRecord};

#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: Vec<WorkRecord>,
    users: Vec<User>,
    session: Option<String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            users: vec![User::seeded_admin()],
            session: None,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordRepository for MemoryStore {
    fn add_record(&mut self, record: &WorkRecord) -> AppResult<()> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(AppError::Other(format!("Duplicate record id: {}", record.id)));
        }
        self.records.push(record.clone());
        Ok(())
    }

    fn delete_record(&mut self, id: &str) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        Ok(self.records.len() != before)
    }

    fn get_record(&self, id: &str) -> AppResult<Option<WorkRecord>> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }

    fn records_by_user(&self, user_id: &str) -> AppResult<Vec<WorkRecord>> {
        let mut out: Vec<WorkRecord> = self
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        // sort_by is stable: same-date records keep insertion order
        out.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(out)
    }

    fn all_records(&self) -> AppResult<Vec<WorkRecord>> {
        Ok(self.records.clone())
    }
}

impl UserRepository for MemoryStore {
    fn users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.clone())
    }

    fn user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let wanted = username.to_lowercase();
        Ok(self
            .users
            .iter()
            .find(|u| u.username.to_lowercase() == wanted)
            .cloned())
    }

    fn user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    fn insert_user(&mut self, user: &User) -> AppResult<()> {
        if self.user_by_username(&user.username)?.is_some() {
            return Err(AppError::UsernameTaken(user.username.clone()));
        }
        self.users.push(user.clone());
        Ok(())
    }
}

impl SessionRepository for MemoryStore {
    fn current_user_id(&self) -> AppResult<Option<String>> {
        Ok(self.session.clone())
    }

    fn set_current_user(&mut self, user_id: &str) -> AppResult<()> {
        self.session = Some(user_id.to_string());
        Ok(())
    }

    fn clear_session(&mut self) -> AppResult<()> {
        self.session = None;
        Ok(())
    }
}
