use crate::db::repository::RecordRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{User, WorkRecord};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Load the record `actor` wants to delete, checking ownership.
    /// Drivers may only touch their own records; admins may touch any.
    pub fn resolve<R: RecordRepository>(
        store: &R,
        actor: &User,
        record_id: &str,
    ) -> AppResult<WorkRecord> {
        let record = store
            .get_record(record_id)?
            .ok_or_else(|| AppError::RecordNotFound(record_id.to_string()))?;

        if !actor.is_admin() && record.user_id != actor.id {
            return Err(AppError::Forbidden(format!(
                "record {} belongs to another user",
                record_id
            )));
        }

        Ok(record)
    }

    /// Delete a record after [`resolve`](Self::resolve) succeeds.
    pub fn apply<R: RecordRepository>(
        store: &mut R,
        actor: &User,
        record_id: &str,
    ) -> AppResult<WorkRecord> {
        let record = Self::resolve(&*store, actor, record_id)?;
        if !store.delete_record(record_id)? {
            return Err(AppError::RecordNotFound(record_id.to_string()));
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::{AddLogic, NewRecordForm};
    use crate::db::MemoryStore;
    use crate::models::{RecordMode, UserRole};
    use chrono::NaiveDate;

    fn user(id: &str, role: UserRole) -> User {
        User {
            id: id.into(),
            username: id.into(),
            name: id.to_uppercase(),
            role,
            password: String::new(),
        }
    }

    fn seed(store: &mut MemoryStore, owner: &User) -> String {
        let mut form = NewRecordForm::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), RecordMode::Area);
        form.route_id = "R1".into();
        form.parcels = "120".into();
        AddLogic::apply(store, owner, &form).unwrap()[0].id.clone()
    }

    #[test]
    fn owner_can_delete() {
        let mut store = MemoryStore::new();
        let owner = user("u1", UserRole::User);
        let id = seed(&mut store, &owner);

        let removed = DeleteLogic::apply(&mut store, &owner, &id).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.all_records().unwrap().is_empty());
    }

    #[test]
    fn other_driver_cannot_delete() {
        let mut store = MemoryStore::new();
        let id = seed(&mut store, &user("u1", UserRole::User));

        let err = DeleteLogic::apply(&mut store, &user("u2", UserRole::User), &id).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(store.all_records().unwrap().len(), 1);
    }

    #[test]
    fn admin_can_delete_any() {
        let mut store = MemoryStore::new();
        let id = seed(&mut store, &user("u1", UserRole::User));
        DeleteLogic::apply(&mut store, &User::seeded_admin(), &id).unwrap();
        assert!(store.all_records().unwrap().is_empty());
    }

    #[test]
    fn unknown_id() {
        let mut store = MemoryStore::new();
        let err = DeleteLogic::apply(&mut store, &User::seeded_admin(), "nope").unwrap_err();
        assert!(matches!(err, AppError::RecordNotFound(_)));
    }
}
