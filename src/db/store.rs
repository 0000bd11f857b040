//! SQLite-backed implementation of the repository traits.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::db::repository::{RecordRepository, SessionRepository, UserRepository};
use crate::errors::AppResult;
use crate::models::{User, WorkRecord};

impl RecordRepository for DbPool {
    fn add_record(&mut self, record: &WorkRecord) -> AppResult<()> {
        self.with_conn(|conn| queries::insert_record(conn, record))
    }

    fn delete_record(&mut self, id: &str) -> AppResult<bool> {
        self.with_conn(|conn| queries::delete_record(conn, id))
    }

    fn get_record(&self, id: &str) -> AppResult<Option<WorkRecord>> {
        queries::load_record(&self.conn, id)
    }

    fn records_by_user(&self, user_id: &str) -> AppResult<Vec<WorkRecord>> {
        queries::load_records_by_user(&self.conn, user_id)
    }

    fn all_records(&self) -> AppResult<Vec<WorkRecord>> {
        queries::load_all_records(&self.conn)
    }
}

impl UserRepository for DbPool {
    fn users(&self) -> AppResult<Vec<User>> {
        queries::load_users(&self.conn)
    }

    fn user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        queries::load_user_by_username(&self.conn, username)
    }

    fn user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        queries::load_user_by_id(&self.conn, id)
    }

    fn insert_user(&mut self, user: &User) -> AppResult<()> {
        queries::insert_user(&self.conn, user)
    }
}

impl SessionRepository for DbPool {
    fn current_user_id(&self) -> AppResult<Option<String>> {
        queries::load_session_user(&self.conn)
    }

    fn set_current_user(&mut self, user_id: &str) -> AppResult<()> {
        queries::store_session_user(&self.conn, user_id)
    }

    fn clear_session(&mut self) -> AppResult<()> {
        queries::clear_session(&self.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaIdCount, IndividualType, Money, Photo, WorkKind};
    use chrono::{Local, NaiveDate, TimeZone};

    fn rec(id: &str, user: &str, date: &str, kind: WorkKind) -> WorkRecord {
        WorkRecord {
            id: id.to_string(),
            user_id: user.to_string(),
            user_name: format!("Name {user}"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
            id_field: "R-9".to_string(),
            quantity: 42,
            calculated_value: kind.earnings(42).value,
            photos: vec![],
            created_at: Local.with_ymd_and_hms(2024, 5, 6, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn records_round_trip_with_photos() {
        let mut pool = DbPool::in_memory().unwrap();
        let mut r = rec("r1", "u1", "2024-05-06", WorkKind::Area(AreaIdCount::Two));
        r.photos = vec![
            Photo {
                id: "p1".into(),
                data_url: "data:image/png;base64,AAAA".into(),
                timestamp: Local.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap(),
            },
            Photo {
                id: "p2".into(),
                data_url: "data:image/jpeg;base64,BBBB".into(),
                timestamp: Local.with_ymd_and_hms(2024, 5, 6, 9, 5, 0).unwrap(),
            },
        ];
        pool.add_record(&r).unwrap();

        let loaded = pool.get_record("r1").unwrap().unwrap();
        assert_eq!(loaded, r);
        assert_eq!(loaded.calculated_value, Money::from_pounds(260));
    }

    #[test]
    fn shared_photos_across_two_records() {
        let mut pool = DbPool::in_memory().unwrap();
        let photo = Photo {
            id: "same".into(),
            data_url: "data:image/png;base64,AAAA".into(),
            timestamp: Local.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap(),
        };
        let mut a = rec("a", "u1", "2024-05-06", WorkKind::Individual(IndividualType::Parcel));
        let mut b = rec("b", "u1", "2024-05-06", WorkKind::Individual(IndividualType::Collection));
        a.photos = vec![photo.clone()];
        b.photos = vec![photo];
        pool.add_record(&a).unwrap();
        pool.add_record(&b).unwrap();

        assert_eq!(pool.all_records().unwrap().len(), 2);
    }

    #[test]
    fn by_user_sorted_by_date_desc_stable() {
        let mut pool = DbPool::in_memory().unwrap();
        let p = WorkKind::Individual(IndividualType::Parcel);
        pool.add_record(&rec("a", "u1", "2024-01-05", p)).unwrap();
        pool.add_record(&rec("b", "u1", "2024-02-01", p)).unwrap();
        pool.add_record(&rec("c", "u2", "2024-03-01", p)).unwrap();
        pool.add_record(&rec("d", "u1", "2024-01-05", p)).unwrap();

        let ids: Vec<String> = pool
            .records_by_user("u1")
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "d"]);

        let all: Vec<String> = pool.all_records().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(all, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn delete_removes_record_and_photos() {
        let mut pool = DbPool::in_memory().unwrap();
        let mut r = rec("r1", "u1", "2024-05-06", WorkKind::Area(AreaIdCount::One));
        r.photos = vec![Photo {
            id: "p1".into(),
            data_url: "data:,".into(),
            timestamp: Local.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap(),
        }];
        pool.add_record(&r).unwrap();

        assert!(pool.delete_record("r1").unwrap());
        assert!(!pool.delete_record("r1").unwrap());
        assert!(pool.get_record("r1").unwrap().is_none());

        let photos: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM photos", [], |r| r.get(0))
            .unwrap();
        assert_eq!(photos, 0);
    }

    #[test]
    fn username_lookup_ignores_case() {
        let pool = DbPool::in_memory().unwrap();
        let admin = pool.user_by_username("ADMIN").unwrap().unwrap();
        assert!(admin.is_admin());
        assert_eq!(admin.id, "admin-1");
    }

    #[test]
    fn session_slot_is_replaced() {
        let mut pool = DbPool::in_memory().unwrap();
        assert_eq!(pool.current_user_id().unwrap(), None);
        pool.set_current_user("u1").unwrap();
        pool.set_current_user("u2").unwrap();
        assert_eq!(pool.current_user_id().unwrap().as_deref(), Some("u2"));
        pool.clear_session().unwrap();
        assert_eq!(pool.current_user_id().unwrap(), None);
    }
}
