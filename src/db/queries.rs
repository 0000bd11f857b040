use crate::errors::{AppError, AppResult};
use crate::models::{Money, Photo, User, UserRole, WorkKind, WorkRecord};
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const RECORD_COLUMNS: &str = "id, user_id, user_name, date, mode, individual_type, area_id_count,
                              id_field, quantity, value_pence, created_at";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_timestamp(s: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(AppError::InvalidDate(s.to_string())))
}

/// Map a `records` row. Photos are attached separately.
pub fn map_record_row(row: &Row) -> Result<WorkRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let mode: String = row.get("mode")?;
    let individual_type: Option<String> = row.get("individual_type")?;
    let area_id_count: Option<u8> = row.get("area_id_count")?;
    let kind = WorkKind::from_columns(&mode, individual_type.as_deref(), area_id_count)
        .ok_or_else(|| conversion_error(AppError::InvalidMode(mode.clone())))?;

    let created_at: String = row.get("created_at")?;

    Ok(WorkRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        user_name: row.get("user_name")?,
        date,
        kind,
        id_field: row.get("id_field")?,
        quantity: row.get("quantity")?,
        calculated_value: Money::from_pence(row.get("value_pence")?),
        photos: Vec::new(),
        created_at: parse_timestamp(&created_at)?,
    })
}

fn load_photos(conn: &Connection, record_id: &str) -> AppResult<Vec<Photo>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, data_url, taken_at FROM photos
         WHERE record_id = ?1
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([record_id], |row| {
        let taken_at: String = row.get(2)?;
        Ok(Photo {
            id: row.get(0)?,
            data_url: row.get(1)?,
            timestamp: parse_timestamp(&taken_at)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn query_records(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<WorkRecord>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_record_row)?;

    let mut out = Vec::new();
    for r in rows {
        let mut rec = r?;
        rec.photos = load_photos(conn, &rec.id)?;
        out.push(rec);
    }
    Ok(out)
}

pub fn insert_record(conn: &mut Connection, rec: &WorkRecord) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO records (id, user_id, user_name, date, mode, individual_type, area_id_count,
                              id_field, quantity, value_pence, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            rec.id,
            rec.user_id,
            rec.user_name,
            rec.date_str(),
            rec.mode().to_db_str(),
            rec.individual_type().map(|t| t.to_db_str()),
            rec.area_id_count().map(|n| n.count()),
            rec.id_field,
            rec.quantity,
            rec.calculated_value.pence(),
            rec.created_at.to_rfc3339(),
        ],
    )?;

    for (pos, photo) in rec.photos.iter().enumerate() {
        tx.execute(
            "INSERT INTO photos (record_id, id, position, data_url, taken_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                rec.id,
                photo.id,
                pos as i64,
                photo.data_url,
                photo.timestamp.to_rfc3339()
            ],
        )?;
    }

    tx.commit()?;
    Ok(())
}

pub fn delete_record(conn: &mut Connection, id: &str) -> AppResult<bool> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM photos WHERE record_id = ?1", [id])?;
    let n = tx.execute("DELETE FROM records WHERE id = ?1", [id])?;
    tx.commit()?;
    Ok(n > 0)
}

pub fn load_record(conn: &Connection, id: &str) -> AppResult<Option<WorkRecord>> {
    let sql = format!("SELECT {RECORD_COLUMNS} FROM records WHERE id = ?1");
    Ok(query_records(conn, &sql, &[&id])?.into_iter().next())
}

pub fn load_records_by_user(conn: &Connection, user_id: &str) -> AppResult<Vec<WorkRecord>> {
    let sql = format!(
        "SELECT {RECORD_COLUMNS} FROM records
         WHERE user_id = ?1
         ORDER BY date DESC, seq ASC"
    );
    query_records(conn, &sql, &[&user_id])
}

pub fn load_all_records(conn: &Connection) -> AppResult<Vec<WorkRecord>> {
    let sql = format!("SELECT {RECORD_COLUMNS} FROM records ORDER BY seq ASC");
    query_records(conn, &sql, &[])
}

pub fn map_user_row(row: &Row) -> Result<User> {
    let role_str: String = row.get("role")?;
    let role = UserRole::from_db_str(&role_str)
        .ok_or_else(|| conversion_error(AppError::Other(format!("Invalid role: {}", role_str))))?;

    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        name: row.get("name")?,
        role,
        password: row.get("password")?,
    })
}

pub fn load_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, name, role, password FROM users ORDER BY rowid ASC",
    )?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_user_by_username(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    let user = conn
        .query_row(
            "SELECT id, username, name, role, password FROM users
             WHERE username = ?1 COLLATE NOCASE",
            [username],
            map_user_row,
        )
        .optional()?;
    Ok(user)
}

pub fn load_user_by_id(conn: &Connection, id: &str) -> AppResult<Option<User>> {
    let user = conn
        .query_row(
            "SELECT id, username, name, role, password FROM users WHERE id = ?1",
            [id],
            map_user_row,
        )
        .optional()?;
    Ok(user)
}

pub fn insert_user(conn: &Connection, user: &User) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (id, username, name, role, password)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user.id,
            user.username,
            user.name,
            user.role.to_db_str(),
            user.password
        ],
    )?;
    Ok(())
}

pub fn load_session_user(conn: &Connection) -> AppResult<Option<String>> {
    let id = conn
        .query_row("SELECT user_id FROM session WHERE slot = 1", [], |row| row.get(0))
        .optional()?;
    Ok(id)
}

pub fn store_session_user(conn: &Connection, user_id: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO session (slot, user_id, started_at) VALUES (1, ?1, ?2)
         ON CONFLICT(slot) DO UPDATE SET user_id = excluded.user_id,
                                         started_at = excluded.started_at",
        params![user_id, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn clear_session(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM session", [])?;
    Ok(())
}
