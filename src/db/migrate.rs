use crate::errors::AppResult;
use crate::models::User;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![chrono::Local::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Users, work records, photos and the single-slot session.
fn create_core_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id        TEXT PRIMARY KEY,
            username  TEXT NOT NULL,
            name      TEXT NOT NULL,
            role      TEXT NOT NULL DEFAULT 'USER' CHECK(role IN ('USER','ADMIN')),
            password  TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_users_username
            ON users(username COLLATE NOCASE);

        CREATE TABLE IF NOT EXISTS records (
            seq              INTEGER PRIMARY KEY AUTOINCREMENT,
            id               TEXT NOT NULL UNIQUE,
            user_id          TEXT NOT NULL,
            user_name        TEXT NOT NULL,
            date             TEXT NOT NULL,
            mode             TEXT NOT NULL CHECK(mode IN ('INDIVIDUAL','AREA')),
            individual_type  TEXT CHECK(individual_type IN ('PARCEL','COLLECTION')),
            area_id_count    INTEGER CHECK(area_id_count IN (1,2)),
            id_field         TEXT NOT NULL,
            quantity         INTEGER NOT NULL CHECK(quantity >= 0),
            value_pence      INTEGER NOT NULL,
            created_at       TEXT NOT NULL,
            CHECK (
                (mode = 'INDIVIDUAL' AND individual_type IS NOT NULL AND area_id_count IS NULL)
             OR (mode = 'AREA' AND individual_type IS NULL AND area_id_count IS NOT NULL)
            )
        );

        CREATE INDEX IF NOT EXISTS idx_records_user_date ON records(user_id, date);

        CREATE TABLE IF NOT EXISTS photos (
            record_id  TEXT NOT NULL,
            id         TEXT NOT NULL,
            position   INTEGER NOT NULL,
            data_url   TEXT NOT NULL,
            taken_at   TEXT NOT NULL,
            PRIMARY KEY (record_id, id)
        );

        CREATE TABLE IF NOT EXISTS session (
            slot        INTEGER PRIMARY KEY CHECK(slot = 1),
            user_id     TEXT NOT NULL,
            started_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn seed_admin(conn: &Connection) -> Result<()> {
    let admin = User::seeded_admin();
    conn.execute(
        "INSERT OR IGNORE INTO users (id, username, name, role, password)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            admin.id,
            admin.username,
            admin.name,
            admin.role.to_db_str(),
            admin.password
        ],
    )?;
    Ok(())
}

fn migrate_initial_schema(conn: &Connection) -> Result<()> {
    let version = "0001_initial_schema";
    if is_applied(conn, version)? {
        return Ok(());
    }

    let fresh = !table_exists(conn, "users")?;
    create_core_tables(conn)?;
    if fresh {
        seed_admin(conn)?;
    }

    mark_applied(conn, version, "Created users, records, photos and session tables")?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by `DbPool::open` and the `init` / `db --migrate` commands.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    migrate_initial_schema(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent_and_seed_admin_once() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        let admins: i64 = conn
            .query_row("SELECT COUNT(*) FROM users WHERE role = 'ADMIN'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(admins, 1);

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, 1);
    }

    #[test]
    fn schema_rejects_mixed_shape_rows() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        let res = conn.execute(
            "INSERT INTO records (id, user_id, user_name, date, mode, individual_type,
                                  area_id_count, id_field, quantity, value_pence, created_at)
             VALUES ('x', 'u', 'U', '2024-01-01', 'AREA', 'PARCEL', 1, 'R', 1, 18000, 'now')",
            [],
        );
        assert!(res.is_err());
    }
}
