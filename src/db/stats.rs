use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Money;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let records: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    let drivers: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM users WHERE role = 'USER'",
        [],
        |row| row.get(0),
    )?;
    let photos: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM photos", [], |row| row.get(0))?;

    println!("{}• Drivers:{} {}{}{}", CYAN, RESET, GREEN, drivers, RESET);
    println!("{}• Records:{} {}{}{}", CYAN, RESET, GREEN, records, RESET);
    println!("{}• Photos:{} {}", CYAN, RESET, photos);

    //
    // 3) DATE RANGE
    //
    let bounds: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM records", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;
    let (first, last) = bounds.unwrap_or((None, None));

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) EARNINGS LOGGED
    //
    let total: i64 = pool.conn.query_row(
        "SELECT COALESCE(SUM(value_pence), 0) FROM records",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Total earnings logged:{} {}",
        CYAN,
        RESET,
        Money::from_pence(total)
    );

    println!();
    Ok(())
}
