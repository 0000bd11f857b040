#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dp() -> Command {
    cargo_bin_cmd!("drivepay")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_drivepay.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create the schema (and the seeded administrator).
pub fn init_db(db_path: &str) {
    dp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Register a driver; registration also logs them in.
pub fn register(db_path: &str, name: &str, username: &str) {
    dp().args([
        "--db", db_path, "register", "--name", name, "-u", username, "-p", "pw",
    ])
    .assert()
    .success();
}

pub fn login(db_path: &str, username: &str, password: &str) {
    dp().args(["--db", db_path, "login", "-u", username, "-p", password])
        .assert()
        .success();
}

/// Fresh DB with driver `jsilva` logged in and a small March 2024 dataset:
/// a 2-ID area day (200 units, £300) and an individual day with 10 parcels
/// and 5 collections (£10 + £4).
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    register(db_path, "João Silva", "jsilva");

    dp().args([
        "--db",
        db_path,
        "add",
        "--date",
        "2024-03-04",
        "--mode",
        "area",
        "--area-ids",
        "2",
        "--route",
        "R-10",
        "--route2",
        "R-11",
        "--parcels",
        "200",
    ])
    .assert()
    .success();

    dp().args([
        "--db",
        db_path,
        "add",
        "--date",
        "2024-03-05",
        "--route",
        "R-20",
        "--parcels",
        "10",
        "--collections",
        "5",
    ])
    .assert()
    .success();
}

/// Read a single integer from the database (test inspection only).
pub fn query_i64(db_path: &str, sql: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(sql, [], |row| row.get(0)).expect("query")
}

pub fn query_string(db_path: &str, sql: &str) -> String {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(sql, [], |row| row.get(0)).expect("query")
}
