//! Unified application error type.
//! Every module (db, core, cli, export) returns AppError so that the binary
//! can report failures in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid record mode: {0}")]
    InvalidMode(String),

    #[error("Invalid individual type: {0}")]
    InvalidIndividualType(String),

    #[error("Invalid area ID count: {0} (must be 1 or 2)")]
    InvalidAreaIdCount(u8),

    #[error("Invalid photo: {0}")]
    InvalidPhoto(String),

    // ---------------------------
    // Form errors
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("A route ID is required")]
    MissingRouteId,

    #[error("Nothing to save: enter a quantity greater than zero")]
    NothingToSave,

    #[error("Quantity out of range: {0} (maximum is 4294967295)")]
    QuantityOutOfRange(i64),

    // ---------------------------
    // Auth / session
    // ---------------------------
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Incorrect password")]
    WrongPassword,

    #[error("Invalid administrator credentials")]
    InvalidAdminCredentials,

    #[error("This account does not have administrator privileges")]
    NotAdmin,

    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("Not logged in. Run `drivepay login` first")]
    NotLoggedIn,

    #[error("Operation not allowed: {0}")]
    Forbidden(String),

    // ---------------------------
    // Record errors
    // ---------------------------
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
