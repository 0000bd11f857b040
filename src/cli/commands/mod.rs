pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod quote;
pub mod session;
pub mod stats;
pub mod users;

use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::db::repository::UserRepository;
use crate::errors::{AppError, AppResult};
use crate::models::User;

/// Resolve whose records a command works on: the logged-in user, or, for an
/// admin passing `--user`, that driver.
pub(crate) fn target_user(pool: &DbPool, actor: &User, username: Option<&str>) -> AppResult<User> {
    match username {
        None => Ok(actor.clone()),
        Some(name) => {
            if !actor.is_admin() {
                return Err(AppError::NotAdmin);
            }
            pool.user_by_username(name)?
                .ok_or_else(|| AppError::UserNotFound(name.to_string()))
        }
    }
}

/// Open the store and require a session.
pub(crate) fn open_session(db_path: &str) -> AppResult<(DbPool, User)> {
    let pool = DbPool::open(db_path)?;
    let user = AuthLogic::require_user(&pool)?;
    Ok((pool, user))
}
