//! Account commands: `register`, `login`, `logout`, `whoami`.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::repository::SessionRepository;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Register {
            name,
            username,
            password,
        } => {
            let mut pool = DbPool::open(&cfg.database)?;
            let user = AuthLogic::register(&mut pool, name, username, password)?;

            audit_or_warn(
                &pool.conn,
                "register",
                &user.username,
                &format!("Registered driver '{}'", user.name),
            );
            success(format!(
                "Account created. Logged in as {} ({})",
                user.name, user.username
            ));
        }

        Commands::Login {
            username,
            password,
            admin,
        } => {
            let mut pool = DbPool::open(&cfg.database)?;
            let user = AuthLogic::login(&mut pool, username, password, *admin)?;

            audit_or_warn(&pool.conn, "login", &user.username, "Session opened");
            if user.is_admin() {
                success(format!("Logged in as administrator ({})", user.username));
            } else {
                success(format!("Logged in as {} ({})", user.name, user.username));
            }
        }

        Commands::Logout => {
            let mut pool = DbPool::open(&cfg.database)?;
            match AuthLogic::current_user(&pool)? {
                Some(user) => {
                    pool.clear_session()?;
                    audit_or_warn(&pool.conn, "logout", &user.username, "Session closed");
                    success(format!("Logged out {}", user.username));
                }
                None => info("No active session."),
            }
        }

        Commands::Whoami => {
            let pool = DbPool::open(&cfg.database)?;
            match AuthLogic::current_user(&pool)? {
                Some(user) => println!(
                    "{} ({}) - {}",
                    user.name,
                    user.username,
                    user.role.to_db_str()
                ),
                None => info("Not logged in."),
            }
        }

        _ => {}
    }

    Ok(())
}
