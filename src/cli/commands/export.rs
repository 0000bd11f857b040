use crate::cli::commands::{open_session, target_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::parse_month_key;
use crate::db::log::audit_or_warn;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, ExportScope};
use crate::utils::date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        month,
        user,
        all,
        file,
        force,
    } = cmd
    {
        let (pool, actor) = open_session(&cfg.database)?;

        let scope = if *all {
            if !actor.is_admin() {
                return Err(AppError::NotAdmin);
            }
            ExportScope::All
        } else {
            let month = match month {
                Some(m) => parse_month_key(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?,
                None => date::month_of(date::today()),
            };
            let owner = target_user(&pool, &actor, user.as_deref())?;
            ExportScope::Month { month, owner }
        };

        let written = ExportLogic::export(
            &pool,
            &scope,
            *format,
            file.as_deref(),
            Path::new(&cfg.export_dir),
            *force,
        )?;

        if let Some(path) = written {
            audit_or_warn(
                &pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("{} export by {}", format.label(), actor.username),
            );
        }
    }

    Ok(())
}
