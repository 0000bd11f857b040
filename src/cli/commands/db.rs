use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // Plain open: `--migrate` is the only flag that touches the schema.
    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Applying pending migrations…");
        run_pending_migrations(&pool.conn)?;
        success("Schema is up to date.");
    }

    if *show_info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        let report: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
        if report == "ok" {
            success("Integrity check passed.");
        } else {
            error(format!("Integrity check failed: {}", report));
        }
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM;")?;
        success(format!("Compacted {}", cfg.database));
    }

    Ok(())
}
