use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log::audit_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let (mut pool, actor) = open_session(&cfg.database)?;

        // Fail on unknown ids or foreign records before prompting.
        let record = DeleteLogic::resolve(&pool, &actor, id)?;

        if cfg.confirm_delete && !*yes {
            let prompt = format!(
                "Delete {} on {} ({})? This action is irreversible.",
                record.summary_line(),
                record.date_str(),
                record.calculated_value
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut pool, &actor, id)?;

        audit_or_warn(
            &pool.conn,
            "del",
            &removed.id,
            &format!("Deleted record of {} by {}", removed.user_name, actor.username),
        );
        success(format!("Record {} has been deleted.", removed.id));
    }

    Ok(())
}
