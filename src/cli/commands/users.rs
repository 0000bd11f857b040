use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Users { search } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        AuthLogic::require_admin(&pool)?;

        let drivers = AuthLogic::search_drivers(&pool, search)?;
        if drivers.is_empty() {
            info("No drivers found.");
            return Ok(());
        }

        header("Motoristas");
        let mut table = Table::new(vec![Column::left("Nome"), Column::left("Usuário")]);
        for d in &drivers {
            table.add_row(vec![d.name.clone(), d.username.clone()]);
        }
        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
