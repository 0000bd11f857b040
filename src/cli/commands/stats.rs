use crate::cli::commands::{open_session, target_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::current_month_stats;
use crate::db::repository::RecordRepository;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{BOLD, GREEN, RESET};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { user } = cmd {
        let (pool, actor) = open_session(&cfg.database)?;
        let owner = target_user(&pool, &actor, user.as_deref())?;

        let today = date::today();
        let records = pool.records_by_user(&owner.id)?;
        let stats = current_month_stats(&records, today);

        header(format!(
            "{} ({})",
            date::month_heading(&date::month_of(today)),
            owner.name
        ));
        println!("Total do mês      : {}{}{}{}", BOLD, GREEN, stats.total, RESET);
        println!("Dias trabalhados  : {}", stats.unique_days);
        println!("Média por dia     : {}", stats.average);
    }

    Ok(())
}
