use crate::cli::commands::{open_session, target_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{MonthGroup, MonthlyHistory, parse_month_key};
use crate::db::repository::RecordRepository;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BOLD, GREEN, RESET, color_for_kind};
use crate::utils::date::month_heading;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, user } = cmd {
        let (pool, actor) = open_session(&cfg.database)?;
        let owner = target_user(&pool, &actor, user.as_deref())?;

        let month = match month {
            Some(m) => Some(parse_month_key(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?),
            None => None,
        };

        let records = pool.records_by_user(&owner.id)?;
        let history = MonthlyHistory::from_records(&records);

        if history.is_empty() {
            info(format!("No records for {}.", owner.username));
            return Ok(());
        }

        match &month {
            Some(m) => match history.get(m) {
                Some(group) => print_month(m, group, &owner, &cfg.separator_char),
                None => info(format!("No records for {} in {}.", owner.username, m)),
            },
            None => {
                for (m, group) in history.iter_desc() {
                    print_month(m, group, &owner, &cfg.separator_char);
                }
            }
        }
    }

    Ok(())
}

fn print_month(month: &str, group: &MonthGroup, owner: &User, sep: &str) {
    header(format!("{} ({})", month_heading(month), owner.username));

    let mut table = Table::new(vec![
        Column::left("Data"),
        Column::left("Tipo"),
        Column::left("ID Rota"),
        Column::right("Qtd"),
        Column::right("Valor"),
        Column::right("Fotos"),
        Column::left("Registro"),
    ]);

    for r in &group.items {
        table.add_row(vec![
            r.date.format("%d/%m").to_string(),
            format!("{}{}{}", color_for_kind(&r.kind), r.kind.mode_label(), RESET),
            r.id_field.clone(),
            r.quantity.to_string(),
            r.calculated_value.to_string(),
            r.photos.len().to_string(),
            r.id.clone(),
        ]);
    }

    print!("{}", table.render(sep));
    println!(
        "{}Total do mês: {}{}{}",
        BOLD, GREEN, group.total, RESET
    );
}
