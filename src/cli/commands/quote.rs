use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculate;
use crate::errors::{AppError, AppResult};
use crate::models::{AreaIdCount, IndividualType, RecordMode};
use crate::ui::messages::detail;
use crate::utils::colors::{BOLD, GREEN, RESET};

/// `quote` never touches the database.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Quote {
        mode,
        qty,
        kind,
        area_ids,
    } = cmd
    {
        let mode = RecordMode::from_code(mode).ok_or_else(|| AppError::InvalidMode(mode.clone()))?;

        let individual_type = match kind {
            Some(k) => Some(
                IndividualType::from_code(k)
                    .ok_or_else(|| AppError::InvalidIndividualType(k.clone()))?,
            ),
            None => None,
        };

        let ids = AreaIdCount::from_count(*area_ids)
            .ok_or(AppError::InvalidAreaIdCount(*area_ids))?;

        let calc = calculate(mode, *qty, individual_type, ids.count());

        println!("{}{}{}{}", BOLD, GREEN, calc.value, RESET);
        detail(&calc.breakdown);
    }

    Ok(())
}
