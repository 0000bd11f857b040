use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewRecordForm};
use crate::core::photo::load_photo;
use crate::db::log::audit_or_warn;
use crate::errors::{AppError, AppResult};
use crate::models::{AreaIdCount, RecordMode};
use crate::ui::messages::{info, success};
use crate::utils::date;
use chrono::Local;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        mode,
        route,
        route2,
        area_ids,
        parcels,
        collections,
        photos,
    } = cmd
    {
        //
        // Form fields
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let mode = RecordMode::from_code(mode).ok_or_else(|| AppError::InvalidMode(mode.clone()))?;

        let mut form = NewRecordForm::new(d, mode);
        form.route_id = route.trim().to_string();
        form.route_id2 = route2.as_deref().unwrap_or("").trim().to_string();
        form.parcels = parcels.clone().unwrap_or_default();
        form.collections = collections.clone().unwrap_or_default();

        if mode == RecordMode::Area {
            form.area_ids = AreaIdCount::from_count(*area_ids)
                .ok_or(AppError::InvalidAreaIdCount(*area_ids))?;
        }

        let now = Local::now();
        for p in photos {
            form.photos.push(load_photo(Path::new(p), now)?);
        }

        //
        // Save
        //
        let (mut pool, owner) = open_session(&cfg.database)?;

        info(format!("Estimated total: {}", form.preview()));

        let saved = AddLogic::apply(&mut pool, &owner, &form)?;

        for r in &saved {
            audit_or_warn(
                &pool.conn,
                "add",
                &r.id,
                &format!(
                    "{} {} {} → {}",
                    r.date_str(),
                    r.kind.mode_label(),
                    r.quantity,
                    r.calculated_value.to_fixed2()
                ),
            );
            success(format!(
                "Saved {} on {} [{}]: {} (id {})",
                r.summary_line(),
                r.date_str(),
                r.id_field,
                r.calculated_value,
                r.id
            ));
        }
    }

    Ok(())
}
