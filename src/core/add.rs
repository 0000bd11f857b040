use crate::db::repository::RecordRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AreaIdCount, IndividualType, Money, Photo, RecordMode, User, WorkKind, WorkRecord,
};
use chrono::{DateTime, Local, NaiveDate};
use uuid::Uuid;

/// Parse a quantity the way the entry form does: optional sign, then leading
/// digits. Anything unparseable counts as zero.
pub fn parse_quantity(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for ch in digits.chars() {
        match ch.to_digit(10) {
            Some(d) => value = value.saturating_mul(10).saturating_add(d as i64),
            None => break,
        }
    }

    if negative { -value } else { value }
}

/// A positive form quantity as it is stored on a record.
fn stored_quantity(qty: i64) -> AppResult<u32> {
    u32::try_from(qty).map_err(|_| AppError::QuantityOutOfRange(qty))
}

/// Raw input of the "new record" form.
#[derive(Debug, Clone)]
pub struct NewRecordForm {
    pub date: NaiveDate,
    pub mode: RecordMode,
    /// Only read in area mode.
    pub area_ids: AreaIdCount,
    pub route_id: String,
    /// Only read in area mode with two IDs.
    pub route_id2: String,
    /// Parcel count in individual mode, the day's unit count in area mode.
    pub parcels: String,
    pub collections: String,
    pub photos: Vec<Photo>,
}

impl NewRecordForm {
    pub fn new(date: NaiveDate, mode: RecordMode) -> Self {
        Self {
            date,
            mode,
            area_ids: AreaIdCount::One,
            route_id: String::new(),
            route_id2: String::new(),
            parcels: String::new(),
            collections: String::new(),
            photos: Vec::new(),
        }
    }

    /// Two-route days store both IDs joined by ` + `.
    pub fn final_route_id(&self) -> String {
        if self.mode == RecordMode::Area
            && self.area_ids == AreaIdCount::Two
            && !self.route_id2.is_empty()
        {
            format!("{} + {}", self.route_id, self.route_id2)
        } else {
            self.route_id.clone()
        }
    }

    /// The total the form would earn if submitted now.
    pub fn preview(&self) -> Money {
        match self.mode {
            RecordMode::Individual => {
                WorkKind::Individual(IndividualType::Parcel)
                    .earnings(parse_quantity(&self.parcels))
                    .value
                    + WorkKind::Individual(IndividualType::Collection)
                        .earnings(parse_quantity(&self.collections))
                        .value
            }
            RecordMode::Area => WorkKind::Area(self.area_ids)
                .earnings(parse_quantity(&self.parcels))
                .value,
        }
    }

    /// Turn the form into the records it creates: one for area mode, one per
    /// non-zero unit type for individual mode.
    pub fn build_records(&self, owner: &User, now: DateTime<Local>) -> AppResult<Vec<WorkRecord>> {
        let route = self.final_route_id();
        if route.trim().is_empty() {
            return Err(AppError::MissingRouteId);
        }

        // Priced from the same value that is stored.
        let make = |kind: WorkKind, qty: u32| {
            let calc = kind.earnings(i64::from(qty));
            WorkRecord {
                id: Uuid::new_v4().to_string(),
                user_id: owner.id.clone(),
                user_name: owner.name.clone(),
                date: self.date,
                kind,
                id_field: route.clone(),
                quantity: qty,
                calculated_value: calc.value,
                photos: self.photos.clone(),
                created_at: now,
            }
        };

        let mut out = Vec::new();
        match self.mode {
            RecordMode::Area => {
                let qty = parse_quantity(&self.parcels);
                if qty <= 0 {
                    return Err(AppError::NothingToSave);
                }
                out.push(make(WorkKind::Area(self.area_ids), stored_quantity(qty)?));
            }
            RecordMode::Individual => {
                let p = parse_quantity(&self.parcels);
                let c = parse_quantity(&self.collections);
                if p <= 0 && c <= 0 {
                    return Err(AppError::NothingToSave);
                }
                if p > 0 {
                    out.push(make(
                        WorkKind::Individual(IndividualType::Parcel),
                        stored_quantity(p)?,
                    ));
                }
                if c > 0 {
                    out.push(make(
                        WorkKind::Individual(IndividualType::Collection),
                        stored_quantity(c)?,
                    ));
                }
            }
        }

        Ok(out)
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the form, create its records and append them to the store.
    /// Returns the records that were written.
    pub fn apply<R: RecordRepository>(
        store: &mut R,
        owner: &User,
        form: &NewRecordForm,
    ) -> AppResult<Vec<WorkRecord>> {
        let records = form.build_records(owner, Local::now())?;
        for r in &records {
            store.add_record(r)?;
        }
        Ok(records)
    }
}
