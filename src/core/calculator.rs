//! Earnings rules.
//!
//! | shape                      | pay                                   |
//! |----------------------------|---------------------------------------|
//! | individual, collection     | £0.80 per unit                        |
//! | individual, parcel/other   | £1.00 per unit                        |
//! | area, 1 ID                 | £180 flat                             |
//! | area, 2 IDs                | £260 (<150), £300 (150..=250), £360   |

use crate::models::{IndividualType, Money, RecordMode, WorkKind};

const PARCEL_RATE: Money = Money::from_pence(100);
const COLLECTION_RATE: Money = Money::from_pence(80);

const AREA_SINGLE: Money = Money::from_pounds(180);
const AREA_DOUBLE_LOW: Money = Money::from_pounds(260);
const AREA_DOUBLE_MID: Money = Money::from_pounds(300);
const AREA_DOUBLE_HIGH: Money = Money::from_pounds(360);

/// Largest unit count a record can hold; larger inputs are priced at this.
pub const MAX_QUANTITY: i64 = u32::MAX as i64;

const TIER_MID_FROM: i64 = 150;
const TIER_MID_TO: i64 = 250;

/// Result of applying the pay table to one work shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub value: Money,
    /// Display-only explanation of which rule fired.
    pub breakdown: String,
}

/// Apply the pay table. Negative quantities count as zero and counts above
/// [`MAX_QUANTITY`] are capped; never fails.
///
/// `individual_type` is only consulted for individual mode and
/// `area_id_count` only for area mode, where anything other than 1 is
/// treated as two IDs.
pub fn calculate(
    mode: RecordMode,
    quantity: i64,
    individual_type: Option<IndividualType>,
    area_id_count: u8,
) -> Calculation {
    let qty = quantity.clamp(0, MAX_QUANTITY);

    match mode {
        RecordMode::Individual => match individual_type {
            Some(IndividualType::Collection) => Calculation {
                value: COLLECTION_RATE.times(qty),
                breakdown: format!("{} coletas × £0.80", qty),
            },
            _ => Calculation {
                value: PARCEL_RATE.times(qty),
                breakdown: format!("{} parcelas × £1.00", qty),
            },
        },
        RecordMode::Area if area_id_count == 1 => Calculation {
            value: AREA_SINGLE,
            breakdown: "Daily (1 ID) - Valor Fixo".to_string(),
        },
        RecordMode::Area if qty < TIER_MID_FROM => Calculation {
            value: AREA_DOUBLE_LOW,
            breakdown: "Daily (2 IDs, <150 unid.)".to_string(),
        },
        RecordMode::Area if qty <= TIER_MID_TO => Calculation {
            value: AREA_DOUBLE_MID,
            breakdown: "Daily (2 IDs, 150-250 unid.)".to_string(),
        },
        RecordMode::Area => Calculation {
            value: AREA_DOUBLE_HIGH,
            breakdown: "Daily (2 IDs, >250 unid.)".to_string(),
        },
    }
}

impl WorkKind {
    /// Typed entry point over [`calculate`].
    pub fn earnings(&self, quantity: i64) -> Calculation {
        match self {
            WorkKind::Individual(t) => calculate(RecordMode::Individual, quantity, Some(*t), 1),
            WorkKind::Area(n) => calculate(RecordMode::Area, quantity, None, n.count()),
        }
    }
}
