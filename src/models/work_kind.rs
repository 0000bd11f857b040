use serde::Serialize;

/// How a record is paid: per unit, or per route-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordMode {
    Individual, // INDIVIDUAL
    Area,       // AREA
}

impl RecordMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordMode::Individual => "INDIVIDUAL",
            RecordMode::Area => "AREA",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "INDIVIDUAL" => Some(RecordMode::Individual),
            "AREA" => Some(RecordMode::Area),
            _ => None,
        }
    }

    /// Helper: accept CLI input in any case, plus `daily` as an alias for AREA.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "I" | "INDIVIDUAL" => Some(RecordMode::Individual),
            "A" | "AREA" | "DAILY" => Some(RecordMode::Area),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndividualType {
    Parcel,     // PARCEL
    Collection, // COLLECTION
}

impl IndividualType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndividualType::Parcel => "PARCEL",
            IndividualType::Collection => "COLLECTION",
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "PARCEL" => Some(IndividualType::Parcel),
            "COLLECTION" => Some(IndividualType::Collection),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "P" | "PARCEL" => Some(IndividualType::Parcel),
            "C" | "COLLECTION" => Some(IndividualType::Collection),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IndividualType::Parcel => "Parcel",
            IndividualType::Collection => "Collection",
        }
    }
}

/// Number of route IDs covered by a daily (AREA) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AreaIdCount {
    One,
    Two,
}

impl AreaIdCount {
    pub fn from_count(n: u8) -> Option<Self> {
        match n {
            1 => Some(AreaIdCount::One),
            2 => Some(AreaIdCount::Two),
            _ => None,
        }
    }

    pub fn count(&self) -> u8 {
        match self {
            AreaIdCount::One => 1,
            AreaIdCount::Two => 2,
        }
    }
}

/// The mode-specific shape of a work record.
///
/// An individual record always carries its unit type and never an ID count;
/// an area record is the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkKind {
    Individual(IndividualType),
    Area(AreaIdCount),
}

impl WorkKind {
    pub fn mode(&self) -> RecordMode {
        match self {
            WorkKind::Individual(_) => RecordMode::Individual,
            WorkKind::Area(_) => RecordMode::Area,
        }
    }

    pub fn individual_type(&self) -> Option<IndividualType> {
        match self {
            WorkKind::Individual(t) => Some(*t),
            WorkKind::Area(_) => None,
        }
    }

    pub fn area_id_count(&self) -> Option<AreaIdCount> {
        match self {
            WorkKind::Individual(_) => None,
            WorkKind::Area(n) => Some(*n),
        }
    }

    /// Text used in the `Modo` export column.
    pub fn mode_label(&self) -> String {
        match self {
            WorkKind::Individual(t) => format!("{} ({})", RecordMode::Individual.as_str(), t.as_str()),
            WorkKind::Area(_) => RecordMode::Area.as_str().to_string(),
        }
    }

    /// Rebuild from the nullable DB columns; rejects rows that break the
    /// one-of invariant.
    pub fn from_columns(
        mode: &str,
        individual_type: Option<&str>,
        area_id_count: Option<u8>,
    ) -> Option<Self> {
        match (RecordMode::from_db_str(mode)?, individual_type, area_id_count) {
            (RecordMode::Individual, Some(t), None) => {
                Some(WorkKind::Individual(IndividualType::from_db_str(t)?))
            }
            (RecordMode::Area, None, Some(n)) => Some(WorkKind::Area(AreaIdCount::from_count(n)?)),
            _ => None,
        }
    }
}
