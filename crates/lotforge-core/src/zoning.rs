// ===== lotforge/crates/lotforge-core/src/zoning.rs =====
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Broad use classification of a zoning district.
///
/// Every evaluator routes zone questions through [`classify_zone`] so the
/// pattern rules live in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
pub enum ZoneCategory {
    SingleFamily,
    MultiFamily,
    Commercial,
    Office,
    MixedUse,
    Industrial,
    Agricultural,
    Unknown,
}

impl ZoneCategory {
    /// Zones where housing is a permitted primary use.
    pub fn is_residential(self) -> bool {
        matches!(
            self,
            ZoneCategory::SingleFamily | ZoneCategory::MultiFamily | ZoneCategory::MixedUse
        )
    }

    /// Zones AB 2011 can convert (commercial corridors).
    pub fn is_commercial_corridor(self) -> bool {
        matches!(
            self,
            ZoneCategory::Commercial | ZoneCategory::Office | ZoneCategory::MixedUse
        )
    }
}

/// Classify a raw zone code string (e.g. "R1", "C-2", "MUB-L") into a
/// [`ZoneCategory`]. Unrecognized codes return `Unknown`; callers degrade
/// to fallback standards rather than failing.
pub fn classify_zone(code: &str) -> ZoneCategory {
    let norm: String = code
        .trim()
        .to_ascii_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    if norm.is_empty() {
        return ZoneCategory::Unknown;
    }

    // Mixed-use markers outrank the bare C/M prefixes below ("CMU", "MUB").
    if norm.starts_with("MU") || norm.starts_with("MX") || norm.contains("MU") {
        return ZoneCategory::MixedUse;
    }

    if norm.starts_with("R1") || norm.starts_with("RS") || norm.starts_with("RE") {
        return ZoneCategory::SingleFamily;
    }

    if norm.starts_with("R2")
        || norm.starts_with("R3")
        || norm.starts_with("R4")
        || norm.starts_with("RM")
        || norm.starts_with("RH")
    {
        return ZoneCategory::MultiFamily;
    }

    // Industrial before commercial so "M1"/"M2" don't fall through.
    if norm.starts_with("I")
        || (norm.starts_with('M') && norm[1..].chars().next().is_some_and(|c| c.is_ascii_digit()))
    {
        return ZoneCategory::Industrial;
    }

    if norm.starts_with('C') || norm.starts_with("NC") {
        return ZoneCategory::Commercial;
    }

    // "OS" (open space) is not an office district.
    if norm.starts_with('O') && !norm.starts_with("OS") {
        return ZoneCategory::Office;
    }

    if norm.starts_with("AG") || norm == "A" || norm.starts_with("A1") || norm.starts_with("A2") {
        return ZoneCategory::Agricultural;
    }

    ZoneCategory::Unknown
}

/// Zoning overlay districts the standards table knows how to adjust for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum OverlayCode {
    /// Downtown Community Plan overlay (tier-based).
    #[strum(serialize = "DCP")]
    Dcp,
    /// Bergamot area plan overlay. Mutually exclusive with DCP.
    #[strum(serialize = "BGT", serialize = "BERGAMOT")]
    Bergamot,
    #[strum(serialize = "TPO", serialize = "TOD")]
    TransitPriority,
    #[strum(serialize = "AHO")]
    AffordableHousing,
    #[strum(serialize = "HD", serialize = "HIST")]
    HistoricDistrict,
}

/// AB 2011 corridor classification by street right-of-way width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, Serialize, Deserialize)]
pub enum CorridorTier {
    Low,
    Mid,
    High,
}

/// Street classification hint used to estimate a missing ROW width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum StreetClass {
    Local,
    Collector,
    Arterial,
    Boulevard,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setbacks {
    pub front_ft: f64,
    pub side_ft: f64,
    pub rear_ft: f64,
}

impl Setbacks {
    pub const fn new(front_ft: f64, side_ft: f64, rear_ft: f64) -> Self {
        Self {
            front_ft,
            side_ft,
            rear_ft,
        }
    }
}

/// Resolved development envelope for a parcel, before unit-count math.
/// Each law evaluator takes its own copy and overrides fields freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentStandards {
    pub max_far: f64,
    pub max_height_ft: f64,
    pub max_stories: u32,
    /// Units per acre, when the district is density-based.
    pub max_density_u_ac: Option<f64>,
    pub parking_per_unit: f64,
    pub lot_coverage_pct: f64,
    pub setbacks: Setbacks,
}
