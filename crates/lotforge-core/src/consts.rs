// ===== lotforge/crates/lotforge-core/src/consts.rs =====
/// Square feet per acre, used for all density (units/acre) math.
pub const SQFT_PER_ACRE: f64 = 43_560.0;

/// SB 9 unit cap when the lot can be split (two lots, two units each).
pub const SB9_MAX_UNITS_WITH_SPLIT: u32 = 4;

/// SB 9 unit cap when the lot cannot be split (one lot, two units).
pub const SB9_MAX_UNITS_NO_SPLIT: u32 = 2;

/// SB 9 minimum size of each child lot after an urban lot split.
/// A parcel must be at least twice this to split.
pub const SB9_MIN_NEW_LOT_SQFT: f64 = 1_200.0;

/// SB 9 projects use statute-fixed standards, not base zoning.
pub const SB9_MAX_HEIGHT_FT: f64 = 30.0;
pub const SB9_MAX_STORIES: u32 = 2;
pub const SB9_FRONT_SETBACK_FT: f64 = 10.0;
pub const SB9_SIDE_REAR_SETBACK_FT: f64 = 4.0;

/// SB 35 labor thresholds (Gov. Code § 65913.4(a)(8)).
/// Prevailing wage applies above this unit count.
pub const SB35_PREVAILING_WAGE_UNIT_THRESHOLD: u32 = 10;
/// Skilled & trained workforce applies above this unit count.
pub const SB35_SKILLED_WORKFORCE_UNIT_THRESHOLD: u32 = 75;

/// AB 2011 requires a skilled & trained workforce at or above this count.
pub const AB2011_SKILLED_WORKFORCE_UNIT_THRESHOLD: u32 = 50;

/// AB 2011 mixed-income track affordability share.
pub const AB2011_MIXED_INCOME_AFFORDABLE_PCT: f64 = 15.0;

/// AB 2011 corridor right-of-way bounds (ft). Narrower streets are not
/// corridors; wider ones fall outside the statute's definition.
pub const AB2011_MIN_ROW_WIDTH_FT: f64 = 70.0;
pub const AB2011_MID_ROW_WIDTH_FT: f64 = 100.0;
pub const AB2011_MAX_ROW_WIDTH_FT: f64 = 150.0;

/// Maximum number of density-bonus incentives/concessions granted,
/// regardless of jurisdiction-specific rules.
pub const DENSITY_BONUS_MAX_INCENTIVES: u32 = 4;

/// RHNA fallback when a jurisdiction is missing from the directory:
/// the conservative (low-performing) affordability requirement.
pub const RHNA_FALLBACK_AFFORDABLE_PCT: f64 = 50.0;
