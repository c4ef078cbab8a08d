// ===== lotforge/crates/lotforge-core/src/rules/sb9.rs =====
//! SB 9 (Gov. Code § 65852.21 / § 66411.7): two units per single-family
//! lot, plus an urban lot split. Standards are statute-fixed and supersede
//! base zoning. Every check runs so the result carries all exclusions,
//! not just the first.

use crate::config::AnalysisConfig;
use crate::consts::{
    SB9_FRONT_SETBACK_FT, SB9_MAX_HEIGHT_FT, SB9_MAX_STORIES, SB9_MAX_UNITS_NO_SPLIT,
    SB9_MAX_UNITS_WITH_SPLIT, SB9_SIDE_REAR_SETBACK_FT,
};
use crate::parcel::{FireHazardZone, Parcel, RentControlOverride};
use crate::scenario::{DevelopmentScenario, EligibilityResult};
use crate::zoning::{classify_zone, Setbacks, ZoneCategory};

const LEGAL_BASIS: &str = "Gov. Code § 65852.21 (SB 9)";

pub fn check_sb9_eligibility(parcel: &Parcel) -> EligibilityResult {
    let mut result = EligibilityResult::new();

    if classify_zone(&parcel.zone_code) == ZoneCategory::SingleFamily {
        result.satisfy(format!(
            "Zone '{}' is a single-family district",
            parcel.zone_code
        ));
    } else {
        result.exclude(format!(
            "Zone '{}' is not a single-family district",
            parcel.zone_code
        ));
    }

    if parcel.is_historic {
        result.exclude("Parcel is a designated historic property");
    } else {
        result.satisfy("Not a historic property");
    }

    if parcel.in_flood_zone {
        result.exclude("Parcel is in a flood hazard zone");
    }
    if parcel.fire_hazard == FireHazardZone::VeryHigh {
        result.exclude("Parcel is in a very high fire hazard severity zone");
    }
    if parcel.in_coastal_high_hazard {
        result.exclude("Parcel is in a coastal high hazard area");
    }
    if !parcel.in_flood_zone
        && parcel.fire_hazard != FireHazardZone::VeryHigh
        && !parcel.in_coastal_high_hazard
    {
        result.satisfy("Not in a disqualifying hazard zone");
    }

    // Anti-displacement: protected tenancy excludes unless the user has
    // explicitly cleared the status with a manual override.
    let override_cleared = parcel.rent_control_override == Some(RentControlOverride::No);
    let protected = parcel.effective_rent_control()
        || (parcel.recent_tenancy && !override_cleared);
    if protected {
        result.exclude("Existing rent-controlled or recently tenant-occupied housing on site");
    } else {
        result.satisfy("No protected housing on site");
        if override_cleared && (parcel.has_rent_controlled_units || parcel.recent_tenancy) {
            result.warn(
                "Protected-housing status cleared by manual override; confirm with the rent board",
            );
        }
    }

    result.resolve()
}

/// `None` means SB 9 does not apply; it is never an error. An eligible
/// parcel yields exactly 4 units, or 2 when the lot cannot support an
/// urban lot split.
pub fn evaluate_sb9(parcel: &Parcel, config: &AnalysisConfig) -> Option<DevelopmentScenario> {
    let eligibility = check_sb9_eligibility(parcel);
    if !eligibility.eligible {
        return None;
    }

    let mut notes = eligibility.warnings.clone();

    let splittable = parcel.lot_size_sqft >= 2.0 * config.sb9_min_new_lot_sqft;
    let max_units = if splittable {
        // The split need not be even, but each child lot must carry at
        // least 40% of the original area; an even split always satisfies
        // that, so it is what the note describes.
        notes.push(format!(
            "Urban lot split feasible: two lots of roughly {:.0} sqft each (minimum {:.0} sqft), two units per lot",
            parcel.lot_size_sqft / 2.0,
            config.sb9_min_new_lot_sqft
        ));
        SB9_MAX_UNITS_WITH_SPLIT
    } else {
        notes.push(format!(
            "Lot below {:.0} sqft cannot split; two units on the existing lot",
            2.0 * config.sb9_min_new_lot_sqft
        ));
        SB9_MAX_UNITS_NO_SPLIT
    };

    let parking_spaces_required = if parcel.near_transit {
        notes.push("No parking required near major transit (AB 2097)".to_string());
        0
    } else {
        // Statute caps what a locality may require at one space per unit.
        max_units
    };

    notes.push("SB 9 standards supersede base zoning height and setbacks".to_string());
    notes.push("Ministerial approval: objective standards only, no hearing".to_string());

    Some(
        DevelopmentScenario {
            scenario_name: "SB 9 Duplex / Lot Split".to_string(),
            legal_basis: LEGAL_BASIS.to_string(),
            max_units,
            max_building_sqft: f64::from(max_units) * config.assumed_unit_size_sqft,
            max_height_ft: SB9_MAX_HEIGHT_FT,
            max_stories: SB9_MAX_STORIES,
            parking_spaces_required,
            affordable_units_required: 0,
            setbacks: Setbacks::new(
                SB9_FRONT_SETBACK_FT,
                SB9_SIDE_REAR_SETBACK_FT,
                SB9_SIDE_REAR_SETBACK_FT,
            ),
            lot_coverage_pct: 50.0,
            notes,
            concessions: vec![],
            waivers: vec![],
        }
        .finalize(),
    )
}
