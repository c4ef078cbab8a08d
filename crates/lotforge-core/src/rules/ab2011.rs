// ===== lotforge/crates/lotforge-core/src/rules/ab2011.rs =====
//! AB 2011 (Gov. Code § 65912.100 et seq.): affordable housing on
//! commercial corridors, with state minimum density/height floors keyed to
//! the street's right-of-way width. Two output tracks: mixed-income and
//! 100% affordable.
//!
//! Anti-displacement here is stricter than SB 9: any protected housing on
//! site excludes unconditionally, with no manual override.

use crate::config::AnalysisConfig;
use crate::consts::{
    AB2011_MAX_ROW_WIDTH_FT, AB2011_MID_ROW_WIDTH_FT, AB2011_MIN_ROW_WIDTH_FT,
    AB2011_MIXED_INCOME_AFFORDABLE_PCT, AB2011_SKILLED_WORKFORCE_UNIT_THRESHOLD,
};
use crate::parcel::Parcel;
use crate::rules::base::resolve_base;
use crate::scenario::{DevelopmentScenario, EligibilityResult};
use crate::standards::StandardsTable;
use crate::zoning::{classify_zone, CorridorTier, StreetClass};

const LEGAL_BASIS: &str = "Gov. Code § 65912.100 (AB 2011)";

/// Corridor classification outcome, including provenance of the ROW
/// width when it had to be estimated.
#[derive(Debug, Clone, PartialEq)]
pub struct CorridorResolution {
    pub tier: Option<CorridorTier>,
    pub row_width_ft: Option<f64>,
    pub estimated: bool,
    pub warnings: Vec<String>,
}

/// Classify the fronting street into a corridor tier from its ROW width.
/// Missing widths are estimated from the street classification with a
/// data-provenance warning; tier hints from GIS only matter inside the
/// 100-150 ft band, where a Mid hint steps the default High floors down.
pub(crate) fn resolve_corridor(parcel: &Parcel) -> CorridorResolution {
    let mut warnings = Vec::new();

    let (row, estimated) = match parcel.street_row_width_ft {
        Some(w) => (Some(w), false),
        None => match parcel.street_classification {
            Some(class) => {
                let estimate = match class {
                    StreetClass::Local => 40.0,
                    StreetClass::Collector => 80.0,
                    StreetClass::Arterial => 100.0,
                    StreetClass::Boulevard => 120.0,
                };
                warnings.push(format!(
                    "Right-of-way width estimated at {:.0} ft from street classification ({}); verify with GIS",
                    estimate, class
                ));
                (Some(estimate), true)
            }
            None => (None, false),
        },
    };

    let tier = match row {
        None => None,
        Some(w) if w < AB2011_MIN_ROW_WIDTH_FT => None,
        Some(w) if w < AB2011_MID_ROW_WIDTH_FT => Some(CorridorTier::Low),
        Some(w) if w <= AB2011_MAX_ROW_WIDTH_FT => {
            if parcel.corridor_tier_hint == Some(CorridorTier::Mid) {
                Some(CorridorTier::Mid)
            } else {
                Some(CorridorTier::High)
            }
        }
        Some(_) => None,
    };

    CorridorResolution {
        tier,
        row_width_ft: row,
        estimated,
        warnings,
    }
}

pub fn check_ab2011_eligibility(
    parcel: &Parcel,
    tables: &StandardsTable,
    config: &AnalysisConfig,
) -> EligibilityResult {
    let mut result = EligibilityResult::new();

    // (a) Corridor zoning.
    if classify_zone(&parcel.zone_code).is_commercial_corridor() {
        result.satisfy(format!(
            "Zone '{}' is commercial, office, or mixed-use",
            parcel.zone_code
        ));
    } else {
        result.exclude(format!(
            "Zone '{}' is not a commercial, office, or mixed-use district",
            parcel.zone_code
        ));
    }

    // (b) Corridor classification.
    let corridor = resolve_corridor(parcel);
    for w in &corridor.warnings {
        result.warn(w.clone());
    }
    match (corridor.tier, corridor.row_width_ft) {
        (Some(tier), Some(row)) => result.satisfy(format!(
            "Eligible corridor: {:.0} ft right-of-way ({} tier floors)",
            row, tier
        )),
        (None, Some(row)) => result.exclude(format!(
            "Street right-of-way of {:.0} ft is outside the {:.0}-{:.0} ft corridor band",
            row, AB2011_MIN_ROW_WIDTH_FT, AB2011_MAX_ROW_WIDTH_FT
        )),
        (_, None) => result.exclude(
            "No right-of-way width or street classification available; cannot establish corridor eligibility",
        ),
    }

    // (c) Hard site exclusions.
    if parcel.in_coastal_high_hazard {
        result.exclude("Coastal high hazard area");
    }
    if parcel.is_prime_farmland {
        result.exclude("Prime farmland");
    }
    if parcel.has_wetlands {
        result.exclude("Wetlands on site");
    }
    if parcel.in_conservation_area {
        result.exclude("Within a conservation area");
    }
    if parcel.is_historic {
        result.exclude("Historic property");
    }
    if parcel.in_flood_zone {
        result.exclude("Flood zone");
    }

    // (d) Protected housing: unconditional, no override honored.
    if parcel.has_rent_controlled_units {
        result.exclude("Existing rent-controlled units on site");
    }
    if parcel.is_deed_restricted_affordable {
        result.exclude("Existing deed-restricted affordable units on site");
    }
    if parcel.ellis_act_withdrawal {
        result.exclude("Units withdrawn from rental under the Ellis Act");
    }
    if parcel.recent_tenancy {
        result.exclude("Housing occupied by tenants within the statutory lookback");
    }

    // (e) Labor standards: prevailing wage is a hard precondition; the
    // workforce requirement depends on the unit count the tier floors
    // would produce, so compute that first.
    if parcel.labor.prevailing_wage {
        result.satisfy("Prevailing wage commitment recorded");
    } else {
        result.exclude("Prevailing wage commitment is required and not recorded");
    }

    if let Some(tier) = corridor.tier {
        let units = corridor_unit_count(parcel, tier, tables, config);
        if units >= AB2011_SKILLED_WORKFORCE_UNIT_THRESHOLD {
            if parcel.labor.skilled_and_trained_workforce {
                result.satisfy(format!(
                    "Skilled & trained workforce commitment recorded ({} units)",
                    units
                ));
            } else {
                result.exclude(format!(
                    "Skilled & trained workforce commitment required at {} units (threshold {})",
                    units, AB2011_SKILLED_WORKFORCE_UNIT_THRESHOLD
                ));
            }
        }
    }

    result.resolve()
}

/// Units under the corridor tier floors, taken as a binding minimum over
/// local zoning: the state floor never reduces what the zone allows.
fn corridor_unit_count(
    parcel: &Parcel,
    tier: CorridorTier,
    tables: &StandardsTable,
    config: &AnalysisConfig,
) -> u32 {
    let floor = tables.corridor_floor(tier);
    let floor_units = (parcel.acres() * floor.min_density_u_ac).floor() as u32;
    let base_units = resolve_base(parcel, tables, config).max_units;
    floor_units.max(base_units)
}

/// Both AB 2011 tracks, or an empty list when ineligible. The tracks share
/// the envelope; they differ in affordability and parking.
pub fn evaluate_ab2011_tracks(
    parcel: &Parcel,
    tables: &StandardsTable,
    config: &AnalysisConfig,
) -> Vec<DevelopmentScenario> {
    let eligibility = check_ab2011_eligibility(parcel, tables, config);
    if !eligibility.eligible {
        return Vec::new();
    }

    // Eligibility guaranteed a tier.
    let corridor = resolve_corridor(parcel);
    let Some(tier) = corridor.tier else {
        return Vec::new();
    };
    let floor = tables.corridor_floor(tier);
    let base = resolve_base(parcel, tables, config);

    let max_units = corridor_unit_count(parcel, tier, tables, config);
    let max_height_ft = base.max_height_ft.max(floor.min_height_ft);
    let max_stories = base.max_stories.max((max_height_ft / 11.0).floor() as u32);
    let max_building_sqft = base
        .max_building_sqft
        .max(f64::from(max_units) * config.assumed_unit_size_sqft);

    let mut shared_notes = eligibility.warnings.clone();
    shared_notes.push(format!(
        "Corridor tier {}: state floors of {:.0} u/ac and {:.0} ft are binding minimums over local zoning",
        tier, floor.min_density_u_ac, floor.min_height_ft
    ));
    shared_notes.push("Ministerial approval pathway (AB 2011)".to_string());
    if parcel.in_coastal_zone && !parcel.in_coastal_high_hazard {
        shared_notes.push(
            "Coastal zone parcel: coordinate CDP/LCP review with the Coastal Commission"
                .to_string(),
        );
    }

    let mixed_affordable =
        (f64::from(max_units) * AB2011_MIXED_INCOME_AFFORDABLE_PCT / 100.0).ceil() as u32;

    let mixed_parking = if parcel.near_transit {
        0
    } else {
        max_units
    };

    let mut mixed_notes = shared_notes.clone();
    mixed_notes.push(format!(
        "Mixed-income track: {:.0}% of units affordable",
        AB2011_MIXED_INCOME_AFFORDABLE_PCT
    ));

    let mixed = DevelopmentScenario {
        scenario_name: "AB 2011 Mixed-Income".to_string(),
        legal_basis: LEGAL_BASIS.to_string(),
        max_units,
        max_building_sqft,
        max_height_ft,
        max_stories,
        parking_spaces_required: mixed_parking,
        affordable_units_required: mixed_affordable,
        setbacks: base.setbacks,
        lot_coverage_pct: base.lot_coverage_pct,
        notes: mixed_notes,
        concessions: vec![],
        waivers: vec![],
    }
    .finalize();

    let all_parking = if parcel.near_transit {
        0
    } else {
        (f64::from(max_units) * 0.5).ceil() as u32
    };

    let mut all_notes = shared_notes;
    all_notes.push("100% affordable track: every unit deed-restricted".to_string());
    all_notes.push("Reduced parking ratio for the 100% affordable track".to_string());

    let all_affordable = DevelopmentScenario {
        scenario_name: "AB 2011 100% Affordable".to_string(),
        legal_basis: LEGAL_BASIS.to_string(),
        max_units,
        max_building_sqft,
        max_height_ft,
        max_stories,
        parking_spaces_required: all_parking,
        affordable_units_required: max_units,
        setbacks: base.setbacks,
        lot_coverage_pct: base.lot_coverage_pct,
        notes: all_notes,
        concessions: vec![],
        waivers: vec![],
    }
    .finalize();

    vec![mixed, all_affordable]
}

/// The canonical (mixed-income) AB 2011 scenario, or `None` when the
/// parcel is ineligible.
pub fn evaluate_ab2011(
    parcel: &Parcel,
    tables: &StandardsTable,
    config: &AnalysisConfig,
) -> Option<DevelopmentScenario> {
    evaluate_ab2011_tracks(parcel, tables, config).into_iter().next()
}
