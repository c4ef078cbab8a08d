// ===== lotforge/crates/lotforge-core/src/rules/sb35.rs =====
//! SB 35 (Gov. Code § 65913.4): streamlined ministerial approval for
//! infill housing in jurisdictions behind on their RHNA targets. SB 35
//! grants no extra density; units come from base zoning. The affordability
//! requirement (10% or 50%) comes from the injected RHNA directory.

use crate::config::AnalysisConfig;
use crate::consts::{SB35_PREVAILING_WAGE_UNIT_THRESHOLD, SB35_SKILLED_WORKFORCE_UNIT_THRESHOLD};
use crate::parcel::{FireHazardZone, Parcel};
use crate::rhna::RhnaDirectory;
use crate::rules::base::resolve_base;
use crate::scenario::{DevelopmentScenario, EligibilityResult};
use crate::standards::StandardsTable;
use crate::zoning::classify_zone;

const LEGAL_BASIS: &str = "Gov. Code § 65913.4 (SB 35)";

/// Counties where the unimplemented 20% variant of the 10% requirement
/// could apply; flagged as a warning so the gap stays visible.
const BAY_AREA_COUNTIES: [&str; 9] = [
    "Alameda",
    "Contra Costa",
    "Marin",
    "Napa",
    "San Francisco",
    "San Mateo",
    "Santa Clara",
    "Solano",
    "Sonoma",
];

pub fn check_sb35_eligibility(
    parcel: &Parcel,
    rhna: &RhnaDirectory,
    tables: &StandardsTable,
    config: &AnalysisConfig,
) -> EligibilityResult {
    let mut result = EligibilityResult::new();

    let resolved = rhna.resolve(&parcel.city, &parcel.county);
    if resolved.requirement.is_exempt {
        result.exclude(format!(
            "{} is exempt from SB 35 streamlining per current RHNA determinations",
            parcel.city
        ));
    } else {
        result.satisfy(format!(
            "{} is subject to SB 35 ({}% affordability requirement)",
            parcel.city, resolved.requirement.percentage
        ));
    }
    if resolved.defaulted {
        result.warn(format!(
            "No RHNA record for {} / {} County; assuming the conservative 50% requirement",
            parcel.city, parcel.county
        ));
    }

    if classify_zone(&parcel.zone_code).is_residential() {
        result.satisfy(format!(
            "Zone '{}' permits residential use",
            parcel.zone_code
        ));
    } else {
        result.exclude(format!(
            "Zone '{}' does not permit residential use",
            parcel.zone_code
        ));
    }

    // Site exclusions (Gov. Code § 65913.4(a)(6)).
    if parcel.is_historic {
        result.exclude("Historic property");
    }
    if parcel.has_wetlands {
        result.exclude("Wetlands on site");
    }
    if parcel.in_conservation_area {
        result.exclude("Within a conservation area");
    }
    if parcel.fire_hazard == FireHazardZone::VeryHigh {
        result.exclude("Very high fire hazard severity zone");
    }
    if parcel.near_hazardous_waste {
        result.exclude("Adjacent to a hazardous waste site");
    }
    // Conjunctive: coastal zone alone does not exclude, nor does a flood
    // zone alone; the combination does.
    if parcel.in_coastal_zone && parcel.in_flood_zone {
        result.exclude("Coastal zone parcel within a flood zone");
    }
    if result.exclusions.is_empty() {
        result.satisfy("No disqualifying site conditions");
    }

    // Labor standards are commitments the applicant can still make at
    // permit stage, so missing ones warn instead of excluding.
    let provisional_units = resolve_base(parcel, tables, config).max_units;
    if provisional_units > SB35_PREVAILING_WAGE_UNIT_THRESHOLD && !parcel.labor.prevailing_wage {
        result.warn(format!(
            "Prevailing wage commitment required above {} units; none recorded",
            SB35_PREVAILING_WAGE_UNIT_THRESHOLD
        ));
    }
    if provisional_units > SB35_SKILLED_WORKFORCE_UNIT_THRESHOLD
        && !parcel.labor.skilled_and_trained_workforce
    {
        result.warn(format!(
            "Skilled & trained workforce commitment required above {} units; none recorded",
            SB35_SKILLED_WORKFORCE_UNIT_THRESHOLD
        ));
    }

    result.resolve()
}

/// `None` when the jurisdiction is exempt or the site is excluded. The
/// optional `proposed_affordability_pct` lets an applicant offer more than
/// the statutory floor; the floor always governs when higher.
pub fn evaluate_sb35(
    parcel: &Parcel,
    proposed_affordability_pct: Option<f64>,
    rhna: &RhnaDirectory,
    tables: &StandardsTable,
    config: &AnalysisConfig,
) -> Option<DevelopmentScenario> {
    let eligibility = check_sb35_eligibility(parcel, rhna, tables, config);
    if !eligibility.eligible {
        return None;
    }

    let resolved = rhna.resolve(&parcel.city, &parcel.county);
    let required_pct = resolved.requirement.percentage;

    let mut notes = eligibility.warnings.clone();

    let mut effective_pct = required_pct;
    if let Some(proposed) = proposed_affordability_pct {
        if proposed > required_pct {
            effective_pct = proposed;
            notes.push(format!(
                "Applicant proposes {:.0}% affordable, above the {:.0}% statutory floor",
                proposed, required_pct
            ));
        } else if proposed < required_pct {
            notes.push(format!(
                "Proposed {:.0}% affordable raised to the {:.0}% statutory floor",
                proposed, required_pct
            ));
        }
    }

    if (required_pct - 10.0).abs() < f64::EPSILON
        && BAY_AREA_COUNTIES
            .iter()
            .any(|c| c.eq_ignore_ascii_case(parcel.county.trim()))
    {
        notes.push(
            "Bay Area jurisdiction: the 20% variant of the 10% requirement is not modeled; verify with HCD guidance"
                .to_string(),
        );
    }

    let base = resolve_base(parcel, tables, config);
    let max_units = base.max_units;
    let affordable_units_required =
        (f64::from(max_units) * effective_pct / 100.0).ceil() as u32;

    // SB 35 caps what a locality may require at one space per unit, and
    // AB 2097 still zeroes it out near transit.
    let parking_spaces_required = if parcel.near_transit {
        0
    } else {
        base.parking_spaces_required.min(max_units)
    };

    notes.push("Ministerial approval pathway (SB 35 streamlining)".to_string());
    notes.push(
        "Density and envelope from base zoning; SB 35 streamlines approval, it does not add density"
            .to_string(),
    );

    Some(
        DevelopmentScenario {
            scenario_name: "SB 35 Streamlined".to_string(),
            legal_basis: LEGAL_BASIS.to_string(),
            max_units,
            max_building_sqft: base.max_building_sqft,
            max_height_ft: base.max_height_ft,
            max_stories: base.max_stories,
            parking_spaces_required,
            affordable_units_required,
            setbacks: base.setbacks,
            lot_coverage_pct: base.lot_coverage_pct,
            notes,
            concessions: vec![],
            waivers: vec![],
        }
        .finalize(),
    )
}
