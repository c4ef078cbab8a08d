// ===== lotforge/crates/lotforge-core/src/rules/base.rs =====
//! Base Zoning Resolver: baseline development standards from zone code,
//! tier, and overlays. Pure over the static tables; never fails. Unknown
//! zone codes degrade to fallback standards with an explanatory note.

use crate::config::AnalysisConfig;
use crate::parcel::Parcel;
use crate::scenario::DevelopmentScenario;
use crate::standards::StandardsTable;
use crate::zoning::{DevelopmentStandards, OverlayCode};
use std::str::FromStr;

pub fn resolve_base(
    parcel: &Parcel,
    tables: &StandardsTable,
    config: &AnalysisConfig,
) -> DevelopmentScenario {
    let mut notes: Vec<String> = Vec::new();

    let mut standards: DevelopmentStandards = match tables.zone(&parcel.zone_code) {
        Some(z) => z.to_development_standards(),
        None => {
            notes.push(format!(
                "Zone code '{}' not in the standards table; using fallback standards (FAR {:.1}, height {:.0} ft). Verify zoning designation.",
                parcel.zone_code, config.fallback_far, config.fallback_height_ft
            ));
            tables.fallback_standards(config)
        }
    };

    if let Some(tier) = parcel.development_tier {
        let adj = tables.tier_adjustment(tier);
        standards.max_far *= adj.far_multiplier;
        standards.max_height_ft += adj.height_bonus_ft;
        standards.max_stories += adj.story_bonus;
        notes.push(format!(
            "Development tier {}: FAR x{:.2}, height +{:.0} ft",
            tier, adj.far_multiplier, adj.height_bonus_ft
        ));
    }

    apply_overlays(parcel, tables, &mut standards, &mut notes);

    let max_units = unit_capacity(parcel, &standards, config);
    let max_building_sqft = standards.max_far * parcel.lot_size_sqft;

    let parking_spaces_required = if parcel.near_transit {
        notes.push(
            "No minimum parking: within a half mile of major transit (AB 2097)".to_string(),
        );
        0
    } else {
        (f64::from(max_units) * standards.parking_per_unit).ceil() as u32
    };

    DevelopmentScenario {
        scenario_name: "Base Zoning".to_string(),
        legal_basis: format!(
            "{} Municipal Code ({} district)",
            parcel.city, parcel.zone_code
        ),
        max_units,
        max_building_sqft,
        max_height_ft: standards.max_height_ft,
        max_stories: standards.max_stories,
        parking_spaces_required,
        affordable_units_required: 0,
        setbacks: standards.setbacks,
        lot_coverage_pct: standards.lot_coverage_pct,
        notes,
        concessions: vec![],
        waivers: vec![],
    }
    .finalize()
}

/// Units allowed by the resolved envelope: density-based districts use
/// units/acre; FAR-based districts divide the floor area envelope by the
/// assumed unit size.
pub(crate) fn unit_capacity(
    parcel: &Parcel,
    standards: &DevelopmentStandards,
    config: &AnalysisConfig,
) -> u32 {
    match standards.max_density_u_ac {
        Some(density) => (parcel.acres() * density).floor() as u32,
        None => {
            (standards.max_far * parcel.lot_size_sqft / config.assumed_unit_size_sqft).floor()
                as u32
        }
    }
}

/// Apply overlay adjustments additively. DCP and Bergamot are mutually
/// exclusive; DCP (or an explicit development tier, which implies the DCP
/// program) takes precedence and Bergamot is dropped with a note.
fn apply_overlays(
    parcel: &Parcel,
    tables: &StandardsTable,
    standards: &mut DevelopmentStandards,
    notes: &mut Vec<String>,
) {
    let mut parsed: Vec<OverlayCode> = Vec::new();
    for raw in &parcel.overlay_codes {
        match OverlayCode::from_str(raw.trim()) {
            Ok(code) => parsed.push(code),
            Err(_) => notes.push(format!(
                "Overlay code '{}' not recognized; no adjustment applied",
                raw
            )),
        }
    }

    let dcp_controls = parsed.contains(&OverlayCode::Dcp) || parcel.development_tier.is_some();

    for code in parsed {
        if code == OverlayCode::Bergamot && dcp_controls {
            notes.push(
                "Bergamot overlay ignored: mutually exclusive with the DCP tier program (DCP takes precedence)"
                    .to_string(),
            );
            continue;
        }
        let adj = tables.overlay_adjustment(code);
        standards.max_far += adj.far_bonus;
        standards.max_height_ft += adj.height_bonus_ft;
        if let Some(density) = standards.max_density_u_ac.as_mut() {
            *density += adj.density_bonus_u_ac;
        }
        if adj != Default::default() {
            notes.push(format!(
                "{} overlay: FAR +{:.2}, height +{:.0} ft",
                code, adj.far_bonus, adj.height_bonus_ft
            ));
        }
    }
}
