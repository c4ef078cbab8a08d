// ===== lotforge/crates/lotforge-core/src/rules/density_bonus.rs =====
//! State Density Bonus Law (Gov. Code § 65915): extra density, incentives,
//! and parking relief in exchange for affordable units.
//!
//! The statutory table is a monotonic step function per income level: a
//! higher affordable share never yields a smaller bonus. The affordable
//! set-aside itself is computed on the PRE-BONUS unit count; computing it
//! on the inflated count is the classic misreading this module guards
//! against with an explicit note and tests.

use crate::config::AnalysisConfig;
use crate::consts::DENSITY_BONUS_MAX_INCENTIVES;
use crate::parcel::Parcel;
use crate::rhna::IncomeLevel;
use crate::scenario::DevelopmentScenario;

/// One statutory breakpoint: at `affordable_pct` of units restricted to
/// `income_level`, the project earns `bonus_pct` extra density and
/// `incentives` concessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityBonusTier {
    pub income_level: IncomeLevel,
    pub affordable_pct: f64,
    pub bonus_pct: f64,
    pub incentives: u32,
}

const fn row(income_level: IncomeLevel, affordable_pct: f64, bonus_pct: f64, incentives: u32) -> DensityBonusTier {
    DensityBonusTier {
        income_level,
        affordable_pct,
        bonus_pct,
        incentives,
    }
}

/// § 65915 breakpoints as amended by AB 2345 (50% cap). Within each income
/// level rows are ascending in both columns.
pub const DENSITY_BONUS_TABLE: &[DensityBonusTier] = &[
    row(IncomeLevel::VeryLow, 5.0, 20.0, 1),
    row(IncomeLevel::VeryLow, 10.0, 32.5, 2),
    row(IncomeLevel::VeryLow, 15.0, 50.0, 3),
    row(IncomeLevel::Low, 10.0, 20.0, 1),
    row(IncomeLevel::Low, 17.0, 30.0, 2),
    row(IncomeLevel::Low, 24.0, 50.0, 3),
    row(IncomeLevel::Moderate, 10.0, 5.0, 1),
    row(IncomeLevel::Moderate, 20.0, 15.0, 2),
    row(IncomeLevel::Moderate, 30.0, 25.0, 3),
    row(IncomeLevel::Moderate, 40.0, 35.0, 4),
];

/// Deterministic income-mix allocation for a target affordable share:
/// Very Low absorbs the target up to its top breakpoint (15%), overflow
/// goes to Low (up to 24%), the remainder to Moderate. Chosen because it
/// reaches the largest bonus with the smallest set-aside, and documented
/// here as the tie-break among allocations with equal totals.
pub(crate) fn allocate_income_mix(target_pct: f64) -> Vec<(IncomeLevel, f64)> {
    let mut remaining = target_pct;
    let mut mix = Vec::new();

    let very_low = remaining.min(15.0);
    if very_low > 0.0 {
        mix.push((IncomeLevel::VeryLow, very_low));
        remaining -= very_low;
    }
    let low = remaining.min(24.0);
    if low > 0.0 {
        mix.push((IncomeLevel::Low, low));
        remaining -= low;
    }
    if remaining > 0.0 {
        mix.push((IncomeLevel::Moderate, remaining));
    }
    mix
}

/// Best statutory row reached by `pct` of units at `level`.
fn lookup(level: IncomeLevel, pct: f64) -> Option<DensityBonusTier> {
    DENSITY_BONUS_TABLE
        .iter()
        .filter(|t| t.income_level == level && pct >= t.affordable_pct)
        .last()
        .copied()
}

/// Bonus percentage and incentive count for a target affordability, using
/// the best row any allocated tier reaches.
pub(crate) fn resolve_bonus(target_pct: f64) -> (f64, u32) {
    let mut best_bonus = 0.0f64;
    let mut best_incentives = 0u32;
    for (level, pct) in allocate_income_mix(target_pct) {
        if let Some(tier) = lookup(level, pct) {
            if tier.bonus_pct > best_bonus {
                best_bonus = tier.bonus_pct;
            }
            best_incentives = best_incentives.max(tier.incentives);
        }
    }
    (best_bonus, best_incentives)
}

/// Produce the density-bonus variant of a candidate scenario. Never
/// mutates the input; malformed percentages clamp into [0, 100] with a
/// warning note instead of raising.
pub fn apply_density_bonus(
    base_scenario: &DevelopmentScenario,
    parcel: &Parcel,
    target_affordability_pct: f64,
    config: &AnalysisConfig,
) -> DevelopmentScenario {
    let mut notes = base_scenario.notes.clone();

    let mut pct = target_affordability_pct;
    if !pct.is_finite() {
        pct = 0.0;
    }
    if pct < 0.0 || pct > 100.0 {
        let clamped = pct.clamp(0.0, 100.0);
        notes.push(format!(
            "Target affordability {:.1}% out of range; clamped to {:.0}%",
            pct, clamped
        ));
        pct = clamped;
    }

    let (raw_bonus, incentive_count) = resolve_bonus(pct);
    let bonus_pct = raw_bonus.min(config.density_bonus_cap_pct);
    if raw_bonus > config.density_bonus_cap_pct {
        notes.push(format!(
            "Bonus capped at the statutory maximum of {:.0}%",
            config.density_bonus_cap_pct
        ));
    }

    let original_units = base_scenario.max_units;
    let max_units = (f64::from(original_units) * (1.0 + bonus_pct / 100.0)).ceil() as u32;

    // Set-aside on the ORIGINAL unit count, per § 65915(f). The epsilon
    // keeps a percentage that was itself derived from a unit ratio from
    // ceiling one unit past the intended count.
    let affordable_units_required =
        (f64::from(original_units) * pct / 100.0 - 1e-9).ceil() as u32;

    if bonus_pct > 0.0 {
        let mix = allocate_income_mix(pct)
            .iter()
            .map(|(level, share)| format!("{:.1}% {}", share, level))
            .collect::<Vec<_>>()
            .join(" + ");
        notes.push(format!("Assumed income mix: {}", mix));
        notes.push(format!(
            "Density bonus of {:.1}% for {:.0}% affordable: {} base units to {} total",
            bonus_pct, pct, original_units, max_units
        ));
        notes.push(format!(
            "Affordable set-aside computed on the {} pre-bonus units, not the bonused total",
            original_units
        ));
    } else {
        notes.push(format!(
            "{:.1}% affordable is below the lowest statutory breakpoint; no bonus density",
            pct
        ));
    }

    let mut max_height_ft = base_scenario.max_height_ft;
    let mut max_stories = base_scenario.max_stories;
    let mut setbacks = base_scenario.setbacks;
    let mut lot_coverage_pct = base_scenario.lot_coverage_pct;

    // Concessions are applied in a fixed order, capped regardless of what
    // a jurisdiction might separately allow.
    let granted = incentive_count.min(DENSITY_BONUS_MAX_INCENTIVES);
    let mut concessions = Vec::new();
    for i in 0..granted {
        match i {
            0 => {
                max_height_ft += 11.0;
                max_stories += 1;
                concessions.push("One additional story (+11 ft height)".to_string());
            }
            1 => {
                if setbacks.side_ft > 5.0 {
                    setbacks.side_ft = 5.0;
                }
                concessions.push("Side setbacks reduced to 5 ft".to_string());
            }
            2 => {
                lot_coverage_pct = (lot_coverage_pct + 10.0).min(95.0);
                concessions.push("Open-space/lot-coverage relaxation (+10 pts coverage)".to_string());
            }
            _ => {
                concessions.push("One further concession available, to be negotiated".to_string());
            }
        }
    }

    let waivers = if bonus_pct > 0.0 {
        vec![
            "Waiver of any development standard that would physically preclude the bonus units (§ 65915(e))"
                .to_string(),
        ]
    } else {
        Vec::new()
    };

    let parking_spaces_required =
        bonus_parking(parcel, base_scenario, max_units, &mut notes);

    let max_building_sqft = base_scenario.max_building_sqft * (1.0 + bonus_pct / 100.0);

    DevelopmentScenario {
        scenario_name: format!("{} + Density Bonus", base_scenario.scenario_name),
        legal_basis: "Gov. Code § 65915 (Density Bonus Law)".to_string(),
        max_units,
        max_building_sqft,
        max_height_ft,
        max_stories,
        parking_spaces_required,
        affordable_units_required,
        setbacks,
        lot_coverage_pct,
        notes,
        concessions,
        waivers,
    }
    .finalize()
}

/// § 65915(p) bedroom-count parking caps, intersected with the base
/// zoning ratio and the AB 2097 transit zero-out.
fn bonus_parking(
    parcel: &Parcel,
    base_scenario: &DevelopmentScenario,
    new_max_units: u32,
    notes: &mut Vec<String>,
) -> u32 {
    if parcel.near_transit {
        notes.push("No minimum parking: within a half mile of major transit (AB 2097)".to_string());
        return 0;
    }

    let bedrooms = parcel.proposed_bedrooms_per_unit.unwrap_or(2);
    let bedroom_cap = if bedrooms <= 1 {
        1.0
    } else if bedrooms <= 3 {
        2.0
    } else {
        2.5
    };

    let zoning_ratio = if base_scenario.max_units > 0 {
        f64::from(base_scenario.parking_spaces_required) / f64::from(base_scenario.max_units)
    } else {
        bedroom_cap
    };

    let ratio = zoning_ratio.min(bedroom_cap);
    notes.push(format!(
        "Density-bonus parking ratio: min(zoning {:.2}, bedroom cap {:.1}) = {:.2} per unit",
        zoning_ratio, bedroom_cap, ratio
    ));

    (f64::from(new_max_units) * ratio).floor() as u32
}
