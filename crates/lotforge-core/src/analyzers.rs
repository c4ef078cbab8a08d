// ===== lotforge/crates/lotforge-core/src/analyzers.rs =====
//! Ancillary analyzers: small annotators that enrich scenarios but take no
//! part in eligibility or unit-count math.

use crate::parcel::Parcel;
use crate::scenario::DevelopmentScenario;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Land-use compatibility category for a CNEL noise reading, per the
/// state noise element guidelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum NoiseCategory {
    ClearlyAcceptable,
    ConditionallyAcceptable,
    NormallyUnacceptable,
    ClearlyUnacceptable,
}

/// Classify a CNEL (dB) reading for residential use.
pub fn cnel_category(cnel_db: f64) -> NoiseCategory {
    if cnel_db < 60.0 {
        NoiseCategory::ClearlyAcceptable
    } else if cnel_db < 70.0 {
        NoiseCategory::ConditionallyAcceptable
    } else if cnel_db < 75.0 {
        NoiseCategory::NormallyUnacceptable
    } else {
        NoiseCategory::ClearlyUnacceptable
    }
}

/// Human-readable note for a CNEL reading, suitable for scenario notes.
pub fn noise_note(cnel_db: f64) -> String {
    match cnel_category(cnel_db) {
        NoiseCategory::ClearlyAcceptable => format!("CNEL {:.0} dB: clearly acceptable for residential use", cnel_db),
        NoiseCategory::ConditionallyAcceptable => format!(
            "CNEL {:.0} dB: conditionally acceptable; standard construction with noise insulation",
            cnel_db
        ),
        NoiseCategory::NormallyUnacceptable => format!(
            "CNEL {:.0} dB: normally unacceptable; detailed acoustical analysis required",
            cnel_db
        ),
        NoiseCategory::ClearlyUnacceptable => format!(
            "CNEL {:.0} dB: clearly unacceptable for new residential construction",
            cnel_db
        ),
    }
}

/// Community-benefit score for a scenario, with the contributing factors.
/// A rough desirability annotation, not an input to ranking.
pub fn community_benefits(parcel: &Parcel, scenario: &DevelopmentScenario) -> (u32, Vec<String>) {
    let mut score = 0u32;
    let mut factors = Vec::new();

    if scenario.max_units > 0 {
        let affordable_share =
            f64::from(scenario.affordable_units_required) / f64::from(scenario.max_units);
        if affordable_share >= 0.5 {
            score += 30;
            factors.push("Majority-affordable project".to_string());
        } else if affordable_share >= 0.15 {
            score += 15;
            factors.push("Significant affordable component".to_string());
        }
    }

    if parcel.near_transit {
        score += 20;
        factors.push("Transit-proximate location".to_string());
    }
    if parcel.development_tier == Some(3) {
        score += 10;
        factors.push("Highest-intensity plan tier".to_string());
    }
    if scenario.parking_spaces_required == 0 && scenario.max_units > 0 {
        score += 5;
        factors.push("No parking podium required".to_string());
    }

    (score, factors)
}

/// Estimated entitlement timeline for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEstimate {
    pub min_months: u32,
    pub max_months: u32,
    pub ministerial: bool,
}

/// Ministerial pathways skip hearings and CEQA; discretionary review does
/// not. Keyed off the scenario notes the evaluators attach.
pub fn estimate_timeline(scenario: &DevelopmentScenario) -> TimelineEstimate {
    let ministerial = scenario
        .notes
        .iter()
        .any(|n| n.to_ascii_lowercase().contains("ministerial"));

    if ministerial {
        TimelineEstimate {
            min_months: 3,
            max_months: 6,
            ministerial: true,
        }
    } else {
        TimelineEstimate {
            min_months: 12,
            max_months: 24,
            ministerial: false,
        }
    }
}
