// ===== lotforge/crates/lotforge-core/src/scenario.rs =====
use crate::zoning::Setbacks;
use serde::{Deserialize, Serialize};

/// One buildable outcome under a specific legal pathway.
///
/// Scenarios are flat, serializable records with no internal references.
/// They are constructed once per eligible pathway and never mutated after
/// [`DevelopmentScenario::finalize`]; enhancements like a density bonus
/// produce a new scenario instead of editing in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentScenario {
    pub scenario_name: String,
    /// Statutory citation, e.g. "Gov. Code § 65852.21 (SB 9)".
    pub legal_basis: String,
    pub max_units: u32,
    pub max_building_sqft: f64,
    pub max_height_ft: f64,
    pub max_stories: u32,
    pub parking_spaces_required: u32,
    pub affordable_units_required: u32,
    pub setbacks: Setbacks,
    pub lot_coverage_pct: f64,
    /// Ordered human-readable citations, caveats, and warnings.
    #[serde(default)]
    pub notes: Vec<String>,
    /// Density-bonus concessions/incentives applied, if any.
    #[serde(default)]
    pub concessions: Vec<String>,
    #[serde(default)]
    pub waivers: Vec<String>,
}

impl DevelopmentScenario {
    /// Enforce the cross-field invariant `affordable_units_required <=
    /// max_units`. Rounding at statutory percentage boundaries can push
    /// the affordable count past the cap; that is clamped with a visible
    /// note rather than silently kept or raised as an error.
    pub fn finalize(mut self) -> Self {
        if self.affordable_units_required > self.max_units {
            self.notes.push(format!(
                "Affordable unit requirement ({}) clamped to the unit cap ({})",
                self.affordable_units_required, self.max_units
            ));
            self.affordable_units_required = self.max_units;
        }
        self
    }
}

/// Outcome of one law's eligibility checks. Ineligibility is data, not an
/// error: every failed condition is accumulated so users see the full
/// picture instead of the first failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub eligible: bool,
    /// Satisfied conditions, in check order.
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Failed conditions, in check order.
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl EligibilityResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn satisfy(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    pub fn exclude(&mut self, exclusion: impl Into<String>) {
        self.exclusions.push(exclusion.into());
    }

    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Seal the result: eligible iff no exclusion accumulated.
    pub fn resolve(mut self) -> Self {
        self.eligible = self.exclusions.is_empty();
        self
    }
}

/// Full engine output for one parcel, shaped for direct serialization by
/// the API layer, report generator, or frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub base_scenario: DevelopmentScenario,
    pub alternative_scenarios: Vec<DevelopmentScenario>,
    pub recommended_scenario_name: String,
    pub recommendation_reason: String,
    /// Names of laws that produced an eligible scenario, in fixed
    /// law-priority order (never completion order).
    pub applicable_laws: Vec<String>,
    pub potential_incentives: Vec<String>,
    pub warnings: Vec<String>,
}
