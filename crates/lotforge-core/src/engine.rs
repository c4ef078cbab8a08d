// ===== lotforge/crates/lotforge-core/src/engine.rs =====
//! The analysis engine: owns the static tables and runs the full
//! pipeline for one parcel. Construction happens once at startup; every
//! `analyze` call is pure over the injected data, so repeated calls with
//! the same parcel are bit-identical.

use crate::config::AnalysisConfig;
use crate::error::LfResult;
use crate::parcel::Parcel;
use crate::rhna::RhnaDirectory;
use crate::rules::aggregator::{applicable_laws, potential_incentives, select_best_scenario};
use crate::rules::{
    apply_density_bonus, evaluate_ab2011_tracks, evaluate_sb35, evaluate_sb9, resolve_base,
};
use crate::scenario::{AnalysisResult, DevelopmentScenario};
use crate::standards::StandardsTable;
use tracing::{debug, info};

pub struct Engine {
    tables: StandardsTable,
    rhna: RhnaDirectory,
    config: AnalysisConfig,
}

impl Engine {
    pub fn new(tables: StandardsTable, rhna: RhnaDirectory, config: AnalysisConfig) -> Self {
        info!(
            "Engine ready: {} zones, {} RHNA jurisdictions",
            tables.zone_count(),
            rhna.len()
        );
        Self {
            tables,
            rhna,
            config,
        }
    }

    pub fn tables(&self) -> &StandardsTable {
        &self.tables
    }

    pub fn rhna(&self) -> &RhnaDirectory {
        &self.rhna
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full multi-law analysis for one parcel.
    ///
    /// Law evaluation order is fixed (SB 9, SB 35, AB 2011) so output is
    /// deterministic; evaluators are independent and read-only over the
    /// parcel and tables. The only hard failure is a contract violation
    /// from `Parcel::validate`; statutory ineligibility and missing data
    /// degrade to notes and warnings.
    pub fn analyze(&self, parcel: &Parcel) -> LfResult<AnalysisResult> {
        parcel.validate()?;
        debug!("Analyzing parcel {} ({})", parcel.apn, parcel.zone_code);

        let mut warnings: Vec<String> = Vec::new();

        let base = resolve_base(parcel, &self.tables, &self.config);

        let mut alternatives: Vec<DevelopmentScenario> = Vec::new();

        if let Some(sb9) = evaluate_sb9(parcel, &self.config) {
            alternatives.push(sb9);
        }
        if let Some(sb35) = evaluate_sb35(parcel, None, &self.rhna, &self.tables, &self.config) {
            alternatives.push(sb35);
        }
        alternatives.extend(evaluate_ab2011_tracks(parcel, &self.tables, &self.config));

        if !self.config.skip_density_bonus {
            let mut bonus_variants: Vec<DevelopmentScenario> = Vec::new();

            // Stack the bonus on the base scenario and on candidates that
            // are not already fully affordable. SB 9 projects are too
            // small for § 65915 to change the outcome, so they are left
            // alone. The target never drops below a candidate's existing
            // affordable share, so a stacked variant cannot undercut a
            // statutory set-aside.
            for candidate in std::iter::once(&base).chain(alternatives.iter()) {
                if candidate.legal_basis.contains("SB 9") {
                    continue;
                }
                if candidate.affordable_units_required >= candidate.max_units {
                    continue;
                }
                let existing_pct = if candidate.max_units > 0 {
                    f64::from(candidate.affordable_units_required)
                        / f64::from(candidate.max_units)
                        * 100.0
                } else {
                    0.0
                };
                let target = self.config.density_bonus_target_pct.max(existing_pct);
                let variant = apply_density_bonus(candidate, parcel, target, &self.config);
                if variant.max_units > candidate.max_units {
                    bonus_variants.push(variant);
                }
            }
            alternatives.extend(bonus_variants);
        }

        let (recommended, recommendation_reason) = select_best_scenario(&base, &alternatives);

        let laws = applicable_laws(&alternatives);
        let incentives = potential_incentives(&alternatives);

        // Surface scenario-level caveats as analysis warnings too, so a
        // caller that only reads the top level still sees them.
        for s in std::iter::once(&base).chain(alternatives.iter()) {
            for note in &s.notes {
                if note.contains("verify") || note.contains("clamped") || note.contains("assuming") {
                    if !warnings.contains(note) {
                        warnings.push(note.clone());
                    }
                }
            }
        }

        info!(
            "Parcel {}: {} alternatives, recommending '{}'",
            parcel.apn,
            alternatives.len(),
            recommended.scenario_name
        );

        Ok(AnalysisResult {
            base_scenario: base,
            alternative_scenarios: alternatives,
            recommended_scenario_name: recommended.scenario_name.clone(),
            recommendation_reason,
            applicable_laws: laws,
            potential_incentives: incentives,
            warnings,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(
            StandardsTable::embedded(),
            RhnaDirectory::new(),
            AnalysisConfig::default(),
        )
    }
}
