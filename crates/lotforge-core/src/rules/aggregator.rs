// ===== lotforge/crates/lotforge-core/src/rules/aggregator.rs =====
//! Scenario Aggregator: rank candidates and pick one recommendation.
//!
//! Ranking is max_units first, then an explicit pathway-preference table
//! (ministerial state-law pathways beat discretionary base zoning), then
//! stable first-wins input order. The table below IS the tie-break rule;
//! nothing else about candidate order matters.

use crate::scenario::DevelopmentScenario;
use itertools::Itertools;

/// Pathway preference, most preferred first. Matched by substring against
/// `legal_basis`; anything unmatched ranks after every listed entry.
pub const PATHWAY_PRIORITY: [&str; 5] = [
    "AB 2011",
    "SB 35",
    "SB 9",
    "§ 65915",
    "Municipal Code",
];

pub(crate) fn pathway_rank(legal_basis: &str) -> usize {
    PATHWAY_PRIORITY
        .iter()
        .position(|needle| legal_basis.contains(needle))
        .unwrap_or(PATHWAY_PRIORITY.len())
}

/// Pick the recommended scenario. Deterministic: identical candidate lists
/// in identical order always produce the same choice. Never fails; with no
/// alternatives the base scenario wins with a generic reason.
pub fn select_best_scenario(
    base: &DevelopmentScenario,
    alternatives: &[DevelopmentScenario],
) -> (DevelopmentScenario, String) {
    let mut best = base;
    for candidate in alternatives {
        let better_units = candidate.max_units > best.max_units;
        let tie_better_pathway = candidate.max_units == best.max_units
            && pathway_rank(&candidate.legal_basis) < pathway_rank(&best.legal_basis);
        if better_units || tie_better_pathway {
            best = candidate;
        }
    }

    let reason = if alternatives.is_empty() {
        format!(
            "Base zoning is the only available pathway: {} units under {}",
            base.max_units, base.legal_basis
        )
    } else if std::ptr::eq(best, base) {
        format!(
            "Base zoning remains the strongest option at {} units; no state pathway yields more",
            base.max_units
        )
    } else {
        let mut reason = format!(
            "{} yields the highest unit count ({} units) under {}",
            best.scenario_name, best.max_units, best.legal_basis
        );
        if best.affordable_units_required > 0 {
            reason.push_str(&format!(
                ", with {} affordable units required",
                best.affordable_units_required
            ));
        }
        if best
            .notes
            .iter()
            .any(|n| n.to_ascii_lowercase().contains("ministerial"))
        {
            reason.push_str("; ministerial approval avoids discretionary review");
        }
        reason
    };

    (best.clone(), reason)
}

/// Names of laws that produced an eligible scenario, ordered by the fixed
/// pathway priority (never by evaluation or completion order).
pub(crate) fn applicable_laws(alternatives: &[DevelopmentScenario]) -> Vec<String> {
    alternatives
        .iter()
        .map(|s| (pathway_rank(&s.legal_basis), s.legal_basis.clone()))
        .sorted()
        .map(|(_, basis)| basis)
        .dedup()
        .collect()
}

/// Concessions and waivers available across all eligible scenarios.
pub(crate) fn potential_incentives(alternatives: &[DevelopmentScenario]) -> Vec<String> {
    alternatives
        .iter()
        .flat_map(|s| s.concessions.iter().chain(s.waivers.iter()))
        .cloned()
        .unique()
        .collect()
}
