// ===== lotforge/crates/lotforge-core/src/rhna.rs =====
//! RHNA performance data, injected as plain data before analysis runs.
//!
//! The engine never talks to the RHNA service; the caller builds a
//! [`RhnaDirectory`] once at startup and passes it by reference. A missing
//! jurisdiction resolves to the conservative 50% requirement with a
//! warning instead of failing the analysis.

use crate::consts::RHNA_FALLBACK_AFFORDABLE_PCT;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Affordability income tiers (fractions of Area Median Income).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, Serialize, Deserialize)]
pub enum IncomeLevel {
    #[strum(serialize = "Very Low Income")]
    VeryLow,
    #[strum(serialize = "Low Income")]
    Low,
    #[strum(serialize = "Moderate Income")]
    Moderate,
}

/// A jurisdiction's SB 35 affordability requirement derived from its RHNA
/// progress: 10% (on track for above-moderate), 50% (behind), or exempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RhnaRequirement {
    pub percentage: f64,
    #[serde(default)]
    pub income_levels: Vec<IncomeLevel>,
    #[serde(default)]
    pub is_exempt: bool,
}

impl RhnaRequirement {
    pub fn exempt() -> Self {
        Self {
            percentage: 0.0,
            income_levels: vec![],
            is_exempt: true,
        }
    }

    pub fn conservative_fallback() -> Self {
        Self {
            percentage: RHNA_FALLBACK_AFFORDABLE_PCT,
            income_levels: vec![IncomeLevel::VeryLow, IncomeLevel::Low],
            is_exempt: false,
        }
    }
}

/// Lookup outcome, carrying whether the fallback was used so the caller
/// can surface a data-provenance warning.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRhna {
    pub requirement: RhnaRequirement,
    pub defaulted: bool,
}

/// Read-only map from (jurisdiction, county) to RHNA requirement,
/// constructed once at process start from whatever data source the caller
/// uses (CSV ingestion is not this crate's concern).
#[derive(Debug, Clone, Default)]
pub struct RhnaDirectory {
    entries: FnvHashMap<String, RhnaRequirement>,
}

impl RhnaDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        jurisdiction: &str,
        county: &str,
        requirement: RhnaRequirement,
    ) -> &mut Self {
        self.entries.insert(key(jurisdiction, county), requirement);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, jurisdiction: &str, county: &str) -> ResolvedRhna {
        match self.entries.get(&key(jurisdiction, county)) {
            Some(req) => ResolvedRhna {
                requirement: req.clone(),
                defaulted: false,
            },
            None => ResolvedRhna {
                requirement: RhnaRequirement::conservative_fallback(),
                defaulted: true,
            },
        }
    }
}

fn key(jurisdiction: &str, county: &str) -> String {
    format!(
        "{}|{}",
        jurisdiction.trim().to_ascii_lowercase(),
        county.trim().to_ascii_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_jurisdiction() {
        let mut dir = RhnaDirectory::new();
        dir.insert(
            "Santa Monica",
            "Los Angeles",
            RhnaRequirement {
                percentage: 10.0,
                income_levels: vec![IncomeLevel::Low],
                is_exempt: false,
            },
        );
        let resolved = dir.resolve("santa monica", "los angeles");
        assert!(!resolved.defaulted);
        assert_eq!(resolved.requirement.percentage, 10.0);
    }

    #[test]
    fn test_missing_jurisdiction_falls_back_conservatively() {
        let dir = RhnaDirectory::new();
        let resolved = dir.resolve("Nowhere", "Nowhere County");
        assert!(resolved.defaulted);
        assert_eq!(resolved.requirement.percentage, 50.0);
        assert!(!resolved.requirement.is_exempt);
    }
}
