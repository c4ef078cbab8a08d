// ===== lotforge/crates/lotforge-core/src/parcel.rs =====
use crate::consts::SQFT_PER_ACRE;
use crate::error::{AnalysisError, LfResult};
use crate::zoning::{CorridorTier, StreetClass};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use typed_builder::TypedBuilder;

/// CAL FIRE hazard severity designation for the parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum FireHazardZone {
    #[default]
    None,
    Moderate,
    High,
    VeryHigh,
}

/// Manual rent-control status entered by the user. Overrides whatever the
/// external lookup resolved, except where a statute forbids overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum RentControlOverride {
    Yes,
    No,
    Unknown,
}

/// Labor commitments the applicant has made for the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborCommitments {
    #[serde(default)]
    pub prevailing_wage: bool,
    #[serde(default)]
    pub skilled_and_trained_workforce: bool,
}

/// One real-property tax lot, as resolved by the request layer.
///
/// All evaluators read from the same immutable `Parcel`; nothing in the
/// engine mutates or persists it. Optional data is explicit `Option`
/// fields, and evaluators branch on `is_some()` rather than probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    #[builder(setter(into))]
    pub apn: String,

    // Location
    #[builder(default, setter(into))]
    #[serde(default)]
    pub address: String,
    #[builder(setter(into))]
    pub city: String,
    #[builder(setter(into))]
    pub county: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub zip: String,
    #[builder(default)]
    pub latitude: Option<f64>,
    #[builder(default)]
    pub longitude: Option<f64>,

    // Lot geometry
    pub lot_size_sqft: f64,
    #[builder(default)]
    pub lot_width_ft: Option<f64>,
    #[builder(default)]
    pub lot_depth_ft: Option<f64>,

    // Zoning
    #[builder(setter(into))]
    pub zone_code: String,
    /// Development tier 1-3 where the jurisdiction uses tiered plans.
    #[builder(default)]
    pub development_tier: Option<u8>,
    /// Raw overlay codes from GIS; unknown codes degrade with a note.
    #[builder(default)]
    #[serde(default)]
    pub overlay_codes: Vec<String>,

    // Existing development
    #[builder(default)]
    #[serde(default)]
    pub existing_units: u32,
    #[builder(default)]
    #[serde(default)]
    pub existing_building_sqft: f64,
    #[builder(default)]
    pub year_built: Option<u32>,

    // Hazard / status flags
    #[builder(default)]
    #[serde(default)]
    pub is_historic: bool,
    #[builder(default)]
    #[serde(default)]
    pub in_coastal_zone: bool,
    #[builder(default)]
    #[serde(default)]
    pub in_coastal_high_hazard: bool,
    #[builder(default)]
    #[serde(default)]
    pub in_flood_zone: bool,
    #[builder(default)]
    #[serde(default)]
    pub has_wetlands: bool,
    #[builder(default)]
    #[serde(default)]
    pub in_conservation_area: bool,
    #[builder(default)]
    #[serde(default)]
    pub is_prime_farmland: bool,
    #[builder(default)]
    #[serde(default)]
    pub near_hazardous_waste: bool,
    #[builder(default)]
    #[serde(default)]
    pub fire_hazard: FireHazardZone,
    /// Within a half mile of major transit (AB 2097 parking relief).
    #[builder(default)]
    #[serde(default)]
    pub near_transit: bool,

    // Protected-housing signals
    /// Resolved flag from the external rent-control lookup.
    #[builder(default)]
    #[serde(default)]
    pub has_rent_controlled_units: bool,
    /// Manual status entered by the user; see [`resolve_rent_control_status`].
    #[builder(default)]
    pub rent_control_override: Option<RentControlOverride>,
    #[builder(default)]
    #[serde(default)]
    pub is_deed_restricted_affordable: bool,
    #[builder(default)]
    #[serde(default)]
    pub ellis_act_withdrawal: bool,
    /// Housing occupied by tenants within the statutory lookback.
    #[builder(default)]
    #[serde(default)]
    pub recent_tenancy: bool,

    // AB 2011 corridor data
    #[builder(default)]
    pub street_row_width_ft: Option<f64>,
    #[builder(default)]
    pub street_classification: Option<StreetClass>,
    /// GIS-provided tier hint for the 100-150 ft ROW band.
    #[builder(default)]
    pub corridor_tier_hint: Option<CorridorTier>,

    // Project assumptions
    #[builder(default)]
    pub proposed_bedrooms_per_unit: Option<u32>,
    #[builder(default)]
    #[serde(default)]
    pub labor: LaborCommitments,
}

impl Parcel {
    /// Contract checks for caller misuse. Statutory ineligibility is never
    /// an error; this only rejects parcels the engine cannot reason about.
    pub fn validate(&self) -> LfResult<()> {
        if self.apn.trim().is_empty() {
            return Err(AnalysisError::Validation("APN must not be blank".into()));
        }
        if !self.lot_size_sqft.is_finite() || self.lot_size_sqft <= 0.0 {
            return Err(AnalysisError::Validation(format!(
                "lot_size_sqft must be positive, got {}",
                self.lot_size_sqft
            )));
        }
        if let Some(tier) = self.development_tier {
            if !(1..=3).contains(&tier) {
                return Err(AnalysisError::Validation(format!(
                    "development_tier must be 1-3, got {}",
                    tier
                )));
            }
        }
        Ok(())
    }

    pub fn acres(&self) -> f64 {
        self.lot_size_sqft / SQFT_PER_ACRE
    }

    /// Effective rent-control status for anti-displacement checks that
    /// honor the manual override (SB 9). AB 2011 ignores the override and
    /// reads `has_rent_controlled_units` directly.
    pub fn effective_rent_control(&self) -> bool {
        resolve_rent_control_status(self.rent_control_override, Some(self.has_rent_controlled_units))
    }
}

/// Single precedence resolver for rent-control status, run before any
/// evaluator: an explicit manual `yes`/`no` wins; `unknown` or no entry
/// falls back to the externally resolved flag; neither present means no
/// rent-controlled units are assumed.
pub fn resolve_rent_control_status(
    manual: Option<RentControlOverride>,
    api_result: Option<bool>,
) -> bool {
    match manual {
        Some(RentControlOverride::Yes) => true,
        Some(RentControlOverride::No) => false,
        Some(RentControlOverride::Unknown) | None => api_result.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Parcel {
        Parcel::builder()
            .apn("4293-001-001")
            .city("Santa Monica")
            .county("Los Angeles")
            .lot_size_sqft(6000.0)
            .zone_code("R1")
            .build()
    }

    #[test]
    fn test_validate_accepts_minimal() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nonpositive_lot() {
        let mut p = minimal();
        p.lot_size_sqft = 0.0;
        assert!(matches!(
            p.validate(),
            Err(crate::error::AnalysisError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_apn() {
        let mut p = minimal();
        p.apn = "  ".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rent_control_precedence() {
        use RentControlOverride::*;
        assert!(resolve_rent_control_status(Some(Yes), Some(false)));
        assert!(!resolve_rent_control_status(Some(No), Some(true)));
        assert!(resolve_rent_control_status(Some(Unknown), Some(true)));
        assert!(!resolve_rent_control_status(None, None));
    }
}
