// ===== lotforge/crates/lotforge-core/src/config.rs =====
use crate::error::LfResult;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable analysis assumptions.
///
/// Everything here is an assumption, not a statute: statutory values live
/// in `consts.rs` and the standards tables. Defaults are embedded; a JSON
/// file can override them, and explicit CLI flags override the file.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Average unit size assumed when converting FAR envelope to units.
    #[arg(long, default_value_t = 1000.0)]
    pub assumed_unit_size_sqft: f64,

    /// Fallback FAR when a zone code cannot be resolved.
    #[arg(long, default_value_t = 1.0)]
    pub fallback_far: f64,

    /// Fallback height when a zone code cannot be resolved.
    #[arg(long, default_value_t = 35.0)]
    pub fallback_height_ft: f64,

    /// Statutory density bonus cap (percent). 50 per Gov. Code § 65915 as
    /// amended by AB 2345; the AB 1287 stacked bonus is not modeled.
    #[arg(long, default_value_t = 50.0)]
    pub density_bonus_cap_pct: f64,

    /// Target affordability mix used when stacking density-bonus variants
    /// onto candidate scenarios.
    #[arg(long, default_value_t = 15.0)]
    pub density_bonus_target_pct: f64,

    /// Skip generating density-bonus variants entirely.
    #[arg(long, default_value_t = false)]
    pub skip_density_bonus: bool,

    /// Minimum child lot size for an SB 9 urban lot split.
    #[arg(long, default_value_t = 1200.0)]
    pub sb9_min_new_lot_sqft: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            assumed_unit_size_sqft: 1000.0,
            fallback_far: 1.0,
            fallback_height_ft: 35.0,
            density_bonus_cap_pct: 50.0,
            density_bonus_target_pct: 15.0,
            skip_density_bonus: false,
            sb9_min_new_lot_sqft: 1200.0,
        }
    }
}

impl AnalysisConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlay values the user explicitly passed on the command line onto
    /// this config (typically one loaded from a file).
    pub fn merge_from_cli(&mut self, cli: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(assumed_unit_size_sqft, "assumed_unit_size_sqft");
        update_if_present!(fallback_far, "fallback_far");
        update_if_present!(fallback_height_ft, "fallback_height_ft");
        update_if_present!(density_bonus_cap_pct, "density_bonus_cap_pct");
        update_if_present!(density_bonus_target_pct, "density_bonus_target_pct");
        update_if_present!(skip_density_bonus, "skip_density_bonus");
        update_if_present!(sb9_min_new_lot_sqft, "sb9_min_new_lot_sqft");
    }
}
