// ===== lotforge/crates/lotforge-core/src/standards.rs =====
//! Tiered Standards Table: per-zone base standards, tier adjustments, and
//! overlay adjustments.
//!
//! Defaults are embedded so the engine always has a table; a CSV file can
//! override or extend individual zones at startup. After construction the
//! table is read-only; hot reloads are the caller's atomic-swap problem.

use crate::config::AnalysisConfig;
use crate::error::LfResult;
use crate::zoning::{CorridorTier, DevelopmentStandards, OverlayCode, Setbacks};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Base development standards for one zoning district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneStandards {
    pub zone_code: String,
    pub max_far: f64,
    pub max_height_ft: f64,
    pub max_stories: u32,
    /// Present for density-based districts; FAR-based districts use None.
    pub max_density_u_ac: Option<f64>,
    pub parking_per_unit: f64,
    pub lot_coverage_pct: f64,
    pub setbacks: Setbacks,
}

impl ZoneStandards {
    pub fn to_development_standards(&self) -> DevelopmentStandards {
        DevelopmentStandards {
            max_far: self.max_far,
            max_height_ft: self.max_height_ft,
            max_stories: self.max_stories,
            max_density_u_ac: self.max_density_u_ac,
            parking_per_unit: self.parking_per_unit,
            lot_coverage_pct: self.lot_coverage_pct,
            setbacks: self.setbacks,
        }
    }
}

/// Multiplicative/additive adjustments for development tiers 1-3.
/// Values are monotonically non-decreasing with tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierAdjustment {
    pub far_multiplier: f64,
    pub height_bonus_ft: f64,
    pub story_bonus: u32,
}

/// Additive adjustments contributed by an overlay district.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayAdjustment {
    pub far_bonus: f64,
    pub height_bonus_ft: f64,
    pub density_bonus_u_ac: f64,
}

/// AB 2011 state minimum floors for a corridor tier. Local zoning may be
/// higher, never lower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorridorFloor {
    pub min_density_u_ac: f64,
    pub min_height_ft: f64,
}

const TIER_ADJUSTMENTS: [TierAdjustment; 3] = [
    TierAdjustment {
        far_multiplier: 1.0,
        height_bonus_ft: 0.0,
        story_bonus: 0,
    },
    TierAdjustment {
        far_multiplier: 1.25,
        height_bonus_ft: 11.0,
        story_bonus: 1,
    },
    TierAdjustment {
        far_multiplier: 1.5,
        height_bonus_ft: 22.0,
        story_bonus: 2,
    },
];

/// Static per-zone/tier/overlay lookup tables consumed by the resolvers.
#[derive(Debug, Clone)]
pub struct StandardsTable {
    zones: FnvHashMap<String, ZoneStandards>,
}

impl StandardsTable {
    /// The embedded default table.
    pub fn embedded() -> Self {
        let mut zones = FnvHashMap::default();
        for z in default_zones() {
            zones.insert(norm_key(&z.zone_code), z);
        }
        Self { zones }
    }

    /// Embedded defaults overlaid with rows from a CSV file. Malformed
    /// rows are skipped (the table must always come up); row format:
    ///
    /// `zone_code,max_far,max_height_ft,max_stories,max_density_u_ac,parking_per_unit,lot_coverage_pct,front_ft,side_ft,rear_ft`
    ///
    /// with an empty `max_density_u_ac` for FAR-based districts.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LfResult<Self> {
        let mut table = Self::embedded();
        let file = File::open(&path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(file);

        let mut loaded = 0usize;
        for record in rdr.records().flatten() {
            if record.len() < 10 {
                continue;
            }
            let zone_code = record[0].trim().to_ascii_uppercase();
            if zone_code.is_empty() {
                continue;
            }

            let parse = |i: usize| record[i].trim().parse::<f64>().ok();
            let (Some(max_far), Some(max_height_ft)) = (parse(1), parse(2)) else {
                continue;
            };
            let Some(max_stories) = record[3].trim().parse::<u32>().ok() else {
                continue;
            };
            let max_density_u_ac = parse(4).filter(|d| *d > 0.0);
            let (Some(parking), Some(coverage)) = (parse(5), parse(6)) else {
                continue;
            };
            let (Some(front), Some(side), Some(rear)) = (parse(7), parse(8), parse(9)) else {
                continue;
            };
            if !max_far.is_finite() || max_far <= 0.0 || max_height_ft <= 0.0 {
                continue;
            }

            debug!("Standards row loaded: {}", zone_code);
            table.zones.insert(
                norm_key(&zone_code),
                ZoneStandards {
                    zone_code,
                    max_far,
                    max_height_ft,
                    max_stories,
                    max_density_u_ac,
                    parking_per_unit: parking,
                    lot_coverage_pct: coverage,
                    setbacks: Setbacks::new(front, side, rear),
                },
            );
            loaded += 1;
        }

        info!("Standards table ready: {} zones ({} from file)", table.zones.len(), loaded);
        Ok(table)
    }

    /// Exact lookup after normalization (case, whitespace, and dashes are
    /// insignificant). Unknown codes return `None`; the base resolver
    /// degrades to fallback standards with a note.
    pub fn zone(&self, zone_code: &str) -> Option<&ZoneStandards> {
        self.zones.get(&norm_key(zone_code))
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Adjustment for development tier 1-3. Out-of-range tiers are
    /// rejected earlier by `Parcel::validate`.
    pub fn tier_adjustment(&self, tier: u8) -> TierAdjustment {
        TIER_ADJUSTMENTS[usize::from(tier.clamp(1, 3)) - 1]
    }

    /// Additive adjustment for an overlay district.
    pub fn overlay_adjustment(&self, overlay: OverlayCode) -> OverlayAdjustment {
        match overlay {
            OverlayCode::Dcp => OverlayAdjustment {
                far_bonus: 0.5,
                height_bonus_ft: 15.0,
                density_bonus_u_ac: 10.0,
            },
            OverlayCode::Bergamot => OverlayAdjustment {
                far_bonus: 0.25,
                height_bonus_ft: 10.0,
                density_bonus_u_ac: 5.0,
            },
            OverlayCode::TransitPriority => OverlayAdjustment {
                far_bonus: 0.25,
                height_bonus_ft: 11.0,
                density_bonus_u_ac: 15.0,
            },
            OverlayCode::AffordableHousing => OverlayAdjustment {
                far_bonus: 0.35,
                height_bonus_ft: 11.0,
                density_bonus_u_ac: 20.0,
            },
            // Historic districts constrain rather than grant; handled by
            // the hazard flags, so no envelope bonus here.
            OverlayCode::HistoricDistrict => OverlayAdjustment::default(),
        }
    }

    /// AB 2011 corridor floors by tier.
    pub fn corridor_floor(&self, tier: CorridorTier) -> CorridorFloor {
        match tier {
            CorridorTier::Low => CorridorFloor {
                min_density_u_ac: 30.0,
                min_height_ft: 35.0,
            },
            CorridorTier::Mid => CorridorFloor {
                min_density_u_ac: 50.0,
                min_height_ft: 45.0,
            },
            CorridorTier::High => CorridorFloor {
                min_density_u_ac: 80.0,
                min_height_ft: 65.0,
            },
        }
    }

    /// Fallback standards for unresolvable zone codes (spec stance: the
    /// analysis must always produce some scenario).
    pub fn fallback_standards(&self, config: &AnalysisConfig) -> DevelopmentStandards {
        DevelopmentStandards {
            max_far: config.fallback_far,
            max_height_ft: config.fallback_height_ft,
            max_stories: 2,
            max_density_u_ac: None,
            parking_per_unit: 1.0,
            lot_coverage_pct: 50.0,
            setbacks: Setbacks::new(15.0, 5.0, 10.0),
        }
    }
}

impl Default for StandardsTable {
    fn default() -> Self {
        Self::embedded()
    }
}

fn norm_key(zone_code: &str) -> String {
    zone_code
        .trim()
        .to_ascii_uppercase()
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

fn zone(
    code: &str,
    far: f64,
    height: f64,
    stories: u32,
    density: Option<f64>,
    parking: f64,
    coverage: f64,
    setbacks: Setbacks,
) -> ZoneStandards {
    ZoneStandards {
        zone_code: code.to_string(),
        max_far: far,
        max_height_ft: height,
        max_stories: stories,
        max_density_u_ac: density,
        parking_per_unit: parking,
        lot_coverage_pct: coverage,
        setbacks,
    }
}

fn default_zones() -> Vec<ZoneStandards> {
    let res = Setbacks::new(20.0, 5.0, 15.0);
    let com = Setbacks::new(10.0, 0.0, 5.0);
    vec![
        zone("R1", 0.5, 28.0, 2, Some(9.0), 2.0, 40.0, res),
        zone("R2", 0.75, 30.0, 2, Some(29.0), 1.5, 50.0, res),
        zone("R3", 1.5, 40.0, 3, Some(44.0), 1.5, 60.0, res),
        zone("R4", 2.5, 55.0, 5, Some(61.0), 1.0, 70.0, res),
        zone("RMF", 1.75, 45.0, 4, Some(50.0), 1.5, 60.0, res),
        zone("NC", 1.5, 35.0, 3, None, 1.0, 70.0, com),
        zone("C-1", 1.5, 35.0, 3, None, 1.0, 80.0, com),
        zone("C-2", 2.0, 45.0, 4, None, 1.0, 85.0, com),
        zone("C-3", 3.0, 65.0, 6, None, 0.5, 90.0, com),
        zone("CC", 2.5, 55.0, 5, None, 0.75, 85.0, com),
        zone("OP", 2.0, 45.0, 4, None, 1.0, 75.0, com),
        zone("OC", 2.5, 55.0, 5, None, 1.0, 80.0, com),
        zone("MUB", 2.25, 50.0, 4, Some(55.0), 1.0, 80.0, com),
        zone("MX-1", 1.75, 40.0, 3, Some(40.0), 1.0, 75.0, com),
        zone("M1", 1.0, 45.0, 2, None, 1.0, 80.0, com),
    ]
}
