// Shared fixtures for lotforge-core integration tests.
#![allow(dead_code)]

use lotforge_core::config::AnalysisConfig;
use lotforge_core::engine::Engine;
use lotforge_core::parcel::{LaborCommitments, Parcel};
use lotforge_core::rhna::{IncomeLevel, RhnaDirectory, RhnaRequirement};
use lotforge_core::standards::StandardsTable;

/// A clean 6,000 sqft single-family lot in Santa Monica.
pub fn r1_parcel() -> Parcel {
    Parcel::builder()
        .apn("4293-001-001")
        .address("123 Ocean Park Blvd")
        .city("Santa Monica")
        .county("Los Angeles")
        .zip("90405")
        .lot_size_sqft(6000.0)
        .zone_code("R1")
        .build()
}

/// A 15,000 sqft C-2 corridor lot with a 120 ft ROW and a prevailing
/// wage commitment: AB 2011 eligible at the Mid tier.
pub fn corridor_parcel() -> Parcel {
    Parcel::builder()
        .apn("4293-002-014")
        .address("2800 Wilshire Blvd")
        .city("Santa Monica")
        .county("Los Angeles")
        .zip("90403")
        .lot_size_sqft(15_000.0)
        .zone_code("C-2")
        .street_row_width_ft(Some(120.0))
        .labor(LaborCommitments {
            prevailing_wage: true,
            skilled_and_trained_workforce: true,
        })
        .build()
}

/// A quarter-acre R3 multifamily lot.
pub fn r3_parcel() -> Parcel {
    Parcel::builder()
        .apn("4281-017-030")
        .address("1544 7th St")
        .city("Santa Monica")
        .county("Los Angeles")
        .zip("90401")
        .lot_size_sqft(10_890.0)
        .zone_code("R3")
        .build()
}

pub fn tables() -> StandardsTable {
    StandardsTable::embedded()
}

pub fn config() -> AnalysisConfig {
    AnalysisConfig::default()
}

/// Directory with one high-performing (10%) and one exempt jurisdiction.
pub fn rhna_directory() -> RhnaDirectory {
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
    dir.insert(
        "Lagging City",
        "Los Angeles",
        RhnaRequirement {
            percentage: 50.0,
            income_levels: vec![IncomeLevel::VeryLow, IncomeLevel::Low],
            is_exempt: false,
        },
    );
    dir.insert("Exempt City", "Los Angeles", RhnaRequirement::exempt());
    dir
}

pub fn engine() -> Engine {
    Engine::new(tables(), rhna_directory(), config())
}
