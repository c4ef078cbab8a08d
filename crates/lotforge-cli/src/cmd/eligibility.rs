use crate::reports;
use clap::Args;
use lotforge_core::config::AnalysisConfig;
use lotforge_core::engine::Engine;
use lotforge_core::rules::{check_ab2011_eligibility, check_sb35_eligibility, check_sb9_eligibility};

#[derive(Args, Debug, Clone)]
pub struct EligibilityArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,

    /// Parcel JSON file produced by the intake layer.
    #[arg(short, long)]
    pub parcel: String,

    /// Only show this law (sb9, sb35, ab2011).
    #[arg(short, long)]
    pub law: Option<String>,
}

pub fn run(args: EligibilityArgs, engine: &Engine) {
    let parcel = super::analyze::load_parcel(&args.parcel);

    let checks = [
        ("SB 9", check_sb9_eligibility(&parcel)),
        (
            "SB 35",
            check_sb35_eligibility(&parcel, engine.rhna(), engine.tables(), engine.config()),
        ),
        (
            "AB 2011",
            check_ab2011_eligibility(&parcel, engine.tables(), engine.config()),
        ),
    ];

    println!("\n🔎 === ELIGIBILITY AUDIT: {} === 🔎", parcel.apn);
    for (law, result) in checks {
        if let Some(ref filter) = args.law {
            if !law.to_lowercase().replace(' ', "").contains(&filter.to_lowercase()) {
                continue;
            }
        }
        reports::print_eligibility(law, &result);
    }
}
