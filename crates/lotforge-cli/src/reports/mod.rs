mod tables;

pub use self::tables::{eligibility as print_eligibility, scenarios as print_scenarios};

use lotforge_core::analyzers::{community_benefits, estimate_timeline};
use lotforge_core::parcel::Parcel;
use lotforge_core::scenario::AnalysisResult;

/// Full terminal report: scenario comparison, recommendation, incentives,
/// and warnings.
pub fn print_analysis(parcel: &Parcel, result: &AnalysisResult) {
    println!(
        "\n🏗️  === DEVELOPMENT ANALYSIS: {} ({}) === 🏗️",
        parcel.apn, parcel.zone_code
    );
    println!(
        "    {} | {}, {} County | {:.0} sqft",
        parcel.address, parcel.city, parcel.county, parcel.lot_size_sqft
    );

    let mut rows = vec![result.base_scenario.clone()];
    rows.extend(result.alternative_scenarios.iter().cloned());

    tables::scenarios(&rows, &result.recommended_scenario_name);

    println!("\n⭐ Recommended: {}", result.recommended_scenario_name);
    println!("   {}", result.recommendation_reason);

    let recommended = rows
        .iter()
        .find(|s| s.scenario_name == result.recommended_scenario_name)
        .unwrap_or(&result.base_scenario);
    let timeline = estimate_timeline(recommended);
    println!(
        "   Estimated entitlement: {}-{} months ({})",
        timeline.min_months,
        timeline.max_months,
        if timeline.ministerial {
            "ministerial"
        } else {
            "discretionary"
        }
    );
    let (score, factors) = community_benefits(parcel, recommended);
    if score > 0 {
        println!("   Community benefit score: {} ({})", score, factors.join(", "));
    }

    if !result.applicable_laws.is_empty() {
        println!("\n📜 Applicable laws:");
        for law in &result.applicable_laws {
            println!("   - {}", law);
        }
    }

    if !result.potential_incentives.is_empty() {
        println!("\n🎁 Potential incentives:");
        for incentive in &result.potential_incentives {
            println!("   - {}", incentive);
        }
    }

    if !result.warnings.is_empty() {
        println!("\n⚠️  Warnings:");
        for warning in &result.warnings {
            println!("   - {}", warning);
        }
    }
}
