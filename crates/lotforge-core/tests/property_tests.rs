use lotforge_core::config::AnalysisConfig;
use lotforge_core::engine::Engine;
use lotforge_core::parcel::{FireHazardZone, LaborCommitments, Parcel};
use lotforge_core::rhna::RhnaDirectory;
use lotforge_core::rules::{apply_density_bonus, evaluate_sb9, resolve_base};
use lotforge_core::standards::StandardsTable;
use proptest::prelude::*;

// --- STRATEGIES ---

fn arb_zone_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("R1".to_string()),
        Just("R2".to_string()),
        Just("R3".to_string()),
        Just("R4".to_string()),
        Just("C-1".to_string()),
        Just("C-2".to_string()),
        Just("MUB".to_string()),
        Just("OP".to_string()),
        Just("M1".to_string()),
        Just("WEIRD-99".to_string()),
    ]
}

prop_compose! {
    fn arb_hazards()(
        historic in any::<bool>(),
        flood in any::<bool>(),
        coastal in any::<bool>(),
        coastal_high in any::<bool>(),
        wetlands in any::<bool>(),
        fire in prop_oneof![
            Just(FireHazardZone::None),
            Just(FireHazardZone::Moderate),
            Just(FireHazardZone::High),
            Just(FireHazardZone::VeryHigh)
        ]
    ) -> (bool, bool, bool, bool, bool, FireHazardZone) {
        (historic, flood, coastal, coastal_high, wetlands, fire)
    }
}

prop_compose! {
    fn arb_corridor_inputs()(
        row in prop_oneof![Just(None), (30.0..200.0f64).prop_map(Some)],
        wage in any::<bool>(),
        skilled in any::<bool>()
    ) -> (Option<f64>, bool, bool) {
        (row, wage, skilled)
    }
}

prop_compose! {
    fn arb_parcel()(
        zone in arb_zone_code(),
        lot in 1_000.0..200_000.0f64,
        tier in prop_oneof![Just(None), (1u8..=3).prop_map(Some)],
        hazards in arb_hazards(),
        corridor in arb_corridor_inputs(),
        transit in any::<bool>(),
        rent_controlled in any::<bool>(),
        recent_tenancy in any::<bool>(),
        bedrooms in prop_oneof![Just(None), (0u32..5).prop_map(Some)]
    ) -> Parcel {
        let (historic, flood, coastal, coastal_high, wetlands, fire) = hazards;
        let (row, wage, skilled) = corridor;
        Parcel::builder()
            .apn("prop-0001")
            .city("Santa Monica")
            .county("Los Angeles")
            .lot_size_sqft(lot)
            .zone_code(zone)
            .development_tier(tier)
            .is_historic(historic)
            .in_flood_zone(flood)
            .in_coastal_zone(coastal)
            .in_coastal_high_hazard(coastal_high)
            .has_wetlands(wetlands)
            .near_transit(transit)
            .has_rent_controlled_units(rent_controlled)
            .recent_tenancy(recent_tenancy)
            .fire_hazard(fire)
            .street_row_width_ft(row)
            .proposed_bedrooms_per_unit(bedrooms)
            .labor(LaborCommitments {
                prevailing_wage: wage,
                skilled_and_trained_workforce: skilled,
            })
            .build()
    }
}

fn test_engine() -> Engine {
    Engine::new(
        StandardsTable::embedded(),
        RhnaDirectory::new(),
        AnalysisConfig::default(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every scenario from every pathway keeps affordable <= max_units.
    #[test]
    fn prop_affordability_invariant(parcel in arb_parcel()) {
        let engine = test_engine();
        let result = engine.analyze(&parcel).unwrap();
        let all = std::iter::once(&result.base_scenario)
            .chain(result.alternative_scenarios.iter());
        for s in all {
            prop_assert!(s.affordable_units_required <= s.max_units);
        }
    }

    /// SB 9 never yields anything but 2 or 4 units.
    #[test]
    fn prop_sb9_unit_cap(parcel in arb_parcel()) {
        if let Some(s) = evaluate_sb9(&parcel, &AnalysisConfig::default()) {
            prop_assert!(s.max_units == 2 || s.max_units == 4);
        }
    }

    /// Density bonus is a non-decreasing step function of the target.
    #[test]
    fn prop_density_bonus_monotonic(
        parcel in arb_parcel(),
        lo in 0.0..100.0f64,
        hi in 0.0..100.0f64
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let config = AnalysisConfig::default();
        let base = resolve_base(&parcel, &StandardsTable::embedded(), &config);
        let a = apply_density_bonus(&base, &parcel, lo, &config);
        let b = apply_density_bonus(&base, &parcel, hi, &config);
        prop_assert!(b.max_units >= a.max_units);
    }

    /// Evaluators are pure: identical input, bit-identical output.
    #[test]
    fn prop_analysis_idempotent(parcel in arb_parcel()) {
        let engine = test_engine();
        let a = engine.analyze(&parcel).unwrap();
        let b = engine.analyze(&parcel).unwrap();
        prop_assert_eq!(a, b);
    }

    /// The engine always produces a recommendation, whatever the input.
    #[test]
    fn prop_always_recommends(parcel in arb_parcel()) {
        let result = test_engine().analyze(&parcel).unwrap();
        prop_assert!(!result.recommended_scenario_name.is_empty());
        prop_assert!(!result.recommendation_reason.is_empty());
    }
}
