use lotforge_core::rules::resolve_base;

mod common;
use common::{config, r1_parcel, r3_parcel, tables};

#[test]
fn test_r1_baseline() {
    let s = resolve_base(&r1_parcel(), &tables(), &config());
    // 6000 sqft at 9 u/ac is 1 unit.
    assert_eq!(s.max_units, 1);
    assert_eq!(s.max_height_ft, 28.0);
    assert!(s.legal_basis.contains("Municipal Code"));
}

#[test]
fn test_far_based_zone_divides_envelope_by_unit_size() {
    let mut p = r1_parcel();
    p.zone_code = "C-2".into();
    p.lot_size_sqft = 10_000.0;
    let s = resolve_base(&p, &tables(), &config());
    // FAR 2.0 * 10k sqft / 1k sqft per unit.
    assert_eq!(s.max_units, 20);
    assert_eq!(s.max_building_sqft, 20_000.0);
}

#[test]
fn test_unknown_zone_never_fails() {
    let mut p = r1_parcel();
    p.zone_code = "TOTALLY-BOGUS".into();
    let s = resolve_base(&p, &tables(), &config());
    assert!(s.max_units > 0);
    assert_eq!(s.max_height_ft, 35.0);
    assert!(s.notes.iter().any(|n| n.contains("fallback")));
}

#[test]
fn test_tier_bonus_is_monotonic() {
    let mut last_far_sqft = 0.0;
    let mut last_height = 0.0;
    for tier in 1..=3u8 {
        let mut p = r3_parcel();
        p.development_tier = Some(tier);
        let s = resolve_base(&p, &tables(), &config());
        assert!(s.max_building_sqft >= last_far_sqft, "tier {}", tier);
        assert!(s.max_height_ft >= last_height, "tier {}", tier);
        last_far_sqft = s.max_building_sqft;
        last_height = s.max_height_ft;
    }
}

#[test]
fn test_overlay_adds_to_envelope() {
    let plain = resolve_base(&r3_parcel(), &tables(), &config());

    let mut p = r3_parcel();
    p.overlay_codes = vec!["AHO".into()];
    let boosted = resolve_base(&p, &tables(), &config());

    assert!(boosted.max_building_sqft > plain.max_building_sqft);
    assert!(boosted.max_units > plain.max_units);
}

#[test]
fn test_unknown_overlay_degrades_with_note() {
    let mut p = r3_parcel();
    p.overlay_codes = vec!["WAT".into()];
    let s = resolve_base(&p, &tables(), &config());
    assert!(s.notes.iter().any(|n| n.contains("not recognized")));
}

#[test]
fn test_dcp_beats_bergamot_when_both_present() {
    let mut p = r3_parcel();
    p.overlay_codes = vec!["DCP".into(), "BGT".into()];
    let s = resolve_base(&p, &tables(), &config());
    assert!(s.notes.iter().any(|n| n.contains("Bergamot overlay ignored")));

    // Only the DCP bonus applied: same result as DCP alone.
    let mut dcp_only = r3_parcel();
    dcp_only.overlay_codes = vec!["DCP".into()];
    let reference = resolve_base(&dcp_only, &tables(), &config());
    assert_eq!(s.max_units, reference.max_units);
    assert_eq!(s.max_building_sqft, reference.max_building_sqft);
}

#[test]
fn test_resolver_is_idempotent() {
    let p = r3_parcel();
    let a = resolve_base(&p, &tables(), &config());
    let b = resolve_base(&p, &tables(), &config());
    assert_eq!(a, b);
}
