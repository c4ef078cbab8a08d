use lotforge_core::standards::StandardsTable;
use tempfile::tempdir;

#[test]
fn test_csv_rows_override_embedded_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zones.csv");
    std::fs::write(
        &path,
        "zone_code,max_far,max_height_ft,max_stories,max_density_u_ac,parking_per_unit,lot_coverage_pct,front_ft,side_ft,rear_ft\n\
         R1,0.6,32,2,10,2.0,45,18,5,12\n\
         PDX,4.0,85,8,,0.5,90,5,0,5\n",
    )
    .unwrap();

    let table = StandardsTable::load_from_file(&path).unwrap();

    // Overridden zone.
    let r1 = table.zone("R1").unwrap();
    assert_eq!(r1.max_far, 0.6);
    assert_eq!(r1.max_height_ft, 32.0);
    assert_eq!(r1.max_density_u_ac, Some(10.0));

    // New zone with an empty density column (FAR-based).
    let pdx = table.zone("PDX").unwrap();
    assert_eq!(pdx.max_density_u_ac, None);
    assert_eq!(pdx.max_stories, 8);

    // Untouched embedded zones survive the merge.
    assert!(table.zone("C-2").is_some());
}

#[test]
fn test_malformed_rows_are_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zones.csv");
    std::fs::write(
        &path,
        "zone_code,max_far,max_height_ft,max_stories,max_density_u_ac,parking_per_unit,lot_coverage_pct,front_ft,side_ft,rear_ft\n\
         BAD,not-a-number,32,2,,1,50,10,5,10\n\
         SHORT,1.0\n\
         NEG,-2.0,32,2,,1,50,10,5,10\n\
         OK,1.2,38,3,,1.0,60,12,4,10\n",
    )
    .unwrap();

    let table = StandardsTable::load_from_file(&path).unwrap();
    assert!(table.zone("BAD").is_none());
    assert!(table.zone("SHORT").is_none());
    assert!(table.zone("NEG").is_none());
    assert!(table.zone("OK").is_some());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(StandardsTable::load_from_file("/nonexistent/zones.csv").is_err());
}
