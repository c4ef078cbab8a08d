use assert_cmd::Command;
use predicates::prelude::*;

fn write_parcel(dir: &tempfile::TempDir, name: &str, json: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

const R1_PARCEL: &str = r#"{
    "apn": "4293-001-001",
    "city": "Santa Monica",
    "county": "Los Angeles",
    "lotSizeSqft": 6000.0,
    "zoneCode": "R1"
}"#;

#[test]
fn test_analyze_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let parcel = write_parcel(&dir, "parcel.json", R1_PARCEL);

    Command::cargo_bin("lotforge")
        .unwrap()
        .args(["analyze", "--parcel", &parcel, "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recommendedScenarioName"))
        .stdout(predicate::str::contains("SB 9"));
}

#[test]
fn test_analyze_table_output() {
    let dir = tempfile::tempdir().unwrap();
    let parcel = write_parcel(&dir, "parcel.json", R1_PARCEL);

    Command::cargo_bin("lotforge")
        .unwrap()
        .args(["analyze", "--parcel", &parcel])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended"));
}

#[test]
fn test_eligibility_report() {
    let dir = tempfile::tempdir().unwrap();
    let parcel = write_parcel(&dir, "parcel.json", R1_PARCEL);

    Command::cargo_bin("lotforge")
        .unwrap()
        .args(["eligibility", "--parcel", &parcel])
        .assert()
        .success()
        .stdout(predicate::str::contains("ELIGIBILITY AUDIT"))
        .stdout(predicate::str::contains("SB 9"));
}

#[test]
fn test_invalid_parcel_fails() {
    let dir = tempfile::tempdir().unwrap();
    let parcel = write_parcel(
        &dir,
        "bad.json",
        r#"{
            "apn": "0000-000-000",
            "city": "Nowhere",
            "county": "Nowhere",
            "lotSizeSqft": -5.0,
            "zoneCode": "R1"
        }"#,
    );

    Command::cargo_bin("lotforge")
        .unwrap()
        .args(["analyze", "--parcel", &parcel, "--json"])
        .assert()
        .failure();
}
