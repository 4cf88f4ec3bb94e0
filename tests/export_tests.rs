mod common;
use common::{init_db_with_roster, rci, setup_test_db, temp_out};
use std::fs;

#[test]
fn test_export_roster_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_roster(&db_path, "export_csv");
    let out = temp_out("export_csv", "csv");

    rci()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,first_name,last_name,meal_preference,checked_in,checked_in_at,created_at")
    );
    assert_eq!(lines.count(), 3);
    assert!(content.contains("Lovelace"));
}

#[test]
fn test_export_checked_in_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_roster(&db_path, "export_json");
    let out = temp_out("export_json", "json");

    rci()
        .args(["--db", &db_path, "checkin", "3"])
        .assert()
        .success();

    rci()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--checked-in",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["first_name"], "Grace");
    assert_eq!(rows[0]["checked_in"], true);
}

#[test]
fn test_export_does_not_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_roster(&db_path, "export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    rci()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rci()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Lovelace"));
}
