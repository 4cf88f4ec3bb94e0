use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_roster, rci, setup_test_db, write_csv};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rci()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_import_reports_counts_and_row_errors() {
    let db_path = setup_test_db("import_report");
    rci()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let csv = write_csv(
        "import_report",
        "first_name,last_name,meal\nAda,Lovelace,Vegan\n,Byron,\n",
    );

    rci()
        .args(["--db", &db_path, "import", &csv])
        .assert()
        .success()
        .stdout(contains("Successfully imported 1 attendees"))
        .stdout(contains("1 rows had errors"))
        .stdout(contains("Row 3: First name is required"));
}

#[test]
fn test_import_json_report() {
    let db_path = setup_test_db("import_json");
    let csv = write_csv("import_json", "fname,lname\nAda,Lovelace\nAlan,\n");

    let output = rci()
        .args(["--db", &db_path, "import", &csv, "--json"])
        .output()
        .expect("run import");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("import report is JSON");
    assert_eq!(report["success"], true);
    assert_eq!(report["inserted"], 1);
    assert_eq!(report["total_rows"], 2);
    assert_eq!(report["valid_rows"], 1);
    assert_eq!(report["errors"][0], "Row 3: Last name is required");
}

#[test]
fn test_import_without_valid_rows_fails() {
    let db_path = setup_test_db("import_rejected");
    let csv = write_csv("import_rejected", "first_name,last_name\n,Byron\n");

    rci()
        .args(["--db", &db_path, "import", &csv])
        .assert()
        .failure()
        .stdout(contains("Row 2: First name is required"))
        .stderr(contains("Import rejected"));
}

#[test]
fn test_import_from_stdin() {
    let db_path = setup_test_db("import_stdin");

    rci()
        .args(["--db", &db_path, "import", "-"])
        .write_stdin("first,last\nGrace,Hopper\n")
        .assert()
        .success()
        .stdout(contains("Successfully imported 1 attendees"));
}

#[test]
fn test_search_finds_by_partial_name() {
    let db_path = setup_test_db("search");
    init_db_with_roster(&db_path, "search");

    rci()
        .args(["--db", &db_path, "search", "lovel"])
        .assert()
        .success()
        .stdout(contains("Lovelace"))
        .stdout(contains("Hopper").not());

    rci()
        .args(["--db", &db_path, "search", "nobody"])
        .assert()
        .success()
        .stdout(contains("No attendees match 'nobody'"));
}

#[test]
fn test_checkin_twice_then_undo() {
    let db_path = setup_test_db("checkin_flow");
    init_db_with_roster(&db_path, "checkin_flow");

    // roster importato su DB vuoto: Ada ha id 1
    rci()
        .args(["--db", &db_path, "checkin", "1"])
        .assert()
        .success()
        .stdout(contains("Welcome, Ada! You are checked in."));

    rci()
        .args(["--db", &db_path, "checkin", "1"])
        .assert()
        .success()
        .stdout(contains("This person has already checked in"))
        .stdout(contains("Ada Lovelace"));

    rci()
        .args(["--db", &db_path, "undo", "1"])
        .assert()
        .success()
        .stdout(contains("Check-in undone for Ada Lovelace."));

    rci()
        .args(["--db", &db_path, "undo", "1"])
        .assert()
        .failure()
        .stderr(contains("is not checked in"));
}

#[test]
fn test_checkin_json_outcomes() {
    let db_path = setup_test_db("checkin_json");
    init_db_with_roster(&db_path, "checkin_json");

    let first = rci()
        .args(["--db", &db_path, "check-in", "2", "--json"])
        .output()
        .expect("run checkin");
    let first: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(first["status"], "checked_in");
    assert_eq!(first["attendee"]["last_name"], "Babbage");

    let second = rci()
        .args(["--db", &db_path, "check-in", "2", "--json"])
        .output()
        .expect("run checkin");
    assert!(second.status.success());
    let second: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(second["status"], "already_checked_in");
    assert_eq!(
        second["attendee"]["checked_in_at"],
        first["attendee"]["checked_in_at"]
    );
}

#[test]
fn test_checkin_unknown_id_fails() {
    let db_path = setup_test_db("checkin_unknown");
    init_db_with_roster(&db_path, "checkin_unknown");

    rci()
        .args(["--db", &db_path, "checkin", "999"])
        .assert()
        .failure()
        .stderr(contains("Attendee not found: #999"));

    rci()
        .args(["--db", &db_path, "undo", "999"])
        .assert()
        .failure()
        .stderr(contains("Attendee not found: #999"));
}

#[test]
fn test_show_prints_card() {
    let db_path = setup_test_db("show");
    init_db_with_roster(&db_path, "show");

    rci()
        .args(["--db", &db_path, "show", "3"])
        .assert()
        .success()
        .stdout(contains("Grace Hopper"))
        .stdout(contains("Halal"))
        .stdout(contains("not checked in"));
}

#[test]
fn test_stats_after_checkin() {
    let db_path = setup_test_db("stats");
    init_db_with_roster(&db_path, "stats");

    rci()
        .args(["--db", &db_path, "checkin", "1"])
        .assert()
        .success();

    let output = rci()
        .args(["--db", &db_path, "stats", "--json"])
        .output()
        .expect("run stats");
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["checked_in"], 1);
}

#[test]
fn test_clear_requires_confirmation() {
    let db_path = setup_test_db("clear");
    init_db_with_roster(&db_path, "clear");

    rci()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rci()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("3 removed"));

    rci()
        .args(["--db", &db_path, "search", "lovel"])
        .assert()
        .success()
        .stdout(contains("No attendees match"));

    let output = rci()
        .args(["--db", &db_path, "stats", "--json"])
        .output()
        .expect("run stats");
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 0);
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_roster(&db_path, "db_info");

    rci()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Schema version"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_bare_db_name_resolves_in_config_dir_for_every_command() {
    let name = "bare_name_rcheckin.sqlite";
    let in_config = common::test_home().join(".rcheckin").join(name);
    std::fs::remove_file(&in_config).ok();

    let workdir = tempfile::tempdir().unwrap();

    rci()
        .current_dir(workdir.path())
        .args(["--db", name, "--test", "init"])
        .assert()
        .success();

    let csv = write_csv("bare_name", common::ROSTER);
    rci()
        .current_dir(workdir.path())
        .args(["--db", name, "import", &csv])
        .assert()
        .success();

    // stesso file per init e per i comandi successivi, niente copia nella cwd
    assert!(in_config.exists());
    assert!(!workdir.path().join(name).exists());

    let output = rci()
        .current_dir(workdir.path())
        .args(["--db", name, "stats", "--json"])
        .output()
        .expect("run stats");
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 3);
}
