use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::{data_lines, init_db, init_db_with_data, rci, setup_test_db};

#[test]
fn test_checkin_then_duplicate_is_rejected() {
    let db_path = setup_test_db("checkin_duplicate");
    init_db(&db_path);

    rci()
        .args(["--db", &db_path, "checkin", "John", "Doe"])
        .assert()
        .success()
        .stdout(contains("John Doe checked in"));

    // rule violations are reported, not treated as failures
    rci()
        .args(["--db", &db_path, "checkin", "John", "Doe"])
        .assert()
        .success()
        .stdout(contains("User is already checked in."))
        .stdout(contains("Recent records"));

    let out = rci()
        .args(["--db", &db_path, "log"])
        .output()
        .expect("failed to run log");
    assert!(out.status.success());
    assert_eq!(data_lines(&out.stdout).len(), 1);
}

#[test]
fn test_full_scenario_by_id() {
    let db_path = setup_test_db("scenario_by_id");
    init_db(&db_path);

    rci()
        .args(["--db", &db_path, "checkin", "John", "Doe"])
        .assert()
        .success();

    // roster shows John with the id of his check-in (the first record)
    let roster = rci()
        .args(["--db", &db_path, "roster"])
        .output()
        .expect("failed to run roster");
    let lines = data_lines(&roster.stdout);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('1'));
    assert!(lines[0].contains("John Doe"));

    rci()
        .args(["--db", &db_path, "checkout", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("John Doe checked out"));

    rci()
        .args(["--db", &db_path, "roster"])
        .assert()
        .success()
        .stdout(contains("Nobody is checked in."));

    // a rejected check-out re-renders the roster and the recent records
    rci()
        .args(["--db", &db_path, "checkout", "--id", "1"])
        .assert()
        .success()
        .stdout(
            contains("User is not currently checked in.")
                .and(contains("Currently checked in"))
                .and(contains("Nobody is checked in."))
                .and(contains("Recent records"))
                .and(contains("Doe")),
        );
}

#[test]
fn test_checkout_by_name_requires_checkin() {
    let db_path = setup_test_db("checkout_by_name");
    init_db(&db_path);

    rci()
        .args(["--db", &db_path, "checkout", "Jane", "Roe"])
        .assert()
        .success()
        .stdout(contains("User is not currently checked in."));

    rci()
        .args(["--db", &db_path, "status", "Jane", "Roe"])
        .assert()
        .success()
        .stdout(contains("never seen").and(contains("0 records")));
}

#[test]
fn test_checkout_unknown_id_fails() {
    let db_path = setup_test_db("checkout_unknown_id");
    init_db(&db_path);

    rci()
        .args(["--db", &db_path, "checkout", "--id", "999"])
        .assert()
        .failure()
        .stderr(contains("No record found with id 999"));
}

#[test]
fn test_blank_name_is_a_validation_error() {
    let db_path = setup_test_db("blank_name");
    init_db(&db_path);

    rci()
        .args(["--db", &db_path, "checkin", "   ", "Doe"])
        .assert()
        .failure()
        .stderr(contains("Invalid first name"));
}

#[test]
fn test_status_and_roster_after_mixed_activity() {
    let db_path = setup_test_db("status_roster_mixed");
    init_db_with_data(&db_path);

    rci()
        .args(["--db", &db_path, "status", "Alice", "Smith"])
        .assert()
        .success()
        .stdout(contains("checked out").and(contains("2 records")));

    rci()
        .args(["--db", &db_path, "status", "Bob", "Jones"])
        .assert()
        .success()
        .stdout(contains("checked in"));

    rci()
        .args(["--db", &db_path, "roster"])
        .assert()
        .success()
        .stdout(contains("Bob Jones").and(contains("Alice Smith").not()));
}

#[test]
fn test_checkin_is_audited() {
    let db_path = setup_test_db("checkin_audited");
    init_db(&db_path);

    rci()
        .args(["--db", &db_path, "checkin", "John", "Doe"])
        .assert()
        .success();

    rci()
        .args(["--db", &db_path, "audit"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("checkin")).and(contains("John Doe")));
}

#[test]
fn test_relative_db_path_is_shared_by_init_and_checkin() {
    let root = env::temp_dir().join("rcheckin_relative_db");
    fs::remove_dir_all(&root).ok();
    let home = root.join("home");
    let cwd = root.join("work");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&cwd).unwrap();

    for args in [
        vec!["--db", "att.sqlite", "--test", "init"],
        vec!["--db", "att.sqlite", "checkin", "John", "Doe"],
    ] {
        rci()
            .env("HOME", &home)
            .current_dir(&cwd)
            .args(args)
            .assert()
            .success();
    }

    assert!(home.join(".rcheckin").join("att.sqlite").exists());
    assert!(!cwd.join("att.sqlite").exists());

    // the check-in landed in the database `init` created
    rci()
        .env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "att.sqlite", "roster"])
        .assert()
        .success()
        .stdout(contains("John Doe"));

    fs::remove_dir_all(&root).ok();
}
