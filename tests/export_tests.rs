use predicates::str::contains;
use rcheckin::db::DbPool;
use rcheckin::export::csv::{read_records, write_records};
use rcheckin::models::{Action, NewEvent, PersonName};
use rcheckin::EventStore;
use std::fs;

mod common;
use common::{init_db_with_data, rci, setup_test_db, temp_out};

#[test]
fn test_export_csv_round_trip() {
    let mut pool = DbPool::open_in_memory().unwrap();
    let people = [
        PersonName::new("Alice", "Smith"),
        PersonName::new("Bob", "Jones"),
        PersonName::new("Zoë", "Ñúñez"),
    ];
    for p in &people {
        pool.append(NewEvent::new(p, Action::CheckIn)).unwrap();
    }
    pool.append(NewEvent::new(&people[0], Action::CheckOut))
        .unwrap();

    let events = pool.all().unwrap();
    let mut buf = Vec::new();
    write_records(&mut buf, &events).unwrap();

    let parsed = read_records(buf.as_slice()).unwrap();
    assert_eq!(parsed.len(), events.len());

    for (row, ev) in parsed.iter().zip(&events) {
        assert_eq!(row.first_name, ev.first_name);
        assert_eq!(row.last_name, ev.last_name);
        assert_eq!(row.action, ev.action);
        assert_eq!(row.parsed_timestamp().unwrap(), ev.timestamp);
    }
}

#[test]
fn test_export_csv_with_credentials() {
    let db_path = setup_test_db("export_csv_auth");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_auth", "csv");

    rci()
        .args([
            "--db", &db_path, "export", "--file", &out, "--user", "admin", "--password", "admin",
        ])
        .assert()
        .success()
        .stdout(contains("3 records"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "First Name,Last Name,Action,Timestamp");
    assert_eq!(lines.len(), 4);
    // most recent first
    assert!(lines[1].starts_with("Alice,Smith,Check-Out,"));
    assert!(lines[3].starts_with("Alice,Smith,Check-In,"));
}

#[test]
fn test_export_without_credentials_is_refused() {
    let db_path = setup_test_db("export_no_auth");
    init_db_with_data(&db_path);

    let out = temp_out("export_no_auth", "csv");

    rci()
        .args([
            "--db", &db_path, "export", "--file", &out, "--user", "admin", "--password", "nope",
        ])
        .assert()
        .failure()
        .stderr(contains("Authentication required."));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    rci()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--user", "admin",
            "--password", "admin",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(3));
    assert_eq!(rows[0]["Action"], "Check-Out");
    assert_eq!(rows[0]["First Name"], "Alice");
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    rci()
        .args([
            "--db", &db_path, "export", "--file", &out, "--user", "admin", "--password", "admin",
        ])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rci()
        .args([
            "--db", &db_path, "export", "--file", &out, "--user", "admin", "--password", "admin",
            "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("First Name"));
}
