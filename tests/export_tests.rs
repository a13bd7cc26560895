mod common;
use common::{DATASET_YAML, algorithms, at, day, fresh_roster, rfa, temp_file, temp_out};
use rfidattend::core::notify::MemoryNotifier;
use rfidattend::core::session::AttendanceSession;
use rfidattend::export::{ExportFormat, ExportLogic};
use rfidattend::models::status::AttendanceStatus;
use std::fs;

#[test]
fn test_export_csv_from_session() {
    let out = temp_out("lib_export_csv", "csv");
    let mut session =
        AttendanceSession::open(algorithms(), day(), fresh_roster(), 5, MemoryNotifier::default());
    session.mark(1, AttendanceStatus::Present, at("11:02"));

    ExportLogic::export(&mut session, ExportFormat::Csv, &out, true).expect("export");

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,roll_number,rfid_tag,status,check_in")
    );
    assert_eq!(
        lines.next(),
        Some("1,Alice Johnson,CS2021001,RFID001234,present,2024-01-15 11:02:00")
    );
    assert_eq!(lines.next(), Some("2,Bob Smith,CS2021002,RFID001235,absent,"));
    assert_eq!(content.lines().count(), 5);
    assert_eq!(session.log().operations().last(), Some(&"export"));
}

#[test]
fn test_export_json_from_session() {
    let out = temp_out("lib_export_json", "json");
    let mut session =
        AttendanceSession::open(algorithms(), day(), fresh_roster(), 5, MemoryNotifier::default());
    session.mark(2, AttendanceStatus::Late, at("11:20"));

    ExportLogic::export(&mut session, ExportFormat::Json, &out, true).expect("export");

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["course"], "Algorithms");
    assert_eq!(doc["date"], "2024-01-15");
    assert_eq!(doc["summary"]["late"], 1);
    assert_eq!(doc["summary"]["rate"], 25);
    assert_eq!(doc["students"].as_array().unwrap().len(), 4);
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let out = temp_out("cli_export_no_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    rfa("export_no_overwrite")
        .args([
            "session", "--class", "2", "--date", "2024-01-15", "--export", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_cli_export_csv_with_force() {
    let out = temp_out("cli_export_csv", "csv");
    fs::write(&out, "old").unwrap();

    rfa("export_csv")
        .args([
            "session", "--class", "2", "--date", "2024-01-15", "--mark", "3=late", "--export",
            &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Carol Davis"));
    assert!(content.contains("late"));
    assert!(!content.contains("old"));
}

#[test]
fn test_cli_export_json_with_dataset() {
    let data = temp_file("cli_export_dataset", DATASET_YAML);
    let out = temp_out("cli_export_dataset", "json");

    rfa("export_json_dataset")
        .args([
            "--data", &data, "session", "--class", "7", "--date", "2024-01-15", "--export", &out,
            "--format", "json",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("Operating Systems"));
    assert!(content.contains("Frank Moore"));
    assert!(content.contains("2024-01-15 08:12:00"));
}

#[test]
fn test_cli_export_overwrite_confirmed_names_session() {
    let out = temp_out("cli_export_confirmed", "csv");
    fs::write(&out, "old roster").unwrap();

    rfa("export_confirmed")
        .args([
            "session", "--class", "2", "--date", "2024-01-15", "--export", &out,
        ])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Algorithms (CS-3B) on 2024-01-15"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("id,name,roll_number,rfid_tag,status,check_in"));
}
