#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rfidattend::core::roster::Roster;
use rfidattend::models::class::ClassSlot;
use rfidattend::models::student::{Attendance, StudentRecord};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI command with HOME pointed at an isolated temp dir, so no user
/// configuration leaks into the test.
pub fn rfa(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("rfidattend_home_{name}"));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rfidattend");
    cmd.env("HOME", &home);
    cmd
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfidattend_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path.
pub fn temp_file(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfidattend.yaml", name));
    fs::write(&path, content).expect("write temp file");
    path.to_string_lossy().to_string()
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

/// "HH:MM" or "HH:MM:SS" on the test day.
pub fn at(t: &str) -> NaiveDateTime {
    let time = NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .expect("valid time");
    day().and_time(time)
}

/// Algorithms, CS-3B, 11:00 - 12:30
pub fn algorithms() -> ClassSlot {
    ClassSlot {
        id: 2,
        course: "Algorithms".into(),
        section: "CS-3B".into(),
        room: "Room 102".into(),
        start: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
    }
}

/// Four enrolled students, all absent.
pub fn fresh_roster() -> Roster {
    Roster::new(vec![
        StudentRecord::new(1, "Alice Johnson", "CS2021001", "RFID001234"),
        StudentRecord::new(2, "Bob Smith", "CS2021002", "RFID001235"),
        StudentRecord::new(3, "Carol Davis", "CS2021003", "RFID001236"),
        StudentRecord::new(4, "David Wilson", "CS2021004", "RFID001237"),
    ])
}

pub fn record(id: u32, name: &str, attendance: Attendance) -> StudentRecord {
    StudentRecord::new(id, name, &format!("R{id:03}"), &format!("TAG{id:03}"))
        .with_attendance(attendance)
}

pub const DATASET_YAML: &str = r#"
classes:
  - id: 7
    course: Operating Systems
    section: CS-4A
    room: Lab 2
    start: "08:00"
    end: "09:30"
students:
  - id: 10
    name: Emma Brown
    roll_number: CS2021010
    rfid_tag: RFID001238
  - id: 11
    name: Frank Moore
    roll_number: CS2021011
    rfid_tag: RFID001239
    status: late
    check_in: "08:12"
readers:
  - id: READER_009
    location: Lab 2 Door
"#;
