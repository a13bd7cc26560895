mod common;
use chrono::NaiveTime;
use common::{DATASET_YAML, at, day, temp_file};
use rfidattend::config::Config;
use rfidattend::core::dataset::Dataset;
use rfidattend::errors::AppError;
use rfidattend::models::class::SlotState;
use rfidattend::models::status::AttendanceStatus;
use std::path::Path;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_demo_dataset_is_valid() {
    let ds = Dataset::demo();
    ds.validate().expect("demo validates");
    assert_eq!(ds.classes.len(), 3);
    assert_eq!(ds.students.len(), 4);
    assert_eq!(ds.reader("reader_002").unwrap().location, "CS Department");
}

#[test]
fn test_class_state_by_time() {
    let ds = Dataset::demo();
    let algo = ds.class(2).unwrap();

    assert_eq!(algo.state_at(hm(10, 59)), SlotState::Upcoming);
    assert_eq!(algo.state_at(hm(11, 0)), SlotState::Current);
    assert_eq!(algo.state_at(hm(12, 29)), SlotState::Current);
    assert_eq!(algo.state_at(hm(12, 30)), SlotState::Completed);

    assert_eq!(ds.current_class(hm(11, 30)).unwrap().course, "Algorithms");
    assert!(ds.current_class(hm(10, 45)).is_none());
}

#[test]
fn test_unknown_class_and_reader() {
    let ds = Dataset::demo();
    assert!(matches!(ds.class(9), Err(AppError::UnknownClass(_))));
    assert!(matches!(ds.reader("READER_404"), Err(AppError::UnknownReader(_))));
}

#[test]
fn test_load_dataset_with_seeded_check_in() {
    let path = temp_file("dataset_seeded", DATASET_YAML);
    let ds = Dataset::load(Path::new(&path)).expect("load dataset");

    assert_eq!(ds.class(7).unwrap().start, hm(8, 0));
    let roster = ds.roster_for(day()).unwrap();
    let frank = roster.find(11).unwrap();
    assert_eq!(frank.status(), AttendanceStatus::Late);
    assert_eq!(frank.check_in(), Some(at("08:12")));
    assert_eq!(roster.find(10).unwrap().check_in(), None);
}

#[test]
fn test_dataset_rejects_present_without_check_in() {
    let yaml = r#"
classes: []
students:
  - { id: 1, name: A, roll_number: R1, rfid_tag: T1, status: present }
"#;
    let path = temp_file("dataset_no_checkin", yaml);
    assert!(matches!(Dataset::load(Path::new(&path)), Err(AppError::Roster(_))));
}

#[test]
fn test_dataset_rejects_absent_with_check_in() {
    let yaml = r#"
classes: []
students:
  - { id: 1, name: A, roll_number: R1, rfid_tag: T1, check_in: "09:00" }
"#;
    let path = temp_file("dataset_absent_checkin", yaml);
    assert!(matches!(Dataset::load(Path::new(&path)), Err(AppError::Roster(_))));
}

#[test]
fn test_dataset_rejects_duplicate_ids_and_bad_times() {
    let dup = r#"
classes: []
students:
  - { id: 1, name: A, roll_number: R1, rfid_tag: T1 }
  - { id: 1, name: B, roll_number: R2, rfid_tag: T2 }
"#;
    let path = temp_file("dataset_dup", dup);
    assert!(matches!(Dataset::load(Path::new(&path)), Err(AppError::Roster(_))));

    let bad_class = r#"
classes:
  - { id: 1, course: X, section: S, room: R, start: "25:00", end: "26:00" }
students: []
"#;
    let path = temp_file("dataset_bad_time", bad_class);
    assert!(matches!(Dataset::load(Path::new(&path)), Err(AppError::Yaml(_))));
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    let cfg = Config::from_yaml("grace_period_minutes: 10\n").expect("config");
    assert_eq!(cfg.grace_period_minutes, 10);
    assert_eq!(cfg.tick_interval_secs, 5);
    assert!((cfg.arrival_probability - 0.3).abs() < f64::EPSILON);
    assert_eq!(cfg.live_feed_limit, 10);
    assert_eq!(cfg.separator(), '-');
    assert!(cfg.data_file.is_none());
}

#[test]
fn test_config_rejects_invalid_values() {
    assert!(matches!(
        Config::from_yaml("arrival_probability: 1.5\n"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::from_yaml("grace_period_minutes: -1\n"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::from_yaml("tick_interval_secs: 0\n"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_config_missing_keys() {
    let missing = Config::missing_keys("grace_period_minutes: 5\nseparator_char: '='\n").unwrap();
    assert!(missing.contains(&"tick_interval_secs"));
    assert!(missing.contains(&"data_file"));
    assert!(!missing.contains(&"grace_period_minutes"));
    assert!(!missing.contains(&"separator_char"));
}

#[test]
fn test_config_rejects_out_of_range_grace_and_interval() {
    assert!(matches!(
        Config::from_yaml("grace_period_minutes: 9223372036854775807\n"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::from_yaml("grace_period_minutes: 1441\n"),
        Err(AppError::Config(_))
    ));
    assert!(Config::from_yaml("grace_period_minutes: 1440\n").is_ok());
    assert!(matches!(
        Config::from_yaml("tick_interval_secs: 18446744073709551615\n"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_huge_grace_and_interval_do_not_panic() {
    use rfidattend::core::reconciler::LatenessPolicy;
    use rfidattend::core::session::{Clock, VirtualClock};
    use std::time::Duration;

    let policy = LatenessPolicy::new(at("11:00"), i64::MAX);
    assert_eq!(policy.classify(at("23:59")), AttendanceStatus::Present);

    let mut clock = VirtualClock::starting_at(at("11:00"));
    clock.wait(Duration::from_secs(u64::MAX));
    assert!(clock.now() > at("11:00"));
}
