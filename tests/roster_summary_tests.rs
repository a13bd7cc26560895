mod common;
use common::{at, fresh_roster, record};
use rfidattend::core::roster::Roster;
use rfidattend::core::summary::{live_arrivals, summarize};
use rfidattend::models::status::AttendanceStatus;
use rfidattend::models::student::{Attendance, StudentRecord};
use rfidattend::models::summary::AttendanceSummary;

#[test]
fn test_update_replaces_only_target_record() {
    let mut roster = fresh_roster();
    let before = roster.clone();

    assert!(roster.update(3, Attendance::Late(at("11:20"))));

    let ids: Vec<u32> = roster.get().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    for (old, new) in before.get().iter().zip(roster.get()) {
        if new.id == 3 {
            assert_eq!(new.attendance, Attendance::Late(at("11:20")));
            assert_eq!(new.name, old.name);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn test_update_unknown_id_leaves_roster_identical() {
    let mut roster = fresh_roster();
    let before = roster.clone();

    assert!(!roster.update(404, Attendance::Present(at("11:00"))));
    assert_eq!(roster, before);
}

#[test]
fn test_roster_drops_duplicate_ids() {
    let roster = Roster::new(vec![
        StudentRecord::new(1, "Alice Johnson", "CS2021001", "RFID001234"),
        StudentRecord::new(1, "Alice Again", "CS2021099", "RFID009999"),
        StudentRecord::new(2, "Bob Smith", "CS2021002", "RFID001235"),
    ]);
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.find(1).unwrap().name, "Alice Johnson");
}

#[test]
fn test_find_by_tag_is_case_insensitive() {
    let roster = fresh_roster();
    assert_eq!(roster.find_by_tag("rfid001236").unwrap().name, "Carol Davis");
    assert_eq!(roster.find_by_tag(" RFID001237 ").unwrap().id, 4);
    assert!(roster.find_by_tag("RFID001238").is_none());
}

#[test]
fn test_summary_counts_and_rate() {
    let roster = vec![
        record(1, "A", Attendance::Present(at("11:01"))),
        record(2, "B", Attendance::Late(at("11:09"))),
        record(3, "C", Attendance::Absent),
        record(4, "D", Attendance::Present(at("11:03"))),
    ];

    assert_eq!(
        summarize(&roster),
        AttendanceSummary {
            present: 2,
            late: 1,
            absent: 1,
            total: 4,
            rate: 75,
        }
    );
}

#[test]
fn test_summary_of_empty_roster_is_zero() {
    let s = summarize(&[]);
    assert_eq!(s, AttendanceSummary::default());
    assert_eq!(s.rate, 0);
}

#[test]
fn test_summary_rate_rounds_to_nearest_percent() {
    let two_of_three = vec![
        record(1, "A", Attendance::Present(at("11:00"))),
        record(2, "B", Attendance::Late(at("11:10"))),
        record(3, "C", Attendance::Absent),
    ];
    assert_eq!(summarize(&two_of_three).rate, 67);

    let one_of_three = vec![
        record(1, "A", Attendance::Present(at("11:00"))),
        record(2, "B", Attendance::Absent),
        record(3, "C", Attendance::Absent),
    ];
    assert_eq!(summarize(&one_of_three).rate, 33);

    // 12.5% rounds up
    let mut one_of_eight = vec![record(1, "A", Attendance::Late(at("11:30")))];
    for id in 2..=8 {
        one_of_eight.push(record(id, "X", Attendance::Absent));
    }
    assert_eq!(summarize(&one_of_eight).rate, 13);
}

#[test]
fn test_summary_follows_roster_changes() {
    let mut roster = fresh_roster();
    assert_eq!(summarize(roster.get()).absent, 4);

    roster.update(1, Attendance::Present(at("11:00")));
    roster.update(2, Attendance::Late(at("11:20")));

    let s = summarize(roster.get());
    assert_eq!((s.present, s.late, s.absent, s.rate), (1, 1, 2, 50));
}

#[test]
fn test_live_arrivals_most_recent_first() {
    let roster = vec![
        record(1, "A", Attendance::Present(at("11:02"))),
        record(2, "B", Attendance::Absent),
        record(3, "C", Attendance::Late(at("11:15"))),
        record(4, "D", Attendance::Present(at("11:05"))),
    ];

    let ids: Vec<u32> = live_arrivals(&roster, 10).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 4, 1]);
}

#[test]
fn test_live_arrivals_limit_and_ties() {
    let roster = vec![
        record(1, "A", Attendance::Present(at("11:00"))),
        record(2, "B", Attendance::Present(at("11:03"))),
        record(3, "C", Attendance::Present(at("11:03"))),
        record(4, "D", Attendance::Late(at("11:30"))),
    ];

    let ids: Vec<u32> = live_arrivals(&roster, 3).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 2, 3]);
    assert!(live_arrivals(&roster, 0).is_empty());
}

#[test]
fn test_attendance_pairs_status_with_check_in() {
    let t = at("11:00");
    assert_eq!(Attendance::marked(AttendanceStatus::Absent, t).check_in(), None);
    assert_eq!(Attendance::marked(AttendanceStatus::Late, t).check_in(), Some(t));
    assert_eq!(
        Attendance::marked(AttendanceStatus::Present, t).status(),
        AttendanceStatus::Present
    );
}
