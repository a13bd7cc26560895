//! Read-side projections of a roster, recomputed on every call.

use crate::models::status::AttendanceStatus;
use crate::models::student::StudentRecord;
use crate::models::summary::AttendanceSummary;

pub fn summarize(roster: &[StudentRecord]) -> AttendanceSummary {
    let mut s = AttendanceSummary {
        total: roster.len(),
        ..Default::default()
    };

    for r in roster {
        match r.status() {
            AttendanceStatus::Present => s.present += 1,
            AttendanceStatus::Late => s.late += 1,
            AttendanceStatus::Absent => s.absent += 1,
        }
    }

    s.rate = rate_percent(s.present + s.late, s.total);
    s
}

/// Whole-percent rate, half rounded up; 0 for an empty roster.
fn rate_percent(attended: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((attended * 200 + total) / (total * 2)) as u32
}

/// Checked-in students, most recent first, at most `limit`.
pub fn live_arrivals(roster: &[StudentRecord], limit: usize) -> Vec<&StudentRecord> {
    let mut arrived: Vec<&StudentRecord> =
        roster.iter().filter(|r| r.check_in().is_some()).collect();
    // stable: equal timestamps keep roster order
    arrived.sort_by(|a, b| b.check_in().cmp(&a.check_in()));
    arrived.truncate(limit);
    arrived
}
