//! Roster store: the ordered attendance state of one class session.

use crate::models::status::AttendanceStatus;
use crate::models::student::{Attendance, StudentId, StudentRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    /// Build a roster, keeping the first record for any repeated id.
    pub fn new(records: Vec<StudentRecord>) -> Self {
        let mut out: Vec<StudentRecord> = Vec::with_capacity(records.len());
        for r in records {
            if !out.iter().any(|o| o.id == r.id) {
                out.push(r);
            }
        }
        Self { records: out }
    }

    /// Current ordered snapshot.
    pub fn get(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Replace status and check-in time of `id` in one step.
    ///
    /// Returns `false` (and leaves the roster untouched) when `id` is not enrolled.
    pub fn update(&mut self, id: StudentId, attendance: Attendance) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(rec) => {
                rec.attendance = attendance;
                true
            }
            None => false,
        }
    }

    pub fn find(&self, id: StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&StudentRecord> {
        let tag = tag.trim();
        self.records
            .iter()
            .find(|r| r.rfid_tag.eq_ignore_ascii_case(tag))
    }

    pub fn absent_ids(&self) -> Vec<StudentId> {
        self.records
            .iter()
            .filter(|r| r.status() == AttendanceStatus::Absent)
            .map(|r| r.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
