use super::status::AttendanceStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

pub type StudentId = u32;

/// Status and check-in time, kept together so they can only change as a unit.
///
/// An absent student has no check-in time; a present or late one always has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "check_in", rename_all = "lowercase")]
pub enum Attendance {
    Absent,
    Present(NaiveDateTime),
    Late(NaiveDateTime),
}

impl Attendance {
    /// Build the attendance for `status`, using `at` as check-in time when one is needed.
    pub fn marked(status: AttendanceStatus, at: NaiveDateTime) -> Self {
        match status {
            AttendanceStatus::Present => Attendance::Present(at),
            AttendanceStatus::Late => Attendance::Late(at),
            AttendanceStatus::Absent => Attendance::Absent,
        }
    }

    pub fn status(&self) -> AttendanceStatus {
        match self {
            Attendance::Absent => AttendanceStatus::Absent,
            Attendance::Present(_) => AttendanceStatus::Present,
            Attendance::Late(_) => AttendanceStatus::Late,
        }
    }

    pub fn check_in(&self) -> Option<NaiveDateTime> {
        match self {
            Attendance::Absent => None,
            Attendance::Present(t) | Attendance::Late(t) => Some(*t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub roll_number: String,
    pub rfid_tag: String,
    pub attendance: Attendance,
}

impl StudentRecord {
    /// A freshly enrolled student, not yet checked in.
    pub fn new(id: StudentId, name: &str, roll_number: &str, rfid_tag: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            roll_number: roll_number.to_string(),
            rfid_tag: rfid_tag.to_string(),
            attendance: Attendance::Absent,
        }
    }

    pub fn with_attendance(mut self, attendance: Attendance) -> Self {
        self.attendance = attendance;
        self
    }

    pub fn status(&self) -> AttendanceStatus {
        self.attendance.status()
    }

    pub fn check_in(&self) -> Option<NaiveDateTime> {
        self.attendance.check_in()
    }

    pub fn check_in_str(&self) -> String {
        self.check_in()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }

    /// Initials shown next to the name in the live feed ("Alice Johnson" → "AJ").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect()
    }
}
