// src/export/model.rs

use crate::models::class::ClassSlot;
use crate::models::student::StudentRecord;
use crate::models::summary::AttendanceSummary;
use serde::Serialize;

/// Flat roster row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RosterExport {
    pub id: u32,
    pub name: String,
    pub roll_number: String,
    pub rfid_tag: String,
    pub status: String,
    /// "YYYY-MM-DD HH:MM:SS", empty when absent
    pub check_in: String,
}

impl From<&StudentRecord> for RosterExport {
    fn from(r: &StudentRecord) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            roll_number: r.roll_number.clone(),
            rfid_tag: r.rfid_tag.clone(),
            status: r.status().as_str().to_string(),
            check_in: r
                .check_in()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Whole-session document for the JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub course: String,
    pub section: String,
    pub room: String,
    pub time: String,
    pub date: String,
    pub summary: AttendanceSummary,
    pub students: Vec<RosterExport>,
}

impl SessionExport {
    pub fn new(
        class: &ClassSlot,
        date: chrono::NaiveDate,
        summary: AttendanceSummary,
        roster: &[StudentRecord],
    ) -> Self {
        Self {
            course: class.course.clone(),
            section: class.section.clone(),
            room: class.room.clone(),
            time: class.time_range(),
            date: date.format("%Y-%m-%d").to_string(),
            summary,
            students: roster.iter().map(RosterExport::from).collect(),
        }
    }
}
