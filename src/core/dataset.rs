//! Classes, students and readers a session is built from: either the
//! built-in demo data or a YAML dataset file.

use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::models::arrival::Reader;
use crate::models::class::{ClassSlot, SlotState};
use crate::models::status::AttendanceStatus;
use crate::models::student::{Attendance, StudentId, StudentRecord};
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Student entry as written in a dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSeed {
    pub id: StudentId,
    pub name: String,
    pub roll_number: String,
    pub rfid_tag: String,
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    /// "HH:MM", on the session date
    #[serde(default)]
    pub check_in: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub classes: Vec<ClassSlot>,
    pub students: Vec<StudentSeed>,
    #[serde(default)]
    pub readers: Vec<Reader>,
}

fn slot(id: u32, course: &str, section: &str, room: &str, start: (u32, u32), end: (u32, u32)) -> ClassSlot {
    ClassSlot {
        id,
        course: course.to_string(),
        section: section.to_string(),
        room: room.to_string(),
        start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap_or_default(),
        end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap_or_default(),
    }
}

fn seed(id: StudentId, name: &str, roll: &str, tag: &str) -> StudentSeed {
    StudentSeed {
        id,
        name: name.to_string(),
        roll_number: roll.to_string(),
        rfid_tag: tag.to_string(),
        status: None,
        check_in: None,
    }
}

fn reader(id: &str, location: &str) -> Reader {
    Reader {
        id: id.to_string(),
        location: location.to_string(),
    }
}

impl Dataset {
    /// Built-in data used when no dataset file is configured.
    pub fn demo() -> Self {
        Self {
            classes: vec![
                slot(1, "Data Structures", "CS-3A", "Room 101", (9, 0), (10, 30)),
                slot(2, "Algorithms", "CS-3B", "Room 102", (11, 0), (12, 30)),
                slot(3, "Database Systems", "CS-2A", "Room 103", (14, 0), (15, 30)),
            ],
            students: vec![
                seed(1, "Alice Johnson", "CS2021001", "RFID001234"),
                seed(2, "Bob Smith", "CS2021002", "RFID001235"),
                seed(3, "Carol Davis", "CS2021003", "RFID001236"),
                seed(4, "David Wilson", "CS2021004", "RFID001237"),
            ],
            readers: vec![
                reader("READER_001", "Main Entrance"),
                reader("READER_002", "CS Department"),
                reader("READER_003", "Library"),
                reader("READER_004", "Cafeteria"),
            ],
        }
    }

    /// Load and validate a YAML dataset.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let ds: Dataset = serde_yaml::from_str(&content)?;
        ds.validate()?;
        Ok(ds)
    }

    /// Dataset from `path` when given, the built-in demo otherwise.
    pub fn resolve(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::demo()),
        }
    }

    /// Check id uniqueness and the status/check-in pairing of every student.
    pub fn validate(&self) -> AppResult<()> {
        let mut ids = HashSet::new();
        for s in &self.students {
            if !ids.insert(s.id) {
                return Err(AppError::Roster(format!("duplicate student id {}", s.id)));
            }
            let status = s.status.unwrap_or(AttendanceStatus::Absent);
            match (status.is_checked_in(), &s.check_in) {
                (true, None) => {
                    return Err(AppError::Roster(format!(
                        "student {} is {} but has no check_in",
                        s.id, status
                    )));
                }
                (false, Some(_)) => {
                    return Err(AppError::Roster(format!(
                        "student {} is absent but has a check_in",
                        s.id
                    )));
                }
                (_, Some(t)) if parse_time(t).is_none() => {
                    return Err(AppError::InvalidTime(t.clone()));
                }
                _ => {}
            }
        }

        let mut class_ids = HashSet::new();
        for c in &self.classes {
            if !class_ids.insert(c.id) {
                return Err(AppError::Roster(format!("duplicate class id {}", c.id)));
            }
            if c.end <= c.start {
                return Err(AppError::Roster(format!(
                    "class {} ends before it starts",
                    c.id
                )));
            }
        }
        Ok(())
    }

    pub fn class(&self, id: u32) -> AppResult<&ClassSlot> {
        self.classes
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::UnknownClass(id.to_string()))
    }

    /// The class running at `t`, if any.
    pub fn current_class(&self, t: NaiveTime) -> Option<&ClassSlot> {
        self.classes
            .iter()
            .find(|c| c.state_at(t) == SlotState::Current)
    }

    pub fn reader(&self, id: &str) -> AppResult<&Reader> {
        self.readers
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| AppError::UnknownReader(id.to_string()))
    }

    /// Fresh roster for a session on `date`, with any seeded check-ins
    /// placed on that date.
    pub fn roster_for(&self, date: NaiveDate) -> AppResult<Roster> {
        let mut records = Vec::with_capacity(self.students.len());
        for s in &self.students {
            let status = s.status.unwrap_or(AttendanceStatus::Absent);
            let attendance = match &s.check_in {
                Some(raw) if status.is_checked_in() => {
                    let t = parse_time(raw).ok_or_else(|| AppError::InvalidTime(raw.clone()))?;
                    Attendance::marked(status, date.and_time(t))
                }
                _ => Attendance::Absent,
            };
            records.push(
                StudentRecord::new(s.id, &s.name, &s.roll_number, &s.rfid_tag)
                    .with_attendance(attendance),
            );
        }
        Ok(Roster::new(records))
    }
}
