use serde::{Deserialize, Serialize};

/// Attendance state of a single student within one class session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
        }
    }

    /// Parse user input (case-insensitive, single-letter codes accepted).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "present" | "p" => Some(Self::Present),
            "late" | "l" => Some(Self::Late),
            "absent" | "a" => Some(Self::Absent),
            _ => None,
        }
    }

    /// True for the two statuses that carry a check-in time.
    pub fn is_checked_in(&self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
