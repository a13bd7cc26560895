use super::student::StudentId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A tag read already resolved to a roster member. Consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalEvent {
    pub student_id: StudentId,
    pub timestamp: NaiveDateTime,
}

impl ArrivalEvent {
    pub fn new(student_id: StudentId, timestamp: NaiveDateTime) -> Self {
        Self {
            student_id,
            timestamp,
        }
    }
}

/// Raw read coming off an RFID reader, before roster lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRead {
    pub rfid_tag: String,
    pub reader_id: Option<String>,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    pub id: String,
    pub location: String,
}
