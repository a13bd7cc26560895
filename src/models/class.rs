use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One scheduled class in the teacher's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSlot {
    pub id: u32,
    pub course: String,
    pub section: String,
    pub room: String,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Upcoming,
    Current,
    Completed,
}

impl SlotState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotState::Upcoming => "upcoming",
            SlotState::Current => "current",
            SlotState::Completed => "completed",
        }
    }
}

impl ClassSlot {
    pub fn state_at(&self, t: NaiveTime) -> SlotState {
        if t < self.start {
            SlotState::Upcoming
        } else if t < self.end {
            SlotState::Current
        } else {
            SlotState::Completed
        }
    }

    pub fn starts_at(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start)
    }

    /// "11:00 - 12:30"
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Serde helper for "HH:MM" times in dataset files.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        crate::utils::time::parse_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid time '{raw}', expected HH:MM")))
    }
}
