use serde::Serialize;

/// Aggregate counts for one roster. `rate` is a whole percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub total: usize,
    pub rate: u32,
}
