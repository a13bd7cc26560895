//! The single authority deciding attendance transitions.
//!
//! Two entry points exist: [`Reconciler::on_arrival`] for tag reads and
//! [`Reconciler::on_manual_override`] for the teacher's Present/Late/Absent
//! buttons. Both go through [`Roster::update`]; neither touches a record
//! directly.

use crate::core::roster::Roster;
use crate::models::arrival::ArrivalEvent;
use crate::models::status::AttendanceStatus;
use crate::models::student::{Attendance, StudentId};
use chrono::{Duration, NaiveDateTime};

/// Arrivals strictly after `class_start + grace` are late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatenessPolicy {
    pub class_start: NaiveDateTime,
    pub grace: Duration,
}

impl LatenessPolicy {
    /// Negative grace counts as none; out-of-range grace saturates.
    pub fn new(class_start: NaiveDateTime, grace_minutes: i64) -> Self {
        let grace = Duration::try_minutes(grace_minutes.max(0)).unwrap_or(Duration::MAX);
        Self { class_start, grace }
    }

    /// Saturates at the last representable instant.
    pub fn threshold(&self) -> NaiveDateTime {
        self.class_start
            .checked_add_signed(self.grace)
            .unwrap_or(NaiveDateTime::MAX)
    }

    pub fn classify(&self, arrival: NaiveDateTime) -> AttendanceStatus {
        if arrival > self.threshold() {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    Arrival,
    Override,
}

/// What a reconciler call actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub student_id: StudentId,
    pub name: String,
    pub from: AttendanceStatus,
    pub to: Attendance,
    pub cause: Cause,
}

#[derive(Debug, Clone, Copy)]
pub struct Reconciler {
    policy: LatenessPolicy,
}

impl Reconciler {
    pub fn new(policy: LatenessPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LatenessPolicy {
        &self.policy
    }

    /// Apply a tag arrival. Only absent students are processed, so repeated
    /// reads for the same student are ignored.
    pub fn on_arrival(&self, roster: &mut Roster, event: &ArrivalEvent) -> Option<Transition> {
        let rec = roster.find(event.student_id)?;
        if rec.status() != AttendanceStatus::Absent {
            return None;
        }

        let name = rec.name.clone();
        let status = self.policy.classify(event.timestamp);
        let attendance = Attendance::marked(status, event.timestamp);

        roster.update(event.student_id, attendance).then(|| Transition {
            student_id: event.student_id,
            name,
            from: AttendanceStatus::Absent,
            to: attendance,
            cause: Cause::Arrival,
        })
    }

    /// Teacher override: always applied, lateness rule ignored.
    /// `now` becomes the check-in time unless the new status is absent.
    pub fn on_manual_override(
        &self,
        roster: &mut Roster,
        student_id: StudentId,
        status: AttendanceStatus,
        now: NaiveDateTime,
    ) -> Option<Transition> {
        let rec = roster.find(student_id)?;
        let from = rec.status();
        let name = rec.name.clone();
        let attendance = Attendance::marked(status, now);

        roster.update(student_id, attendance).then(|| Transition {
            student_id,
            name,
            from,
            to: attendance,
            cause: Cause::Override,
        })
    }
}
