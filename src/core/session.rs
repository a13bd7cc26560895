//! One open attendance session: roster, reconciler, feed cancellation,
//! notifications and the internal log.

use crate::core::log::SessionLog;
use crate::core::notify::{Level, Notifier};
use crate::core::reconciler::{Cause, LatenessPolicy, Reconciler, Transition};
use crate::core::roster::Roster;
use crate::core::source::{ArrivalSource, CancelToken};
use crate::core::summary;
use crate::models::arrival::{ArrivalEvent, TagRead};
use crate::models::class::ClassSlot;
use crate::models::status::AttendanceStatus;
use crate::models::student::{StudentId, StudentRecord};
use crate::models::summary::AttendanceSummary;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::time::Duration;

/// Time seen by a running session.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    /// Block (or pretend to) for one tick interval.
    fn wait(&mut self, interval: Duration);
}

/// Wall clock; `wait` really sleeps.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn wait(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Simulated clock: `wait` advances time instantly.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    now: NaiveDateTime,
}

impl VirtualClock {
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Move forward by `by`, stopping at the last representable instant.
    pub fn advance(&mut self, by: chrono::Duration) {
        self.now = self.now.checked_add_signed(by).unwrap_or(NaiveDateTime::MAX);
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn wait(&mut self, interval: Duration) {
        self.advance(chrono::Duration::from_std(interval).unwrap_or(chrono::Duration::MAX));
    }
}

/// Result of feeding one RFID tag read to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Tag matched and the student was checked in.
    CheckedIn(Transition),
    /// Tag matched a student who was already present or late.
    AlreadyCheckedIn(StudentId),
    UnknownTag,
    /// Session closed, read discarded.
    Closed,
}

pub struct AttendanceSession<N: Notifier> {
    class: ClassSlot,
    date: NaiveDate,
    roster: Roster,
    reconciler: Reconciler,
    cancel: CancelToken,
    notifier: N,
    log: SessionLog,
}

impl<N: Notifier> AttendanceSession<N> {
    /// Open attendance for `class` on `date`. Lateness is measured from the
    /// scheduled class start plus `grace_minutes`.
    pub fn open(
        class: ClassSlot,
        date: NaiveDate,
        roster: Roster,
        grace_minutes: i64,
        notifier: N,
    ) -> Self {
        let policy = LatenessPolicy::new(class.starts_at(date), grace_minutes);
        let mut log = SessionLog::new();
        log.record(
            "open",
            &class.section,
            &format!(
                "{} {} {} ({} students, grace {} min)",
                class.course,
                date,
                class.time_range(),
                roster.len(),
                grace_minutes
            ),
        );

        Self {
            class,
            date,
            roster,
            reconciler: Reconciler::new(policy),
            cancel: CancelToken::new(),
            notifier,
            log,
        }
    }

    pub fn class(&self) -> &ClassSlot {
        &self.class
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn records(&self) -> &[StudentRecord] {
        self.roster.get()
    }

    pub fn policy(&self) -> &LatenessPolicy {
        self.reconciler.policy()
    }

    pub fn summary(&self) -> AttendanceSummary {
        summary::summarize(self.roster.get())
    }

    pub fn live_arrivals(&self, limit: usize) -> Vec<&StudentRecord> {
        summary::live_arrivals(self.roster.get(), limit)
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Append a line to the internal log on behalf of a collaborator.
    pub fn note(&mut self, operation: &str, target: &str, message: &str) {
        self.log.record(operation, target, message);
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handle the feed can use to observe (or trigger) closing.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Close the session; the feed is cancelled and later calls are no-ops.
    pub fn close(&mut self) {
        if self.is_closed() {
            return;
        }
        self.cancel.cancel();
        let s = self.summary();
        self.log.record(
            "close",
            &self.class.section,
            &format!(
                "present={} late={} absent={} rate={}%",
                s.present, s.late, s.absent, s.rate
            ),
        );
    }

    /// Poll the feed once and apply what it yields.
    pub fn tick<S: ArrivalSource + ?Sized>(
        &mut self,
        source: &mut S,
        now: NaiveDateTime,
    ) -> Option<Transition> {
        if self.is_closed() {
            return None;
        }

        let event = source.next_tick(&self.roster, now)?;

        // closed while the event was in flight
        if self.is_closed() {
            self.log.record(
                "dropped",
                &event.student_id.to_string(),
                "arrival received after session close",
            );
            return None;
        }

        self.arrive(&event)
    }

    /// Event-driven entry point.
    pub fn arrive(&mut self, event: &ArrivalEvent) -> Option<Transition> {
        if self.is_closed() {
            return None;
        }
        let t = self.reconciler.on_arrival(&mut self.roster, event)?;
        self.report(&t);
        Some(t)
    }

    /// Teacher override entry point; `now` becomes the check-in time.
    pub fn mark(
        &mut self,
        student_id: StudentId,
        status: AttendanceStatus,
        now: NaiveDateTime,
    ) -> Option<Transition> {
        if self.is_closed() {
            return None;
        }
        let t = self
            .reconciler
            .on_manual_override(&mut self.roster, student_id, status, now)?;
        self.report(&t);
        Some(t)
    }

    /// Resolve a raw tag read against the roster and apply it as an arrival.
    pub fn scan(&mut self, read: &TagRead) -> ScanOutcome {
        if self.is_closed() {
            return ScanOutcome::Closed;
        }

        let reader = read.reader_id.as_deref().unwrap_or("-");
        let Some(student) = self.roster.find_by_tag(&read.rfid_tag) else {
            self.log
                .record("scan", &read.rfid_tag, &format!("unknown tag at {reader}"));
            self.notifier.notify(
                Level::Error,
                &format!("Unknown RFID tag {} at {}", read.rfid_tag, reader),
            );
            return ScanOutcome::UnknownTag;
        };

        let id = student.id;
        self.log.record(
            "scan",
            &read.rfid_tag,
            &format!("{} at {} ({})", student.name, reader, read.timestamp.format("%H:%M:%S")),
        );

        match self.arrive(&ArrivalEvent::new(id, read.timestamp)) {
            Some(t) => ScanOutcome::CheckedIn(t),
            None => ScanOutcome::AlreadyCheckedIn(id),
        }
    }

    fn report(&mut self, t: &Transition) {
        let status = t.to.status();
        let at = t
            .to
            .check_in()
            .map(|c| c.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--".to_string());

        let (op, msg) = match t.cause {
            Cause::Arrival => (
                "arrival",
                format!("{} checked in via RFID ({})", t.name, status),
            ),
            Cause::Override => (
                "override",
                format!("Attendance updated: {} marked {}", t.name, status),
            ),
        };

        self.log.record(
            op,
            &t.student_id.to_string(),
            &format!("{} -> {} at {}", t.from, status, at),
        );
        self.notifier.notify(Level::Success, &msg);
    }
}

/// Drives a session with a feed at a fixed interval.
pub struct SessionRunner<C: Clock> {
    clock: C,
    interval: Duration,
}

impl<C: Clock> SessionRunner<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self { clock, interval }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run up to `ticks` ticks, stopping early once the session is closed.
    /// Returns the transitions the feed produced.
    pub fn run<N: Notifier, S: ArrivalSource + ?Sized>(
        &mut self,
        session: &mut AttendanceSession<N>,
        source: &mut S,
        ticks: usize,
    ) -> Vec<Transition> {
        let mut applied = Vec::new();
        for _ in 0..ticks {
            if session.is_closed() {
                break;
            }
            self.clock.wait(self.interval);
            if let Some(t) = session.tick(source, self.clock.now()) {
                applied.push(t);
            }
        }
        applied
    }
}
