//! Arrival event sources.
//!
//! A source is polled once per tick and may yield one arrival. The simulated
//! feed stands in for a reader's message stream; tests use [`ScriptedFeed`].

use crate::core::roster::Roster;
use crate::models::arrival::ArrivalEvent;
use crate::models::student::StudentId;
use chrono::NaiveDateTime;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

pub trait ArrivalSource {
    /// Produce at most one arrival for this tick.
    fn next_tick(&mut self, roster: &Roster, now: NaiveDateTime) -> Option<ArrivalEvent>;
}

/// Shared "session closed" flag.
///
/// Clones observe the same flag. Sessions check it both before polling a
/// source and again before applying whatever the source returned.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Random check-ins: on each tick, with probability `probability`, one
/// currently absent student (picked uniformly) arrives at `now`.
pub struct SimulatedFeed<R: Rng = StdRng> {
    rng: R,
    probability: f64,
}

impl SimulatedFeed<StdRng> {
    pub fn seeded(seed: u64, probability: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), probability)
    }

    pub fn from_entropy(probability: f64) -> Self {
        Self::with_rng(StdRng::from_os_rng(), probability)
    }
}

impl<R: Rng> SimulatedFeed<R> {
    pub fn with_rng(rng: R, probability: f64) -> Self {
        Self {
            rng,
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl<R: Rng> ArrivalSource for SimulatedFeed<R> {
    fn next_tick(&mut self, roster: &Roster, now: NaiveDateTime) -> Option<ArrivalEvent> {
        let absent = roster.absent_ids();
        if absent.is_empty() || !self.rng.random_bool(self.probability) {
            return None;
        }
        absent
            .choose(&mut self.rng)
            .map(|id| ArrivalEvent::new(*id, now))
    }
}

/// Deterministic feed replaying a fixed script: one entry per tick,
/// `None` meaning a quiet tick. Exhausted scripts stay quiet.
#[derive(Debug, Default)]
pub struct ScriptedFeed {
    script: VecDeque<Option<StudentId>>,
    polled: usize,
}

impl ScriptedFeed {
    pub fn new<I: IntoIterator<Item = Option<StudentId>>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
            polled: 0,
        }
    }

    /// Number of times the session asked for a tick.
    pub fn polled(&self) -> usize {
        self.polled
    }
}

impl ArrivalSource for ScriptedFeed {
    fn next_tick(&mut self, _roster: &Roster, now: NaiveDateTime) -> Option<ArrivalEvent> {
        self.polled += 1;
        self.script
            .pop_front()
            .flatten()
            .map(|id| ArrivalEvent::new(id, now))
    }
}
