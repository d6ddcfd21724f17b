//! Simulated Signals
//!
//! Each signal owns one live snapshot and the bounded history of records
//! derived from it. Reading "current" regenerates the snapshot and appends
//! its record in a single write-locked step.

pub mod traffic;
pub mod water;

pub use traffic::{CongestionLevel, Traffic, TrafficRecord, TrafficSnapshot};
pub use water::{Water, WaterEvaluation, WaterParameters, WaterRecord, WaterSnapshot, WaterStatus};

use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use crate::clock::Clock;
use crate::random::RandomSource;
use crate::series::SeriesStore;

/// Behaviour of one simulated signal type.
pub trait Signal: Send + Sync + 'static {
    type Snapshot: Clone + Serialize + Send + Sync;
    type Record: Clone + Serialize + Send + Sync;

    /// Name used in logs.
    const NAME: &'static str;

    /// Snapshot in place before the first read.
    fn initial_snapshot(now: NaiveDateTime) -> Self::Snapshot;

    /// Redraw every field of `snapshot` and stamp it with `now`.
    fn regenerate(snapshot: &mut Self::Snapshot, rng: &dyn RandomSource, now: NaiveDateTime);

    /// History record carried forward from a freshly regenerated snapshot.
    fn record(snapshot: &Self::Snapshot) -> Self::Record;

    /// Synthetic record used to pre-fill history at start-up.
    fn seed_record(rng: &dyn RandomSource, timestamp: NaiveDateTime) -> Self::Record;
}

struct SignalState<S: Signal> {
    snapshot: S::Snapshot,
    history: SeriesStore<S::Record>,
}

/// Current snapshot plus rolling history for one signal.
pub struct SignalMonitor<S: Signal> {
    state: RwLock<SignalState<S>>,
    rng: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

pub type TrafficMonitor = SignalMonitor<Traffic>;
pub type WaterMonitor = SignalMonitor<Water>;

impl<S: Signal> SignalMonitor<S> {
    pub fn new(rng: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        let history = SeriesStore::seeded(now, |timestamp| S::seed_record(rng.as_ref(), timestamp));
        let state = SignalState { snapshot: S::initial_snapshot(now), history };
        debug!(signal = S::NAME, records = state.history.len(), "seeded signal history");

        Self { state: RwLock::new(state), rng, clock }
    }

    /// Regenerate the snapshot, record it, and return the new snapshot.
    pub fn current(&self) -> S::Snapshot {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let now = self.clock.now();

        S::regenerate(&mut state.snapshot, self.rng.as_ref(), now);
        let record = S::record(&state.snapshot);
        if state.history.append(record).is_some() {
            debug!(signal = S::NAME, "history full, evicted oldest record");
        }

        state.snapshot.clone()
    }

    /// Point-in-time copy of the history, oldest first.
    pub fn history(&self) -> Vec<S::Record> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).history.snapshot()
    }

    pub fn history_len(&self) -> usize {
        self.state.read().unwrap_or_else(PoisonError::into_inner).history.len()
    }
}
