//! Deterministic repeating timers driven by elapsed frame time.

use std::time::Duration;

use tracing::trace;

use crate::constants::MIN_TIMER_PERIOD;

/// Opaque handle to a scheduled repeating task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Whole periods of one task that elapsed during a single [`Scheduler::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub count: u64,
}

/// Source of cancellable repeating ticks.
///
/// Time only moves when [`Scheduler::advance`] is called, so callers decide
/// whether it follows the wall clock, a frame counter or a test script.
pub trait Scheduler {
    /// Starts a task firing once every `period`.
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Cancels a task. Returns `false` when the handle was not live.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Moves time forward and reports, per task, how many periods completed.
    /// Tasks with no completed period are left out.
    fn advance(&mut self, elapsed: Duration) -> Vec<Fired>;

    /// Number of tasks currently scheduled.
    fn live_count(&self) -> usize;
}

#[derive(Debug)]
struct Interval {
    id: TimerId,
    period: Duration,
    elapsed: Duration,
}

/// Accumulates elapsed time per interval, the same way a render loop
/// accumulates `dt` until a display duration is reached.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    intervals: Vec<Interval>,
    next_id: u64,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time accumulated towards the next tick of `id`.
    pub fn pending(&self, id: TimerId) -> Option<Duration> {
        self.intervals.iter().find(|i| i.id == id).map(|i| i.elapsed)
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let period = period.max(MIN_TIMER_PERIOD);
        self.intervals.push(Interval { id, period, elapsed: Duration::ZERO });
        trace!(?id, ?period, "interval scheduled");
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.intervals.len();
        self.intervals.retain(|i| i.id != id);
        let removed = self.intervals.len() != before;
        if removed {
            trace!(?id, "interval cancelled");
        }
        removed
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<Fired> {
        let mut fired = Vec::new();
        for interval in self.intervals.iter_mut() {
            let total = interval.elapsed.saturating_add(elapsed).as_nanos();
            let period = interval.period.as_nanos();
            interval.elapsed = from_nanos(total % period);

            let count = total / period;
            if count > 0 {
                fired.push(Fired {
                    id: interval.id,
                    count: u64::try_from(count).unwrap_or(u64::MAX),
                });
            }
        }
        fired
    }

    fn live_count(&self) -> usize {
        self.intervals.len()
    }
}

// `nanos` is always below a period, which is itself a `Duration`.
fn from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    Duration::new((nanos / NANOS_PER_SEC) as u64, (nanos % NANOS_PER_SEC) as u32)
}
