//! Rotating facts banner
//!
//! `FactRotator` holds the index into a fixed list of facts. `FactTimer` is the
//! repeating timer that drives it: a tokio task sends one message per period
//! and the UI loop applies them, so ticks never race with key handling.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Default rotation period in seconds
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Longest accepted rotation period (one day)
pub const MAX_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Cycles through a fixed, non-empty list of facts
#[derive(Debug, Clone)]
pub struct FactRotator {
    facts: &'static [&'static str],
    index: usize,
}

impl FactRotator {
    /// Panics if `facts` is empty; every caller passes a constant list
    pub fn new(facts: &'static [&'static str]) -> Self {
        assert!(!facts.is_empty(), "fact list must not be empty");
        Self { facts, index: 0 }
    }

    /// Advance to the next fact, wrapping at the end
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.facts.len();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn current(&self) -> &'static str {
        self.facts[self.index]
    }
}

/// Handle to a running repeating timer
///
/// Ticks are only observable through `drain`, and `stop` consumes the handle,
/// so nothing can be applied after the timer is cancelled.
#[derive(Debug)]
pub struct FactTimer {
    task: JoinHandle<()>,
    ticks: mpsc::UnboundedReceiver<()>,
    period: Duration,
}

impl FactTimer {
    /// Spawn the timer; the first tick fires one full period from now.
    /// Periods above `MAX_INTERVAL_SECS` are clamped.
    pub fn start(period: Duration) -> Self {
        let period = period.min(Duration::from_secs(MAX_INTERVAL_SECS));
        let (tx, ticks) = mpsc::unbounded_channel();
        let first = Instant::now() + period;

        let task = tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    // Receiver gone, nobody is listening any more
                    break;
                }
            }
        });

        tracing::debug!("Fact timer started ({:?} period)", period);
        Self { task, ticks, period }
    }

    /// Number of ticks that fired since the last drain
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.ticks.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Cancel the timer; pending ticks are discarded
    pub fn stop(self) {
        // Drop does the work
        tracing::debug!("Fact timer stopped");
    }
}

impl Drop for FactTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
