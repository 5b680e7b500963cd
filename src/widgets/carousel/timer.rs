//! Autoplay timer: an owned, cancellable repeating task.
//!
//! The task never touches carousel state. It posts [`AutoplayTick`]s onto
//! the host's event queue, and the carousel applies them one at a time on
//! the host's task. Every scheduled task gets a new generation; ticks from
//! a cancelled generation are rejected by [`AutoplayTimer::accepts`], so a
//! tick already queued when the timer is restarted or stopped is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::error::CarouselError;

/// One timer firing, stamped with the generation of the task that sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTick {
    generation: u64,
}

impl AutoplayTick {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Delivers ticks to the host. Returns false once the host stopped
/// listening, which ends the task.
pub type TickSink = Arc<dyn Fn(AutoplayTick) -> bool + Send + Sync>;

/// Build a sink that forwards ticks into a host event channel.
pub fn channel_sink<T>(tx: UnboundedSender<T>) -> TickSink
where
    T: From<AutoplayTick> + Send + 'static,
{
    Arc::new(move |tick| tx.send(T::from(tick)).is_ok())
}

#[derive(Default)]
pub struct AutoplayTimer {
    task: Option<JoinHandle<()>>,
    interval: Option<Duration>,
    generation: u64,
    cancellations: u64,
}

impl AutoplayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any live task, then start a new one ticking every `interval`.
    /// The first tick fires one full interval after scheduling.
    pub fn schedule(&mut self, interval: Duration, sink: TickSink) -> Result<(), CarouselError> {
        self.cancel();
        let runtime = Handle::try_current().map_err(|_| CarouselError::NoRuntime)?;
        let period = interval.max(Duration::from_millis(1));

        self.generation += 1;
        let generation = self.generation;
        let task = runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !sink(AutoplayTick { generation }) {
                    break;
                }
            }
        });

        tracing::debug!(
            generation,
            interval_ms = period.as_millis() as u64,
            "Autoplay scheduled"
        );
        self.task = Some(task);
        self.interval = Some(period);
        Ok(())
    }

    /// Stop the live task, if any. Returns true when a task was cancelled.
    pub fn cancel(&mut self) -> bool {
        let Some(task) = self.task.take() else {
            return false;
        };
        task.abort();
        self.interval = None;
        self.cancellations += 1;
        tracing::debug!(generation = self.generation, "Autoplay cancelled");
        true
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Cadence of the live task.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Generation of the most recently scheduled task.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live tasks cancelled so far.
    pub fn cancellations(&self) -> u64 {
        self.cancellations
    }

    /// True if `tick` came from the live task.
    pub fn accepts(&self, tick: AutoplayTick) -> bool {
        self.is_running() && tick.generation == self.generation
    }
}

impl std::fmt::Debug for AutoplayTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoplayTimer")
            .field("running", &self.is_running())
            .field("interval", &self.interval)
            .field("generation", &self.generation)
            .field("cancellations", &self.cancellations)
            .finish()
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
