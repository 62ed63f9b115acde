//! Clock sources and the periodic ticker.
//!
//! The ticker runs as a tokio task and reports clock readings over a channel.
//! Dropping its [`TickerHandle`] cancels the task; no readings are sent after
//! that.

use std::time::Duration;

use chrono::{Local, NaiveTime};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Default period of the routine ticker.
pub const DEFAULT_TICK: Duration = Duration::from_secs(60);

/// Source of the current time of day.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock frozen at a fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Owner of a running ticker. Aborts the ticker task on drop.
#[derive(Debug)]
pub struct TickerHandle {
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a ticker sending `clock.now()` immediately and then every `period`.
///
/// Must be called from within a tokio runtime. A zero period is raised to one
/// second. The task also stops on its own once the receiver is dropped.
pub fn spawn_ticker<C>(clock: C, period: Duration) -> (TickerHandle, mpsc::Receiver<NaiveTime>)
where
    C: Clock + Send + 'static,
{
    let period = period.max(Duration::from_secs(1));
    let (tx, rx) = mpsc::channel(8);

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(clock.now()).await.is_err() {
                debug!("ticker receiver dropped, stopping");
                break;
            }
        }
    });

    (TickerHandle { task }, rx)
}
