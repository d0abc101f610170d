//! Frame and timer scheduling with explicit cancellation.
//!
//! A view that starts a loop owns a [`CancellationToken`] and cancels it on teardown.
//! Frame loops check the token before every step, so a cancelled loop never runs its task
//! again; intervals wake up on cancellation instead of waiting for their next tick.

use std::future::Future;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

pub use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

pub trait FrameTask {
    fn frame(&mut self) -> FrameOutcome;
}

/// Drives a [`FrameTask`] once per rendered frame until it stops or is cancelled.
#[derive(Debug)]
pub struct FrameLoop<T> {
    task: T,
    token: CancellationToken,
    frames: u64,
    stopped: bool,
}

impl<T: FrameTask> FrameLoop<T> {
    pub fn new(task: T, token: CancellationToken) -> Self {
        Self {
            task,
            token,
            frames: 0,
            stopped: false,
        }
    }

    pub fn tick(&mut self) -> FrameOutcome {
        if self.stopped {
            return FrameOutcome::Stop;
        }
        if self.token.is_cancelled() {
            log::debug!("frame loop cancelled after {} frames", self.frames);
            self.stopped = true;
            return FrameOutcome::Stop;
        }

        self.frames += 1;
        let outcome = self.task.frame();
        if outcome == FrameOutcome::Stop {
            log::debug!("frame loop finished after {} frames", self.frames);
            self.stopped = true;
        }
        outcome
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn task_mut(&mut self) -> &mut T {
        &mut self.task
    }
}

/// Calls `on_tick` every `period` (first call one period after start) until the token is
/// cancelled or `on_tick` returns false.
pub async fn run_interval<F, Fut>(period: Duration, token: CancellationToken, mut on_tick: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let mut interval = time::interval_at(time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                if !on_tick().await {
                    break;
                }
            }
        }
    }
}
