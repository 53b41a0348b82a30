//! Per-question countdown.
//!
//! A `Countdown` ticks once per second on the Tokio clock and calls its
//! expiry callback exactly once when it reaches zero. Cancelling or dropping
//! it disarms the callback and aborts the ticking task. Once `cancel` has
//! returned the callback cannot start, even on a multi-thread runtime where
//! the task may be mid-poll on another worker.

use crate::error::{SessionError, SessionResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

const TICK: Duration = Duration::from_secs(1);

type Expiry = Box<dyn FnOnce() + Send>;

/// Display banding derived from the remaining fraction of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Nominal,
    Warning,
    Urgent,
}

impl Urgency {
    /// Below 30% is urgent, below 60% a warning.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent < 30.0 {
            Self::Urgent
        } else if percent < 60.0 {
            Self::Warning
        } else {
            Self::Nominal
        }
    }
}

/// A running countdown.
pub struct Countdown {
    duration_secs: u32,
    remaining: watch::Receiver<u32>,
    // Taken by whichever of expiry and cancel gets the lock first. Expiry
    // runs the callback while holding it.
    on_expire: Arc<Mutex<Option<Expiry>>>,
    task: JoinHandle<()>,
}

impl fmt::Debug for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Countdown")
            .field("duration_secs", &self.duration_secs)
            .field("remaining", &self.remaining())
            .field("finished", &self.is_finished())
            .finish_non_exhaustive()
    }
}

impl Countdown {
    /// Starts counting down from `duration_secs`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start<F>(duration_secs: u32, on_expire: F) -> SessionResult<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        if duration_secs == 0 {
            return Err(SessionError::InvalidDuration);
        }

        let (tx, rx) = watch::channel(duration_secs);
        let callback: Expiry = Box::new(on_expire);
        let on_expire = Arc::new(Mutex::new(Some(callback)));
        let armed = on_expire.clone();
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + TICK, TICK);
            let mut remaining = duration_secs;
            while remaining > 0 {
                ticker.tick().await;
                remaining -= 1;
                tx.send_replace(remaining);
            }
            let mut slot = armed.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(callback) = slot.take() {
                debug!(duration_secs, "countdown expired");
                callback();
            }
        });

        Ok(Self {
            duration_secs,
            remaining: rx,
            on_expire,
            task,
        })
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Whole seconds left.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        *self.remaining.borrow()
    }

    /// Remaining time as a percentage of the full duration.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.remaining()) / f64::from(self.duration_secs) * 100.0
    }

    #[must_use]
    pub fn urgency(&self) -> Urgency {
        Urgency::from_percent(self.progress_percent())
    }

    /// Receiver that observes every decrement.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.remaining.clone()
    }

    /// True once the countdown expired or was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the countdown; the expiry callback will not run.
    ///
    /// If the callback is already running, waits for it to return.
    pub fn cancel(&self) {
        self.disarm();
        self.task.abort();
    }

    fn disarm(&self) {
        self.on_expire
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}
