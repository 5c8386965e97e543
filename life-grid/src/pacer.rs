use crate::error::LifeError;
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_MAX_FPS: u32 = 10;

/// Monotonic time source plus a blocking wait.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Caps the update rate by sleeping off whatever is left of the minimum
/// interval since the previous update completed. Never catches up on updates
/// that ran late.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval: Duration,
    last_update_completed: Option<Duration>,
}

impl FramePacer {
    pub fn new(max_fps: u32) -> Result<Self, LifeError> {
        if max_fps == 0 {
            return Err(LifeError::InvalidFrameRate);
        }
        Ok(Self {
            interval: Duration::from_nanos(1_000_000_000 / max_fps as u64),
            last_update_completed: None,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns how long it slept.
    pub fn pace<C: Clock>(&mut self, clock: &mut C) -> Duration {
        let now = clock.now();
        let wait = match self.last_update_completed {
            Some(last) => self.interval.saturating_sub(now.saturating_sub(last)),
            None => Duration::ZERO,
        };
        if !wait.is_zero() {
            log::debug!("Sleeping {wait:?}");
            clock.sleep(wait);
        }
        self.last_update_completed = Some(clock.now());
        wait
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self {
            interval: Duration::from_nanos(1_000_000_000 / DEFAULT_MAX_FPS as u64),
            last_update_completed: None,
        }
    }
}
