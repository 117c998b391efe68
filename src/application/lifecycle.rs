//! Simulation cadence: run / pause / step-once and the minimum step interval.

use std::time::{Duration, Instant};

use crate::domain::clamp_step_interval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Decides when the rule engine runs.
///
/// The controller does not own the grid; `tick` and `step_once` take the
/// step as a closure so the caller decides what advancing means.
#[derive(Clone, Debug)]
pub struct LifecycleController {
    state: RunState,
    interval: Duration,
    last_step: Instant,
    generation: u64,
}

impl LifecycleController {
    /// Start running with the given interval, measured from `now`
    pub fn new(step_interval_ms: u32, now: Instant) -> Self {
        Self {
            state: RunState::Running,
            interval: interval_from_ms(step_interval_ms),
            last_step: now,
            generation: 0,
        }
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Number of steps performed so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    pub fn step_interval_ms(&self) -> u32 {
        self.interval.as_millis() as u32
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            log::debug!("paused at generation {}", self.generation);
            self.state = RunState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            log::debug!("resumed at generation {}", self.generation);
            self.state = RunState::Running;
        }
    }

    /// Toggle between running and paused
    pub fn toggle(&mut self) {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
    }

    /// Change the interval, clamped to `[1, 750]` ms. A change restarts the
    /// elapsed-time measurement at `now` instead of firing a catch-up step.
    pub fn set_step_interval_ms(&mut self, step_interval_ms: u32, now: Instant) {
        let interval = interval_from_ms(step_interval_ms);
        if interval != self.interval {
            self.interval = interval;
            self.last_step = now;
        }
    }

    /// One scheduling opportunity. While running, steps once if at least the
    /// interval has elapsed since the last step. Returns whether it stepped.
    pub fn tick<E, F>(&mut self, now: Instant, step: F) -> Result<bool, E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        if self.state != RunState::Running {
            return Ok(false);
        }
        if now.saturating_duration_since(self.last_step) < self.interval {
            return Ok(false);
        }
        self.last_step = now;
        step()?;
        self.generation += 1;
        Ok(true)
    }

    /// Perform exactly one step while paused, staying paused.
    /// Ignored while running; returns whether it stepped.
    pub fn step_once<E, F>(&mut self, now: Instant, step: F) -> Result<bool, E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        if self.state != RunState::Paused {
            log::debug!("step-once ignored while running");
            return Ok(false);
        }
        self.last_step = now;
        step()?;
        self.generation += 1;
        Ok(true)
    }
}

fn interval_from_ms(step_interval_ms: u32) -> Duration {
    Duration::from_millis(clamp_step_interval(step_interval_ms) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn ok() -> Result<(), ()> {
        Ok(())
    }

    #[test]
    fn test_steps_only_after_interval() {
        let t0 = Instant::now();
        let mut lc = LifecycleController::new(30, t0);

        assert_eq!(lc.tick(t0 + ms(10), ok), Ok(false));
        assert_eq!(lc.tick(t0 + ms(29), ok), Ok(false));
        assert_eq!(lc.tick(t0 + ms(30), ok), Ok(true));
        // measured from the last step now
        assert_eq!(lc.tick(t0 + ms(45), ok), Ok(false));
        assert_eq!(lc.tick(t0 + ms(61), ok), Ok(true));
        assert_eq!(lc.generation(), 2);
    }

    #[test]
    fn test_paused_never_steps() {
        let t0 = Instant::now();
        let mut lc = LifecycleController::new(1, t0);
        lc.pause();
        assert_eq!(lc.state(), RunState::Paused);
        assert_eq!(lc.tick(t0 + ms(1000), ok), Ok(false));
        assert_eq!(lc.generation(), 0);

        lc.resume();
        assert_eq!(lc.tick(t0 + ms(1000), ok), Ok(true));
    }

    #[test]
    fn test_step_once_only_while_paused() {
        let t0 = Instant::now();
        let mut lc = LifecycleController::new(500, t0);
        let mut calls = 0;

        assert_eq!(lc.step_once(t0, || { calls += 1; ok() }), Ok(false));
        assert_eq!(calls, 0);

        lc.pause();
        assert_eq!(lc.step_once(t0, || { calls += 1; ok() }), Ok(true));
        assert_eq!(calls, 1);
        assert_eq!(lc.state(), RunState::Paused);
        assert_eq!(lc.generation(), 1);
    }

    #[test]
    fn test_interval_change_does_not_burst() {
        let t0 = Instant::now();
        let mut lc = LifecycleController::new(500, t0);

        // long overdue for a 20ms interval, but the change restarts the clock
        lc.set_step_interval_ms(20, t0 + ms(400));
        assert_eq!(lc.step_interval_ms(), 20);
        assert_eq!(lc.tick(t0 + ms(410), ok), Ok(false));
        assert_eq!(lc.tick(t0 + ms(420), ok), Ok(true));
    }

    #[test]
    fn test_unchanged_interval_keeps_clock() {
        let t0 = Instant::now();
        let mut lc = LifecycleController::new(30, t0);
        lc.set_step_interval_ms(30, t0 + ms(29));
        assert_eq!(lc.tick(t0 + ms(30), ok), Ok(true));
    }

    #[test]
    fn test_interval_is_clamped() {
        let t0 = Instant::now();
        let mut lc = LifecycleController::new(0, t0);
        assert_eq!(lc.step_interval_ms(), 1);
        lc.set_step_interval_ms(10_000, t0);
        assert_eq!(lc.step_interval_ms(), 750);
    }

    #[test]
    fn test_failed_step_does_not_count() {
        let t0 = Instant::now();
        let mut lc = LifecycleController::new(1, t0);
        assert_eq!(lc.tick(t0 + ms(5), || Err("boom")), Err("boom"));
        assert_eq!(lc.generation(), 0);
        assert!(lc.is_running());
    }
}
