use crate::error::EngineError;
use std::time::{Duration, Instant};

/// Time source for the scheduler, injectable so tick semantics can be
/// tested without sleeping.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Paused,
    Stopped,
}

/// Outcome of a single [`Scheduler::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No deadline has passed.
    None,
    /// A tick fired; the caller should advance the simulation.
    Fired,
    /// A tick fired while paused; the clock keeps running but the
    /// simulation must not advance.
    Suppressed,
}

/// Poll-driven periodic tick source.
///
/// State machine: `Idle → Running ⇄ Paused → Stopped`, where `start`
/// also revives a stopped scheduler (a resize replaces the old
/// schedule wholesale).
///
/// Cadence is fixed-delay: each fired tick schedules the next deadline
/// relative to the moment it fired, so a poll that arrives late delays
/// subsequent ticks instead of bunching them up.
#[derive(Debug)]
pub struct Scheduler<C: Clock = SystemClock> {
    clock: C,
    state: SchedulerState,
    period: Duration,
    deadline: Option<Instant>,
}

impl Scheduler<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Scheduler<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Scheduler<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: SchedulerState::Idle,
            period: Duration::ZERO,
            deadline: None,
        }
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == SchedulerState::Paused
    }

    /// Begins firing a tick every `period`, starting one period from
    /// now. Fails with `InvalidPeriod` for a zero period.
    pub fn start(&mut self, period: Duration) -> Result<(), EngineError> {
        if period.is_zero() {
            return Err(EngineError::InvalidPeriod);
        }
        self.period = period;
        self.state = SchedulerState::Running;
        self.deadline = Some(self.clock.now() + period);
        Ok(())
    }

    /// Replaces the tick period. The next deadline is recomputed from
    /// the moment of the call, as if the timer were swapped out
    /// atomically — the pending tick neither fires twice nor is lost.
    pub fn set_period(&mut self, period: Duration) -> Result<(), EngineError> {
        if period.is_zero() {
            return Err(EngineError::InvalidPeriod);
        }
        self.period = period;
        if matches!(self.state, SchedulerState::Running | SchedulerState::Paused) {
            self.deadline = Some(self.clock.now() + period);
        }
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.state == SchedulerState::Running {
            self.state = SchedulerState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == SchedulerState::Paused {
            self.state = SchedulerState::Running;
        }
    }

    /// Terminates all future ticks. Idempotent.
    pub fn stop(&mut self) {
        self.state = SchedulerState::Stopped;
        self.deadline = None;
    }

    /// Checks whether a tick deadline has passed. At most one tick is
    /// reported per poll.
    pub fn poll(&mut self) -> Tick {
        if !matches!(self.state, SchedulerState::Running | SchedulerState::Paused) {
            return Tick::None;
        }
        let now = self.clock.now();
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                if self.state == SchedulerState::Paused {
                    Tick::Suppressed
                } else {
                    Tick::Fired
                }
            }
            _ => Tick::None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualClock;
    use super::*;

    const PERIOD: Duration = Duration::from_millis(200);

    fn running_scheduler() -> (ManualClock, Scheduler<ManualClock>) {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::with_clock(clock.clone());
        scheduler.start(PERIOD).unwrap();
        (clock, scheduler)
    }

    #[test]
    fn zero_period_is_rejected() {
        let mut scheduler = Scheduler::with_clock(ManualClock::new());

        assert_eq!(scheduler.start(Duration::ZERO), Err(EngineError::InvalidPeriod));
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert_eq!(
            scheduler.set_period(Duration::ZERO),
            Err(EngineError::InvalidPeriod)
        );
    }

    #[test]
    fn ticks_fire_at_the_period() {
        let (clock, mut scheduler) = running_scheduler();

        assert_eq!(scheduler.poll(), Tick::None);

        clock.advance(PERIOD);
        assert_eq!(scheduler.poll(), Tick::Fired);
        // the deadline was consumed; the next one is a full period away
        assert_eq!(scheduler.poll(), Tick::None);

        clock.advance(PERIOD);
        assert_eq!(scheduler.poll(), Tick::Fired);
    }

    #[test]
    fn set_period_replaces_the_pending_deadline() {
        let (clock, mut scheduler) = running_scheduler();

        // half a period in, switch to a shorter period: the old
        // deadline is discarded, the new one counts from the call
        clock.advance(Duration::from_millis(100));
        scheduler.set_period(Duration::from_millis(50)).unwrap();

        assert_eq!(scheduler.poll(), Tick::None);
        clock.advance(Duration::from_millis(50));
        assert_eq!(scheduler.poll(), Tick::Fired);
        // exactly one tick, not a catch-up burst
        assert_eq!(scheduler.poll(), Tick::None);
    }

    #[test]
    fn set_period_to_longer_does_not_double_fire() {
        let (clock, mut scheduler) = running_scheduler();

        clock.advance(Duration::from_millis(190));
        scheduler.set_period(Duration::from_millis(500)).unwrap();

        // the nearly-due old deadline must not fire
        clock.advance(Duration::from_millis(20));
        assert_eq!(scheduler.poll(), Tick::None);

        clock.advance(Duration::from_millis(480));
        assert_eq!(scheduler.poll(), Tick::Fired);
    }

    #[test]
    fn paused_ticks_are_suppressed_but_keep_cadence() {
        let (clock, mut scheduler) = running_scheduler();

        scheduler.pause();
        assert_eq!(scheduler.state(), SchedulerState::Paused);

        for _ in 0..3 {
            clock.advance(PERIOD);
            assert_eq!(scheduler.poll(), Tick::Suppressed);
        }

        scheduler.resume();
        clock.advance(PERIOD);
        assert_eq!(scheduler.poll(), Tick::Fired);
    }

    #[test]
    fn stop_is_idempotent_and_final() {
        let (clock, mut scheduler) = running_scheduler();

        scheduler.stop();
        scheduler.stop();
        assert_eq!(scheduler.state(), SchedulerState::Stopped);

        clock.advance(PERIOD * 10);
        assert_eq!(scheduler.poll(), Tick::None);
    }

    #[test]
    fn start_revives_a_stopped_scheduler() {
        let (clock, mut scheduler) = running_scheduler();

        scheduler.stop();
        scheduler.start(PERIOD).unwrap();
        assert_eq!(scheduler.state(), SchedulerState::Running);

        clock.advance(PERIOD);
        assert_eq!(scheduler.poll(), Tick::Fired);
    }

    #[test]
    fn late_poll_reports_a_single_tick() {
        let (clock, mut scheduler) = running_scheduler();

        // three periods elapse unobserved; fixed-delay cadence means
        // one tick fires and the next deadline counts from now
        clock.advance(PERIOD * 3);
        assert_eq!(scheduler.poll(), Tick::Fired);
        assert_eq!(scheduler.poll(), Tick::None);
    }
}
