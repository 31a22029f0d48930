//! Interval timer driven by the frame clock
//!
//! Stands in for a recurring wall-clock timer. The session owns it; the
//! frame driver feeds it elapsed play time and it reports how many times it
//! fired. Freezing keeps the partial interval so resuming continues where it
//! left off.

/// Lifecycle of a timer subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Not subscribed; advancing does nothing
    Stopped,
    Running,
    /// Suspended with the partial interval kept
    Frozen,
}

#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: f32,
    elapsed: f32,
    state: TimerState,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            state: TimerState::Stopped,
        }
    }

    /// Subscribe from a fresh interval
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.state = TimerState::Running;
    }

    pub fn freeze(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Frozen;
        }
    }

    pub fn resume(&mut self) {
        if self.state == TimerState::Frozen {
            self.state = TimerState::Running;
        }
    }

    /// Tear the subscription down and drop any partial interval
    pub fn cancel(&mut self) {
        self.elapsed = 0.0;
        self.state = TimerState::Stopped;
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Feed elapsed time; returns how many intervals completed
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.state != TimerState::Running || !(dt > 0.0 && dt.is_finite()) {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_period() {
        let mut timer = IntervalTimer::new(0.8);
        timer.start();
        assert_eq!(timer.advance(0.5), 0);
        assert_eq!(timer.advance(0.5), 1);
        assert_eq!(timer.advance(1.7), 2);
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut timer = IntervalTimer::new(0.8);
        assert_eq!(timer.advance(10.0), 0);

        timer.start();
        timer.cancel();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.advance(10.0), 0);
    }

    #[test]
    fn test_non_finite_time_is_ignored() {
        let mut timer = IntervalTimer::new(0.8);
        timer.start();
        assert_eq!(timer.advance(f32::INFINITY), 0);
        assert_eq!(timer.advance(f32::NAN), 0);
        assert_eq!(timer.advance(0.9), 1);
    }

    #[test]
    fn test_freeze_keeps_partial_interval() {
        let mut timer = IntervalTimer::new(1.0);
        timer.start();
        assert_eq!(timer.advance(0.75), 0);

        timer.freeze();
        assert_eq!(timer.advance(5.0), 0);

        timer.resume();
        assert_eq!(timer.state(), TimerState::Running);
        // 0.75 carried over from before the freeze
        assert_eq!(timer.advance(0.5), 1);
    }

    #[test]
    fn test_restart_drops_partial_interval() {
        let mut timer = IntervalTimer::new(1.0);
        timer.start();
        timer.advance(0.9);
        timer.start();
        assert_eq!(timer.advance(0.5), 0);
    }
}
