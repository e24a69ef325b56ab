use super::{Mode, Phase};

use log::debug;

use std::time::{Duration, Instant};

/// Bookkeeping for a pausable stopwatch that can also count down from a target
///
/// Paused time is tracked as a single accumulator rather than by moving the start reference, so
/// the elapsed time is always `now - start_instant - accumulated_pause`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimerState {
    start_instant: Instant,
    pause_instant: Instant,
    accumulated_pause: Duration,
    countdown_target: Duration,
    phase: Phase,
}

impl TimerState {
    pub fn new(now: Instant) -> TimerState {
        TimerState {
            start_instant: now,
            pause_instant: now,
            accumulated_pause: Duration::ZERO,
            countdown_target: Duration::ZERO,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn countdown_target(&self) -> Duration {
        self.countdown_target
    }

    pub fn set_countdown_target(&mut self, target: Duration) {
        self.countdown_target = target;
    }

    pub fn start(&mut self, mode: Mode, now: Instant) {
        if self.is_running() {
            return;
        }

        self.accumulated_pause += now.saturating_duration_since(self.pause_instant);
        self.phase = Phase::Running(mode);
    }

    pub fn pause(&mut self, now: Instant) {
        if let Phase::Running(mode) = self.phase {
            self.pause_instant = now;
            self.phase = Phase::Paused(mode);
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.start_instant = now;
        self.pause_instant = now;
        self.accumulated_pause = Duration::ZERO;
        self.phase = Phase::Idle;
    }

    /// Whether pressing the button for `mode` would put the timer into a running state
    pub fn press_starts(&self, mode: Mode) -> bool {
        match self.phase {
            Phase::Running(running) => running != mode,
            Phase::Idle | Phase::Paused(_) => true,
        }
    }

    /// Applies a press of the start/pause button belonging to `mode`
    pub fn press(&mut self, mode: Mode, now: Instant) -> Phase {
        if let Some(armed) = self.phase.armed_mode() {
            if armed != mode {
                debug!("Switching from {:?} to {:?}, resetting", armed, mode);
                self.reset(now);
            }
        }

        match self.phase {
            Phase::Running(_) => self.pause(now),
            Phase::Idle | Phase::Paused(_) => self.start(mode, now),
        }

        debug!("Timer phase is now {:?}", self.phase);
        self.phase
    }

    pub fn elapsed_count_up(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start_instant)
            .saturating_sub(self.accumulated_pause)
    }

    /// Milliseconds left until the countdown target. Keeps going negative once the target passes.
    pub fn remaining_count_down(&self, now: Instant) -> i64 {
        duration_ms(self.countdown_target) - duration_ms(self.elapsed_count_up(now))
    }

    /// Value the time label should show, `None` when idle
    ///
    /// While paused this is the value at the moment of pausing.
    pub fn display_millis(&self, now: Instant) -> Option<i64> {
        let (mode, at) = match self.phase {
            Phase::Idle => return None,
            Phase::Running(mode) => (mode, now),
            Phase::Paused(mode) => (mode, self.pause_instant),
        };

        let ms = match mode {
            Mode::CountUp => duration_ms(self.elapsed_count_up(at)),
            Mode::CountDown => self.remaining_count_down(at),
        };

        Some(ms)
    }
}

fn duration_ms(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod test {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn pause_time_not_counted() {
        let t0 = Instant::now();
        let mut state = TimerState::new(t0);

        state.press(Mode::CountUp, t0);
        assert_eq!(state.phase(), Phase::Running(Mode::CountUp));

        state.press(Mode::CountUp, t0 + ms(1500));
        assert_eq!(state.phase(), Phase::Paused(Mode::CountUp));
        assert_eq!(state.elapsed_count_up(t0 + ms(1500)), ms(1500));

        // Sit paused for a while, none of it should show up
        state.press(Mode::CountUp, t0 + ms(4000));
        assert_eq!(state.phase(), Phase::Running(Mode::CountUp));
        assert_eq!(state.elapsed_count_up(t0 + ms(4500)), ms(2000));
    }

    #[test]
    fn first_start_after_construction() {
        let t0 = Instant::now();
        let mut state = TimerState::new(t0);

        // Time between window creation and the first click is not counted
        state.press(Mode::CountUp, t0 + ms(700));
        assert_eq!(state.elapsed_count_up(t0 + ms(700)), Duration::ZERO);
        assert_eq!(state.elapsed_count_up(t0 + ms(800)), ms(100));
    }

    #[test]
    fn accumulated_pause_only_grows_on_resume() {
        let t0 = Instant::now();
        let mut state = TimerState::new(t0);

        state.start(Mode::CountUp, t0);
        let before = state.accumulated_pause;
        // Starting again while running is a no-op
        state.start(Mode::CountUp, t0 + ms(100));
        assert_eq!(state.accumulated_pause, before);

        state.pause(t0 + ms(200));
        state.pause(t0 + ms(300));
        assert_eq!(state.pause_instant, t0 + ms(200));

        state.start(Mode::CountUp, t0 + ms(500));
        assert_eq!(state.accumulated_pause, ms(300));
    }

    #[test]
    fn countdown_crosses_zero() {
        let t0 = Instant::now();
        let mut state = TimerState::new(t0);
        state.set_countdown_target(Duration::from_secs(10));
        state.press(Mode::CountDown, t0);

        assert_eq!(state.remaining_count_down(t0 + ms(2500)), 7500);
        assert_eq!(state.remaining_count_down(t0 + ms(10000)), 0);
        assert_eq!(state.remaining_count_down(t0 + ms(11000)), -1000);
        assert_eq!(state.display_millis(t0 + ms(11000)), Some(-1000));
    }

    #[test]
    fn switching_mode_resets() {
        let t0 = Instant::now();
        let mut state = TimerState::new(t0);

        state.press(Mode::CountUp, t0);
        state.press(Mode::CountUp, t0 + ms(1000));
        state.press(Mode::CountUp, t0 + ms(3000));
        assert!(state.accumulated_pause > Duration::ZERO);

        state.set_countdown_target(Duration::from_secs(5));
        let phase = state.press(Mode::CountDown, t0 + ms(4000));
        assert_eq!(phase, Phase::Running(Mode::CountDown));
        assert_eq!(state.accumulated_pause, Duration::ZERO);
        assert_eq!(state.elapsed_count_up(t0 + ms(4000)), Duration::ZERO);
        assert_eq!(state.remaining_count_down(t0 + ms(4000)), 5000);
    }

    #[test]
    fn switching_from_paused_mode_resets() {
        let t0 = Instant::now();
        let mut state = TimerState::new(t0);

        state.press(Mode::CountDown, t0);
        state.press(Mode::CountDown, t0 + ms(1000));
        assert_eq!(state.phase(), Phase::Paused(Mode::CountDown));

        state.press(Mode::CountUp, t0 + ms(2000));
        assert_eq!(state.phase(), Phase::Running(Mode::CountUp));
        assert_eq!(state.elapsed_count_up(t0 + ms(2500)), ms(500));
    }

    #[test]
    fn reset_is_idempotent() {
        let t0 = Instant::now();
        let mut state = TimerState::new(t0);
        state.press(Mode::CountUp, t0);
        state.press(Mode::CountUp, t0 + ms(100));
        state.press(Mode::CountUp, t0 + ms(200));

        state.reset(t0 + ms(300));
        let once = state.clone();
        state.reset(t0 + ms(300));
        assert_eq!(state, once);

        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.pause_instant, state.start_instant);
        assert_eq!(state.accumulated_pause, Duration::ZERO);
        assert_eq!(state.display_millis(t0 + ms(400)), None);
    }

    #[test]
    fn paused_display_is_frozen() {
        let t0 = Instant::now();
        let mut state = TimerState::new(t0);
        state.press(Mode::CountUp, t0);
        state.press(Mode::CountUp, t0 + ms(1234));

        assert_eq!(state.display_millis(t0 + ms(1234)), Some(1234));
        assert_eq!(state.display_millis(t0 + ms(9999)), Some(1234));
    }

    #[test]
    fn press_starts() {
        let t0 = Instant::now();
        let mut state = TimerState::new(t0);
        assert!(state.press_starts(Mode::CountDown));

        state.press(Mode::CountDown, t0);
        assert!(!state.press_starts(Mode::CountDown));
        assert!(state.press_starts(Mode::CountUp));

        state.press(Mode::CountDown, t0);
        assert!(state.press_starts(Mode::CountDown));
    }
}
