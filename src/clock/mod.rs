mod countdown;
mod format;
mod stopwatch;

pub use countdown::CountdownSeconds;
pub use format::{format_duration, TimeDisplay, DEFAULT_LABEL};
pub use stopwatch::TimerState;

use std::time::Instant;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Mode {
    CountUp,
    CountDown,
}

/// Where the timer is in its idle/running/paused cycle. Only one mode can be armed at a time, a
/// press on the other mode's button resets first.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Running(Mode),
    Paused(Mode),
}

impl Phase {
    pub fn armed_mode(&self) -> Option<Mode> {
        match self {
            Phase::Idle => None,
            Phase::Running(mode) | Phase::Paused(mode) => Some(*mode),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running(_))
    }
}

pub trait Clock: Send {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;
