use crate::clock::{
    format_duration, Clock, CountdownSeconds, Mode, Phase, SystemClock, TimerState, DEFAULT_LABEL,
};

use anyhow::{Context, Result};
use log::{debug, error, info, warn};

use std::{
    fmt,
    sync::mpsc::{Receiver, RecvTimeoutError, Sender},
    time::Duration,
};

pub enum AppRequest {
    CountUpPressed,
    CountDownPressed {
        // Contents of the countdown field at the time of the click
        input: String,
    },
    ResetPressed,
    Shutdown,
}

impl fmt::Debug for AppRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppRequest::CountUpPressed => {
                write!(f, "CountUpPressed")
            }
            AppRequest::CountDownPressed { .. } => {
                write!(f, "CountDownPressed")
            }
            AppRequest::ResetPressed => {
                write!(f, "ResetPressed")
            }
            AppRequest::Shutdown => {
                write!(f, "Shutdown")
            }
        }
    }
}

/// What the window needs to draw the timer
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimerView {
    pub(crate) label: String,
    pub(crate) phase: Phase,
}

impl Default for TimerView {
    fn default() -> Self {
        TimerView {
            label: DEFAULT_LABEL.to_string(),
            phase: Phase::Idle,
        }
    }
}

#[derive(Debug)]
pub enum AppEvent {
    ViewUpdated(TimerView),
}

/// Owns the timer state. Button presses arrive as requests, and the gaps between them are used to
/// refresh the time label.
pub struct App {
    tx: Sender<AppEvent>,
    rx: Receiver<AppRequest>,
    clock: Box<dyn Clock>,
    state: TimerState,
    view: TimerView,
}

impl App {
    pub const REFRESH_INTERVAL: Duration = Duration::from_millis(1);

    pub fn new(tx: Sender<AppEvent>, rx: Receiver<AppRequest>) -> App {
        App::with_clock(tx, rx, Box::new(SystemClock))
    }

    pub fn with_clock(
        tx: Sender<AppEvent>,
        rx: Receiver<AppRequest>,
        clock: Box<dyn Clock>,
    ) -> App {
        let state = TimerState::new(clock.now());
        App {
            tx,
            rx,
            clock,
            state,
            view: Default::default(),
        }
    }

    pub fn run(&mut self) {
        info!("Timer worker started");

        if let Err(e) = self.publish() {
            error!("{:?}", e);
            return;
        }

        loop {
            match self.rx.recv_timeout(Self::REFRESH_INTERVAL) {
                Ok(AppRequest::Shutdown) => {
                    debug!("Shutdown requested");
                    break;
                }
                Ok(req) => {
                    if let Err(e) = self.handle_req(req) {
                        error!("{:?}", e);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    if let Err(e) = self.refresh() {
                        // Nobody is listening for updates anymore
                        error!("{:?}", e);
                        break;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        info!("Timer worker stopped");
    }

    fn handle_req(&mut self, req: AppRequest) -> Result<()> {
        debug!("Handling {:?}", req);
        let now = self.clock.now();

        match req {
            AppRequest::CountUpPressed => {
                self.state.press(Mode::CountUp, now);
            }
            AppRequest::CountDownPressed { input } => {
                if self.state.press_starts(Mode::CountDown) {
                    let seconds = match input.parse::<CountdownSeconds>() {
                        Ok(v) => v,
                        Err(e) => {
                            warn!("Ignoring countdown press: {:?}", e);
                            return Ok(());
                        }
                    };
                    self.state.set_countdown_target(seconds.as_duration());
                }
                self.state.press(Mode::CountDown, now);
            }
            AppRequest::ResetPressed => {
                self.state.reset(now);
            }
            AppRequest::Shutdown => (),
        }

        self.update_view()
    }

    fn refresh(&mut self) -> Result<()> {
        if !self.state.is_running() {
            return Ok(());
        }

        self.update_view()
    }

    fn update_view(&mut self) -> Result<()> {
        let label = match self.state.display_millis(self.clock.now()) {
            Some(ms) => format_duration(ms),
            None => DEFAULT_LABEL.to_string(),
        };

        let view = TimerView {
            label,
            phase: self.state.phase(),
        };

        if view != self.view {
            self.view = view;
            self.publish()?;
        }

        Ok(())
    }

    fn publish(&self) -> Result<()> {
        self.tx
            .send(AppEvent::ViewUpdated(self.view.clone()))
            .context("Failed to send timer view to gui")
    }
}
