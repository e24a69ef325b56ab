mod controls;

use controls::ControlAction;

use crate::app::{AppEvent, AppRequest, TimerView};

use anyhow::{Context, Result};
use eframe::{
    egui::{self, CentralPanel, Color32, RichText, TopBottomPanel, ViewportBuilder, Visuals},
    CreationContext,
};
use log::{debug, error};

use std::{
    sync::{
        mpsc::{Receiver, Sender},
        Arc, Mutex,
    },
    thread,
};

struct GuiInner {
    tx: Sender<AppRequest>,
    view: TimerView,
    countdown_input: String,
}

impl GuiInner {
    const DEFAULT_COUNTDOWN_INPUT: &'static str = "000";

    fn new(tx: Sender<AppRequest>) -> GuiInner {
        GuiInner {
            tx,
            view: Default::default(),
            countdown_input: Self::DEFAULT_COUNTDOWN_INPUT.to_string(),
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ViewUpdated(view) => {
                self.view = view;
            }
        }
    }

    fn handle_control_action(&mut self, action: ControlAction) -> Result<()> {
        let req = match action {
            ControlAction::CountUp => AppRequest::CountUpPressed,
            ControlAction::CountDown => AppRequest::CountDownPressed {
                input: self.countdown_input.clone(),
            },
            ControlAction::Reset => AppRequest::ResetPressed,
            ControlAction::None => return Ok(()),
        };

        debug!("Sending {:?}", req);
        self.tx
            .send(req)
            .context("Failed to send button press to timer")?;

        Ok(())
    }

    fn update(&mut self, ctx: &egui::Context) -> Result<()> {
        let action = TopBottomPanel::bottom("controls")
            .show(ctx, |ui| {
                controls::show(ui, self.view.phase, &mut self.countdown_input)
            })
            .inner;

        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(&self.view.label)
                        .size(Gui::TIME_FONT_SIZE)
                        .monospace(),
                );
            });
        });

        self.handle_control_action(action)?;

        Ok(())
    }
}

pub struct Gui {
    inner: Arc<Mutex<GuiInner>>,
}

impl Gui {
    pub const TITLE: &'static str = "Timer";
    const WINDOW_SIZE: [f32; 2] = [300.0, 140.0];
    const TIME_FONT_SIZE: f32 = 40.0;

    pub fn new(tx: Sender<AppRequest>, rx: Receiver<AppEvent>, cc: &CreationContext<'_>) -> Gui {
        configure_visuals(&cc.egui_ctx);

        let inner = Arc::new(Mutex::new(GuiInner::new(tx)));

        // Forward timer updates and wake the ui for each one
        let event_inner = Arc::clone(&inner);
        let ctx = cc.egui_ctx.clone();
        thread::spawn(move || {
            while let Ok(event) = rx.recv() {
                event_inner.lock().unwrap().handle_event(event);
                ctx.request_repaint();
            }
            debug!("Timer event stream closed");
        });

        Gui { inner }
    }
}

impl eframe::App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut inner = self.inner.lock().unwrap();
        let res = inner.update(ctx);

        if let Err(e) = res {
            error!("{:?}", e);
        }
    }
}

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(Gui::TITLE)
            .with_inner_size(Gui::WINDOW_SIZE)
            .with_resizable(false),
        centered: true,
        ..Default::default()
    }
}

fn configure_visuals(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.panel_fill = Color32::WHITE;
    // Text field background
    visuals.extreme_bg_color = Color32::from_rgb(0xe1, 0xe1, 0xe1);
    ctx.set_visuals(visuals);
}
