use crate::clock::{Mode, Phase};

use eframe::egui::{TextEdit, Ui};

pub(super) enum ControlAction {
    CountUp,
    CountDown,
    Reset,
    None,
}

pub(super) fn count_up_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Running(Mode::CountUp) => "pause",
        Phase::Paused(Mode::CountUp) => "resume",
        _ => "start",
    }
}

pub(super) fn count_down_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Running(Mode::CountDown) => "pause",
        Phase::Paused(Mode::CountDown) => "resume",
        _ => "countdown",
    }
}

// Clippy wants this to be a reference but egui needs to be able to grow the string
#[allow(clippy::ptr_arg)]
pub(super) fn show(ui: &mut Ui, phase: Phase, countdown_input: &mut String) -> ControlAction {
    let mut action = ControlAction::None;

    ui.horizontal(|ui| {
        TextEdit::singleline(countdown_input)
            .desired_width(40.0)
            .hint_text("secs")
            .show(ui);

        if ui.button(count_up_label(phase)).clicked() {
            action = ControlAction::CountUp;
        }

        if ui.button("clear").clicked() {
            action = ControlAction::Reset;
        }

        if ui.button(count_down_label(phase)).clicked() {
            action = ControlAction::CountDown;
        }
    });

    action
}
