use timer::{
    app::{App, AppRequest},
    gui::{self, Gui},
};

use anyhow::{Error, Result};
use log::{error, info};

use std::{sync::mpsc, thread};

fn main() -> Result<()> {
    env_logger::init();
    let (app_tx, gui_rx) = mpsc::channel();
    let (gui_tx, app_rx) = mpsc::channel();
    let shutdown_tx = gui_tx.clone();

    let app_thread = thread::spawn(move || {
        let mut app = App::new(app_tx, app_rx);
        app.run();
    });

    info!("Opening timer window");
    let res = eframe::run_native(
        Gui::TITLE,
        gui::native_options(),
        Box::new(move |cc| Box::new(Gui::new(gui_tx, gui_rx, cc))),
    );

    let _ = shutdown_tx.send(AppRequest::Shutdown);
    if app_thread.join().is_err() {
        error!("Timer worker panicked");
    }

    res.map_err(|e| Error::msg(format!("Failed to run timer window: {}", e)))
}
