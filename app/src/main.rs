use eframe::egui;

mod app;

use crate::app::App;

/// Cells per axis. The window side below is a multiple of both, so each
/// cell maps to a whole number of pixels at startup.
pub const GRID_WIDTH: usize = 80;
pub const GRID_HEIGHT: usize = 80;
pub const WINDOW_SIDE: f32 = 800.0;
pub const GENERATIONS_PER_SECOND: f64 = 15.0;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_SIDE, WINDOW_SIDE]),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
