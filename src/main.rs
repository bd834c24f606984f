use eframe::egui;

mod app;
mod ui;

use app::PortfolioApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Folio"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio — Portfolio",
        options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(&cc.egui_ctx)))),
    )
    .expect("Failed to start Folio");
}
