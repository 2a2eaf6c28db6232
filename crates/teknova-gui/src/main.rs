mod app;
mod backend;
mod convert;
mod dialogs;
mod panels;
mod state;
mod theme;

/// Initial window size in points.
const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];
const WINDOW_TITLE: &str = "Teknova Image Viewer";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "TeknovaViewer",
        options,
        Box::new(|cc| Ok(Box::new(app::TeknovaApp::new(&cc.egui_ctx)))),
    )
}
