use teknova_core::consts::{MAX_ZOOM, MIN_ZOOM};
use teknova_core::render::ALL_FILTER_MODES;

use crate::app::TeknovaApp;

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut TeknovaApp) {
    egui::SidePanel::left("details")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ui, app);
                if app.viewer.session.is_loaded() {
                    ui.separator();
                    view_section(ui, app);
                    ui.separator();
                    filter_section(ui, app);
                    ui.separator();
                    export_section(ui, app);
                }
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut TeknovaApp) {
    let size = app.viewer.session.dimensions().map(size_label);
    super::section_header(ui, "Image", size.as_deref());
    ui.add_space(4.0);

    if ui.button("Open image...").clicked() {
        app.open_image();
    }

    if let Some(ref path) = app.ui_state.file_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }
}

fn size_label((width, height): (u32, u32)) -> String {
    format!("{width}x{height}")
}

fn zoom_label(zoom: f32) -> String {
    format!("{:.0}%", zoom * 100.0)
}

fn view_section(ui: &mut egui::Ui, app: &mut TeknovaApp) {
    super::section_header(ui, "View", Some(&zoom_label(app.viewer.view.zoom())));
    ui.add_space(4.0);

    let mut zoom = app.viewer.view.zoom();
    let response = ui.add(
        egui::Slider::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)
            .text("Zoom")
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        app.viewer.view.set_zoom(zoom);
    }

    if ui.button("Reset pan").clicked() {
        app.viewer.view.reset_offset();
    }
}

fn filter_section(ui: &mut egui::Ui, app: &mut TeknovaApp) {
    egui::CollapsingHeader::new("Filtering")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let current = app.viewer.session.filter_mode();
                for &mode in ALL_FILTER_MODES {
                    if ui.radio(current == mode, mode.to_string()).clicked() && current != mode {
                        app.set_filter_mode(mode);
                    }
                }
            });
        });
}

fn export_section(ui: &mut egui::Ui, app: &mut TeknovaApp) {
    if ui.button("Export image...").clicked() {
        app.export_image();
    }
}
