use crate::app::TeknovaApp;

const LOG_LINES: usize = 3;

pub fn show(ctx: &egui::Context, app: &mut TeknovaApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height and scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * LOG_LINES as f32 + spacing * (LOG_LINES - 1) as f32;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve the lines to prevent layout jump.
                    for _ in 0..LOG_LINES {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some((w, h)) = app.viewer.session.dimensions() {
                ui.label(format!("{w}x{h}"));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewer.view.zoom() * 100.0));
            ui.separator();
            ui.label(format!("Filter: {}", app.viewer.session.filter_mode()));
        });

        ui.add_space(2.0);
    });
}
