use crate::app::TeknovaApp;

pub fn show(ctx: &egui::Context, app: &mut TeknovaApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let export_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    app.open_image();
                }

                let loaded = app.viewer.session.is_loaded();
                if ui
                    .add_enabled(
                        loaded,
                        egui::Button::new("Export...")
                            .shortcut_text(ctx.format_shortcut(&export_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.export_image();
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            app.open_image();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&export_shortcut)) {
            app.export_image();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
