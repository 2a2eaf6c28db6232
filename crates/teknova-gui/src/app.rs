use teknova_core::codec::ImageCodec;
use teknova_core::render::FilterMode;
use teknova_core::viewer::Viewer;

use crate::backend::EguiBackend;
use crate::dialogs;
use crate::panels;
use crate::state::UIState;
use crate::theme;

pub struct TeknovaApp {
    pub viewer: Viewer,
    pub backend: EguiBackend,
    pub codec: ImageCodec,
    pub ui_state: UIState,
}

impl TeknovaApp {
    pub fn new(ctx: &egui::Context) -> Self {
        theme::apply_dark_theme(ctx);

        Self {
            viewer: Viewer::new(),
            backend: EguiBackend::new(ctx),
            codec: ImageCodec,
            ui_state: UIState::default(),
        }
    }

    /// Ask for a file and load it. Errors are logged and the old image stays.
    pub fn open_image(&mut self) {
        let Some(path) = dialogs::pick_image() else {
            return;
        };

        match self.viewer.open_image(&path, &mut self.backend, &self.codec) {
            Ok(()) => {
                if let Some((w, h)) = self.viewer.session.dimensions() {
                    self.ui_state
                        .add_log(format!("Opened: {} ({w}x{h})", path.display()));
                }
                self.ui_state.file_path = Some(path);
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Ask for a target path and export the current image there.
    pub fn export_image(&mut self) {
        if !self.viewer.session.is_loaded() {
            return;
        }
        let Some(path) = dialogs::pick_export_path() else {
            return;
        };

        match self.viewer.export_image(&path, &self.backend, &self.codec) {
            Ok(()) => self
                .ui_state
                .add_log(format!("Exported: {}", path.display())),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.viewer.set_filter_mode(mode, &mut self.backend);
    }
}

impl eframe::App for TeknovaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::details::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Teknova")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Teknova Image Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

impl Drop for TeknovaApp {
    fn drop(&mut self) {
        self.viewer.shutdown(&mut self.backend);
    }
}
