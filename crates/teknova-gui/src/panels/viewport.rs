use teknova_core::viewer::FrameInput;

use crate::app::TeknovaApp;
use crate::convert::{pos_from_egui, vec_from_egui};

pub fn show(ctx: &egui::Context, app: &mut TeknovaApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if !app.viewer.session.is_loaded() {
            show_placeholder(ui);
            return;
        }

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let input = frame_input(ui, &response);
        app.viewer.handle_input(&input);

        app.viewer.render(
            &mut app.backend,
            pos_from_egui(rect.min),
            vec_from_egui(rect.size()),
        );
        app.backend.paint(&ui.painter_at(rect));
    });
}

fn frame_input(ui: &egui::Ui, response: &egui::Response) -> FrameInput {
    let scroll_delta = if response.hovered() {
        let line_speed = ui.ctx().options(|o| o.input_options.line_scroll_speed);
        wheel_notches(ui.input(|i| i.raw_scroll_delta.y), line_speed)
    } else {
        0.0
    };

    let drag_active = response.dragged_by(egui::PointerButton::Secondary);
    let drag_delta = if drag_active {
        vec_from_egui(response.drag_delta())
    } else {
        Default::default()
    };

    FrameInput {
        scroll_delta,
        drag_active,
        drag_delta,
        pointer: response.interact_pointer_pos().map(pos_from_egui),
    }
}

/// egui scales line-based wheel input by `line_scroll_speed` points per line.
fn wheel_notches(scroll_points: f32, line_scroll_speed: f32) -> f32 {
    if line_scroll_speed > 0.0 {
        scroll_points / line_scroll_speed
    } else {
        0.0
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

#[cfg(test)]
mod tests {
    use teknova_core::viewport::ViewState;

    use super::*;

    #[test]
    fn test_one_wheel_line_is_one_zoom_step() {
        let speed = egui::InputOptions::default().line_scroll_speed;
        let mut view = ViewState::default();

        view.apply_scroll(wheel_notches(speed, speed));
        assert!((view.zoom() - 1.1).abs() < 1e-6);

        view.apply_scroll(wheel_notches(-2.0 * speed, speed));
        assert!((view.zoom() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_zero_line_speed_ignores_wheel() {
        assert_eq!(wheel_notches(120.0, 0.0), 0.0);
    }
}
