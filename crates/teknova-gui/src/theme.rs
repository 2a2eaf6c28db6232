use egui::Color32;

const WINDOW_BG: Color32 = Color32::from_rgb(26, 26, 26);
const WIDGET_BG: Color32 = Color32::from_rgb(51, 52, 54);
const WIDGET_HOVERED: Color32 = Color32::from_rgb(77, 98, 79);
const WIDGET_ACTIVE: Color32 = Color32::from_rgb(38, 38, 39);
const TITLE_BG: Color32 = Color32::from_rgb(38, 38, 39);

/// Dark theme with muted grey widgets and a green hover tint.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.window_fill = WINDOW_BG;
    visuals.panel_fill = WINDOW_BG;
    visuals.extreme_bg_color = TITLE_BG;
    visuals.faint_bg_color = TITLE_BG;

    let widgets = &mut visuals.widgets;
    for (state, fill) in [
        (&mut widgets.inactive, WIDGET_BG),
        (&mut widgets.hovered, WIDGET_HOVERED),
        (&mut widgets.active, WIDGET_ACTIVE),
        (&mut widgets.open, WIDGET_ACTIVE),
    ] {
        state.bg_fill = fill;
        state.weak_bg_fill = fill;
    }

    visuals.selection.bg_fill = WIDGET_HOVERED;

    ctx.set_visuals(visuals);
}
