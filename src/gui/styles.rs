use egui::{Color32, Rounding, Stroke, Style, Visuals};

pub fn setup_custom_style(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Default::default()
    };

    // Dark slate theme
    style.visuals.window_fill = Color32::from_rgb(34, 34, 34);
    style.visuals.panel_fill = Color32::from_rgb(34, 34, 34);
    style.visuals.faint_bg_color = Color32::from_rgb(44, 44, 44);
    style.visuals.extreme_bg_color = Color32::from_rgb(48, 48, 48);

    style.visuals.override_text_color = Some(Color32::from_rgb(240, 240, 240));

    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(55, 90, 127);
    style.visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(55, 90, 127);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(220, 220, 220));
    style.visuals.widgets.inactive.rounding = Rounding::same(4.0);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(70, 110, 150);
    style.visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(70, 110, 150);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.hovered.rounding = Rounding::same(4.0);

    style.visuals.widgets.active.bg_fill = ACCENT_BLUE;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.rounding = Rounding::same(4.0);

    style.visuals.selection.bg_fill = SUCCESS_GREEN;
    style.visuals.selection.stroke = Stroke::new(1.5, SUCCESS_GREEN);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

pub const ACCENT_BLUE: Color32 = Color32::from_rgb(52, 152, 219);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 188, 140);
pub const WARNING_AMBER: Color32 = Color32::from_rgb(243, 156, 18);
pub const ERROR_RED: Color32 = Color32::from_rgb(231, 76, 60);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(170, 170, 170);
