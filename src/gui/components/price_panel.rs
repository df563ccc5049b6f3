use egui::{Color32, RichText, ScrollArea, Vec2};

use super::super::styles;

pub enum PanelAction {
    CheckPrice,
    AddToWatchlist,
}

pub struct PricePanel;

impl PricePanel {
    pub fn show(ui: &mut egui::Ui, details: &str) -> Option<PanelAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            let check_button = egui::Button::new(
                RichText::new("💵 Check Price").size(15.0).strong().color(Color32::WHITE),
            )
            .fill(styles::ACCENT_BLUE)
            .min_size(Vec2::new(150.0, 34.0));
            if ui.add(check_button).clicked() {
                action = Some(PanelAction::CheckPrice);
            }

            ui.add_space(5.0);

            let watch_button = egui::Button::new(
                RichText::new("⭐ Add to Watchlist").size(15.0).color(Color32::BLACK),
            )
            .fill(styles::WARNING_AMBER)
            .min_size(Vec2::new(170.0, 34.0));
            if ui.add(watch_button).clicked() {
                action = Some(PanelAction::AddToWatchlist);
            }
        });

        ui.add_space(8.0);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                // Read-only but selectable, so links can be copied
                let mut text = details;
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .desired_width(f32::INFINITY)
                        .desired_rows(16)
                        .font(egui::TextStyle::Body),
                );
            });

        action
    }
}
