use egui::RichText;

use crate::tracker::{Currency, CurrencyMode};

use super::super::styles;

pub struct Header;

impl Header {
    pub fn show(ui: &mut egui::Ui, currency: Currency) {
        ui.horizontal(|ui| {
            ui.heading(
                RichText::new("Game Tracker.io")
                    .size(22.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let rate_text = match currency.mode {
                    CurrencyMode::Usd => format!("Prices in {}", currency.mode),
                    CurrencyMode::Egp => {
                        format!("1 {} = {} {}", CurrencyMode::Usd, currency.rate, currency.mode)
                    }
                };
                ui.label(RichText::new(rate_text).size(13.0).color(styles::TEXT_SECONDARY));
            });
        });
    }
}
