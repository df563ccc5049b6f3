use egui::{RichText, Vec2};

use crate::tracker::WatchlistEntry;

pub struct WatchlistPanel;

impl WatchlistPanel {
    /// One button per entry; returns the index of the clicked one.
    pub fn show(ui: &mut egui::Ui, entries: &[WatchlistEntry]) -> Option<usize> {
        let mut clicked = None;

        ui.label(RichText::new("🎯 Watchlist").size(16.0).strong());
        ui.add_space(5.0);

        if entries.is_empty() {
            ui.label(RichText::new("Nothing on your watchlist yet").color(egui::Color32::GRAY));
            return None;
        }

        egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
            for (index, entry) in entries.iter().enumerate() {
                let button = egui::Button::new(RichText::new(&entry.title).size(14.0))
                    .min_size(Vec2::new(ui.available_width(), 28.0));
                if ui.add(button).clicked() {
                    clicked = Some(index);
                }
            }
        });

        clicked
    }
}
