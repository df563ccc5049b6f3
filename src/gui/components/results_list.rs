use egui::{Color32, RichText, ScrollArea};

use crate::tracker::ResultLine;

pub struct ResultsList;

impl ResultsList {
    /// Returns the index of a line the user clicked.
    pub fn show(ui: &mut egui::Ui, lines: &[ResultLine], active: Option<usize>) -> Option<usize> {
        let mut clicked = None;

        ui.label(RichText::new("🔎 Search Results").size(16.0).strong());
        ui.add_space(5.0);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, line) in lines.iter().enumerate() {
                    let text = match line {
                        ResultLine::Game(_) => RichText::new(line.label()).size(14.0),
                        ResultLine::Notice(_) => {
                            RichText::new(line.label()).size(14.0).color(Color32::GRAY)
                        }
                    };
                    if ui.selectable_label(active == Some(index), text).clicked() {
                        clicked = Some(index);
                    }
                }
            });

        clicked
    }
}
