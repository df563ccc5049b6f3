use egui::RichText;

pub enum SearchBarAction {
    Search,
    ToggleCurrency(bool),
}

pub struct SearchBar;

impl SearchBar {
    pub fn show(
        ui: &mut egui::Ui,
        search_query: &mut String,
        egp_mode: &mut bool,
    ) -> Option<SearchBarAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Game Title:").size(14.0));
            ui.add_space(5.0);

            let search_edit = egui::TextEdit::singleline(search_query)
                .hint_text("Search games...")
                .desired_width((ui.available_width() - 260.0).max(120.0));
            let response = ui.add(search_edit);

            // Enter in the text field behaves like the button
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button(RichText::new("🔍 Search Game").size(14.0)).clicked() || submitted {
                action = Some(SearchBarAction::Search);
            }

            ui.add_space(10.0);

            if ui.checkbox(egp_mode, RichText::new("EGP Mode").size(14.0)).changed() {
                action = Some(SearchBarAction::ToggleCurrency(*egp_mode));
            }
        });

        action
    }
}
