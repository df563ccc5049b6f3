use egui::RichText;
use std::collections::VecDeque;

use crate::presenter::ErrorPresenter;

use super::super::styles;

/// Modal error dialog. Errors queue up and are dismissed one at a time.
#[derive(Default)]
pub struct ErrorDialog {
    pending: VecDeque<(String, String)>,
}

impl ErrorDialog {
    pub fn is_open(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some((title, message)) = self.pending.front() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(RichText::new(title.as_str()).color(styles::ERROR_RED))
            .id(egui::Id::new("error_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.label(RichText::new(message.as_str()).size(14.0));
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button(RichText::new("OK").size(14.0)).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.pending.pop_front();
        }
    }
}

impl ErrorPresenter for ErrorDialog {
    fn present(&mut self, title: &str, message: &str) {
        self.pending.push_back((title.to_string(), message.to_string()));
    }
}
