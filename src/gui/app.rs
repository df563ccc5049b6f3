use eframe::egui;
use tokio::runtime::Runtime;

use crate::api::HttpBackend;
use crate::presenter::report;
use crate::tracker::{CurrencyMode, PriceTracker};

use super::components::{
    ErrorDialog, Header, PanelAction, PricePanel, ResultsList, SearchBar, SearchBarAction,
    WatchlistPanel,
};
use super::styles;

enum FormAction {
    Search,
    Select(usize),
    CheckPrice,
    AddToWatchlist,
    ToggleCurrency(bool),
    OpenWatchlist(usize),
}

/// The price lookup window.
///
/// Handlers block on `runtime` until their request finishes, so the window
/// does not repaint while a call is in flight.
pub struct TrackerApp {
    runtime: Runtime,
    tracker: PriceTracker<HttpBackend>,
    search_query: String,
    egp_mode: bool,
    error_dialog: ErrorDialog,
}

impl TrackerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        mut tracker: PriceTracker<HttpBackend>,
        egp_mode: bool,
    ) -> Self {
        styles::setup_custom_style(&cc.egui_ctx);

        let mut error_dialog = ErrorDialog::default();
        report(&mut error_dialog, runtime.block_on(tracker.fetch_exchange_rate()));
        tracker.set_currency_mode(CurrencyMode::from_egp_flag(egp_mode));

        Self {
            runtime,
            tracker,
            search_query: String::new(),
            egp_mode,
            error_dialog,
        }
    }

    fn handle(&mut self, action: FormAction) {
        match action {
            FormAction::Search => {
                let result = self
                    .runtime
                    .block_on(self.tracker.search_game(&self.search_query));
                report(&mut self.error_dialog, result);
            }
            FormAction::Select(index) => self.tracker.select(index),
            FormAction::CheckPrice => {
                let result = self.runtime.block_on(self.tracker.check_price());
                report(&mut self.error_dialog, result);
            }
            FormAction::AddToWatchlist => {
                self.tracker.add_to_watchlist();
            }
            FormAction::ToggleCurrency(egp) => {
                let result = self.runtime.block_on(self.tracker.toggle_currency(egp));
                report(&mut self.error_dialog, result);
            }
            FormAction::OpenWatchlist(index) => {
                let result = self
                    .runtime
                    .block_on(self.tracker.open_watchlist_entry(index));
                report(&mut self.error_dialog, result);
            }
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Everything behind the dialog is disabled while it is open
        let enabled = !self.error_dialog.is_open();
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.add_space(6.0);
                Header::show(ui, self.tracker.currency());
                ui.add_space(4.0);
                match SearchBar::show(ui, &mut self.search_query, &mut self.egp_mode) {
                    Some(SearchBarAction::Search) => action = Some(FormAction::Search),
                    Some(SearchBarAction::ToggleCurrency(egp)) => {
                        action = Some(FormAction::ToggleCurrency(egp))
                    }
                    None => {}
                }
                ui.add_space(6.0);
            });
        });

        egui::TopBottomPanel::bottom("watchlist_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.add_space(6.0);
                    if let Some(index) = WatchlistPanel::show(ui, self.tracker.watchlist()) {
                        action = Some(FormAction::OpenWatchlist(index));
                    }
                    ui.add_space(6.0);
                });
            });

        egui::SidePanel::left("results_panel")
            .resizable(true)
            .default_width(520.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    if let Some(index) = ResultsList::show(
                        ui,
                        self.tracker.results(),
                        self.tracker.active_index(),
                    ) {
                        action = Some(FormAction::Select(index));
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                match PricePanel::show(ui, self.tracker.details()) {
                    Some(PanelAction::CheckPrice) => action = Some(FormAction::CheckPrice),
                    Some(PanelAction::AddToWatchlist) => {
                        action = Some(FormAction::AddToWatchlist)
                    }
                    None => {}
                }
            });
        });

        self.error_dialog.show(ctx);

        if let Some(action) = action {
            self.handle(action);
            ctx.request_repaint();
        }
    }
}
