//! The price lookup form's state and the operations the front ends trigger.
//!
//! All mutable state (search results, active selection, details text,
//! watchlist, currency) is owned by [`PriceTracker`]. Operations run to
//! completion one at a time and return an error for the front end to hand
//! to its [`ErrorPresenter`](crate::presenter::ErrorPresenter).

mod currency;
pub mod report;

use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt;

use crate::api::{PriceOverview, SearchHit};
use crate::Result;

pub use currency::{Currency, CurrencyMode, EGP_SYMBOL, USD_SYMBOL};

/// Separator between title and id in a result line's label.
pub const SEPARATOR: &str = "||";

pub const NO_RESULTS: &str = "No results found.";
pub const INVALID_SELECTION: &str = "Please select a valid game from the list.";

/// The outbound calls the form depends on.
#[async_trait]
pub trait PriceBackend: Send + Sync {
    async fn search_games(&self, title: &str) -> Result<Vec<SearchHit>>;
    async fn price_overview(&self, game_id: &str) -> Result<PriceOverview>;
    async fn usd_to_egp_rate(&self) -> Result<f64>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameRef {
    pub title: String,
    pub game_id: String,
}

pub type SearchResult = GameRef;
pub type WatchlistEntry = GameRef;

impl GameRef {
    pub fn new(title: impl Into<String>, game_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            game_id: game_id.into(),
        }
    }
}

impl fmt::Display for GameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.title, SEPARATOR, self.game_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultLine {
    Game(SearchResult),
    Notice(String),
}

impl ResultLine {
    pub fn label(&self) -> String {
        match self {
            ResultLine::Game(game) => game.to_string(),
            ResultLine::Notice(text) => text.clone(),
        }
    }

    pub fn game(&self) -> Option<&SearchResult> {
        match self {
            ResultLine::Game(game) => Some(game),
            ResultLine::Notice(_) => None,
        }
    }
}

pub struct PriceTracker<B> {
    backend: B,
    results: Vec<ResultLine>,
    active: Option<usize>,
    details: String,
    watchlist: Vec<WatchlistEntry>,
    currency: Currency,
}

impl<B: PriceBackend> PriceTracker<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            results: Vec::new(),
            active: None,
            details: String::new(),
            watchlist: Vec::new(),
            currency: Currency::default(),
        }
    }

    pub fn results(&self) -> &[ResultLine] {
        &self.results
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_game(&self) -> Option<&GameRef> {
        self.active
            .and_then(|index| self.results.get(index))
            .and_then(ResultLine::game)
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn watchlist(&self) -> &[WatchlistEntry] {
        &self.watchlist
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn exchange_rate(&self) -> f64 {
        self.currency.rate
    }

    /// Fetch the USD to EGP multiplier. On failure the rate falls back to 1.
    pub async fn fetch_exchange_rate(&mut self) -> Result<f64> {
        match self.backend.usd_to_egp_rate().await {
            Ok(rate) => {
                self.currency.rate = rate;
                Ok(rate)
            }
            Err(e) => {
                log::error!("Exchange rate unavailable, using 1.0: {:?}", e);
                self.currency.rate = 1.0;
                Err(e)
            }
        }
    }

    /// Replace the results list with the catalog hits for `title`.
    ///
    /// An empty title does nothing. Old results and details are cleared before
    /// the request, so a failed search leaves both empty.
    pub async fn search_game(&mut self, title: &str) -> Result<()> {
        if title.is_empty() {
            return Ok(());
        }

        self.results.clear();
        self.active = None;
        self.details.clear();

        let hits = self.backend.search_games(title).await?;
        if hits.is_empty() {
            self.results.push(ResultLine::Notice(NO_RESULTS.to_string()));
            return Ok(());
        }

        let mut seen = HashSet::new();
        for hit in hits {
            if seen.insert(hit.title.clone()) {
                self.results
                    .push(ResultLine::Game(GameRef::new(hit.title, hit.id)));
            }
        }
        self.active = Some(self.results.len() - 1);
        log::debug!("Search for '{}' produced {} line(s)", title, self.results.len());

        Ok(())
    }

    /// Make a result line active. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.results.len() {
            self.active = Some(index);
        }
    }

    /// Fetch and render prices for the active game.
    pub async fn check_price(&mut self) -> Result<()> {
        self.details.clear();

        let Some(game) = self.active_game().cloned() else {
            self.details = INVALID_SELECTION.to_string();
            return Ok(());
        };

        let overview = self.backend.price_overview(&game.game_id).await?;
        self.details = match overview.prices.first() {
            Some(prices) => report::render(&game.title, prices, &self.currency)?,
            None => report::no_price_data(&game.title),
        };

        Ok(())
    }

    /// Append the active game to the watchlist unless it is already there.
    pub fn add_to_watchlist(&mut self) -> bool {
        let Some(game) = self.active_game() else {
            return false;
        };
        if self.watchlist.contains(game) {
            return false;
        }

        log::info!("Added '{}' to watchlist", game.title);
        let entry = game.clone();
        self.watchlist.push(entry);
        true
    }

    /// Show a watchlist entry as the only result and look up its price.
    pub async fn open_watchlist_entry(&mut self, index: usize) -> Result<()> {
        let Some(entry) = self.watchlist.get(index).cloned() else {
            return Ok(());
        };
        self.open_game(entry).await
    }

    /// Replace the results with `game`, select it and look up its price.
    pub async fn open_game(&mut self, game: GameRef) -> Result<()> {
        self.results = vec![ResultLine::Game(game)];
        self.active = Some(0);
        self.details.clear();
        self.check_price().await
    }

    /// Switch display currency and re-query the active game's prices.
    pub async fn toggle_currency(&mut self, egp: bool) -> Result<()> {
        self.set_currency_mode(CurrencyMode::from_egp_flag(egp));
        self.check_price().await
    }

    /// Change the display currency without touching the details text.
    pub fn set_currency_mode(&mut self, mode: CurrencyMode) {
        self.currency.mode = mode;
    }

    pub fn convert_price(&self, amount_usd: f64) -> String {
        self.currency.convert(amount_usd)
    }
}
