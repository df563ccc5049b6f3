// GUI Components module
mod error_dialog;
mod header;
mod price_panel;
mod results_list;
mod search_bar;
mod watchlist;

pub use error_dialog::ErrorDialog;
pub use header::Header;
pub use price_panel::{PanelAction, PricePanel};
pub use results_list::ResultsList;
pub use search_bar::{SearchBar, SearchBarAction};
pub use watchlist::WatchlistPanel;
