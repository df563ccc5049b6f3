use clap::{Parser, Subcommand};
use std::io::Write;
use tokio::runtime::Runtime;

use crate::presenter::{report, ErrorPresenter};
use crate::tracker::{CurrencyMode, GameRef, PriceBackend, PriceTracker};

#[derive(Parser)]
#[command(name = "game-tracker")]
#[command(author, version, about = "Game price lookup with an in-memory watchlist - GUI-first application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show prices in Egyptian pounds
    #[arg(long, global = true)]
    pub egp: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Search the catalog by title
    Search {
        /// Game title to search for
        title: String,
    },

    /// Show current and lowest prices for a game
    Price {
        /// Game title (searched unless --id is given)
        title: String,

        /// Catalog id of the game, skips the search
        #[arg(long)]
        id: Option<String>,
    },

    /// Show the USD to EGP conversion rate
    Rate,

    /// Launch the GUI
    Gui,
}

/// Run a non-GUI command, printing results to `out`.
///
/// Returns whether the command's own operation succeeded. A failed rate
/// fetch under `--egp` is presented but does not fail `price`, which then
/// prints at the fallback rate.
pub fn run_command<B: PriceBackend>(
    runtime: &Runtime,
    tracker: &mut PriceTracker<B>,
    command: Commands,
    egp: bool,
    presenter: &mut dyn ErrorPresenter,
    out: &mut dyn Write,
) -> bool {
    match command {
        Commands::Search { title } => {
            if report(presenter, runtime.block_on(tracker.search_game(&title))).is_none() {
                return false;
            }
            for line in tracker.results() {
                let _ = writeln!(out, "{}", line.label());
            }
            true
        }

        Commands::Price { title, id } => {
            if egp {
                report(presenter, runtime.block_on(tracker.fetch_exchange_rate()));
                tracker.set_currency_mode(CurrencyMode::Egp);
            }

            let result = match id {
                Some(id) => runtime.block_on(tracker.open_game(GameRef::new(title, id))),
                None => {
                    if report(presenter, runtime.block_on(tracker.search_game(&title))).is_none() {
                        return false;
                    }
                    tracker.select(0);
                    if tracker.active_game().is_none() {
                        for line in tracker.results() {
                            let _ = writeln!(out, "{}", line.label());
                        }
                        return true;
                    }
                    runtime.block_on(tracker.check_price())
                }
            };

            if report(presenter, result).is_none() {
                return false;
            }
            let _ = writeln!(out, "{}", tracker.details());
            true
        }

        Commands::Rate => match report(presenter, runtime.block_on(tracker.fetch_exchange_rate())) {
            Some(rate) => {
                let _ = writeln!(out, "1 USD = {} {}", rate, CurrencyMode::Egp);
                true
            }
            None => false,
        },

        // The GUI is launched by the caller
        Commands::Gui => true,
    }
}
