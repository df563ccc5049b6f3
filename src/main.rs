use anyhow::Context;
use clap::Parser;
use game_tracker::{
    api::HttpBackend,
    cli::{run_command, Cli, Commands},
    config::Config,
    presenter::StderrPresenter,
    tracker::PriceTracker,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::debug!("Configuration loaded");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let backend = HttpBackend::new(&config).context("Failed to create HTTP clients")?;
    let mut tracker = PriceTracker::new(backend);

    // Launch GUI by default if no command is specified
    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            use game_tracker::gui::TrackerApp;

            let native_options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([1400.0, 800.0])
                    .with_min_inner_size([900.0, 600.0])
                    .with_title("Game Tracker.io"),
                ..Default::default()
            };

            let egp = cli.egp;
            if let Err(e) = eframe::run_native(
                "Game Tracker.io",
                native_options,
                Box::new(move |cc| Ok(Box::new(TrackerApp::new(cc, runtime, tracker, egp)))),
            ) {
                eprintln!("Failed to run GUI: {}", e);
                std::process::exit(1);
            }
        }

        command => {
            let mut presenter = StderrPresenter;
            let mut stdout = std::io::stdout().lock();
            if !run_command(
                &runtime,
                &mut tracker,
                command,
                cli.egp,
                &mut presenter,
                &mut stdout,
            ) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
