use anyhow::Result;
use christoffels_kitchen::app::App;
use christoffels_kitchen::cli::Cli;
use christoffels_kitchen::config::{get_log_dir, Config};
use christoffels_kitchen::styles::init_theme;
use clap::Parser;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands print to stdout and never touch the terminal or the log file
    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("kitchen.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "kitchen.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let mut config = Config::load_or_create(&config_path)?;
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    init_theme(config.theme_type());
    info!("Using theme {:?} and {} keymap", config.theme_type(), config.keymap.preset.name());

    let mut app = App::new(config, config_path)?;
    let result = app.run();

    drop(guard);
    result
}
