use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use formfill::app::App;
use formfill::cli::Cli;
use formfill::client::ApiClient;
use formfill::client::worker::spawn_worker;
use formfill::config;
use formfill::form::loader::load_template;

/// How often the UI wakes up to poll worker responses and expire toasts
const TICK_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging();

    let template = load_template(&cli.template)
        .wrap_err_with(|| format!("Failed to load template {}", cli.template.display()))?;

    let config = match &cli.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.server.base_url.clone());
    let timeout = Duration::from_millis(config.server.timeout_ms);
    let client = ApiClient::new(&base_url, timeout)
        .wrap_err_with(|| format!("Failed to create API client for {}", base_url))?;

    let output_dir = cli
        .output_dir
        .clone()
        .or_else(|| config.export.output_dir.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut app = App::new(template, config, output_dir);
    app.document_name = cli.document_name.clone();
    if let Some(form_type) = cli.form_type.clone() {
        app.form_type = form_type;
    }

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(client, request_rx, response_tx);
    app.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}

/// Debug logging to a file named by FORMFILL_LOG. Logging to the
/// terminal would corrupt the TUI, so it stays off otherwise.
fn init_logging() {
    let Ok(path) = std::env::var("FORMFILL_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
