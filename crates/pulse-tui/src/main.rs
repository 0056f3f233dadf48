//! pulse-tui - Aqua Pulse Terminal UI
//!
//! Terminal dashboard for groundwater readings from the DWLR station
//! network. All state is local to the session - alert outcomes, the
//! viewing role, and display toggles never leave the terminal.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pulse_tui::app::App;
use pulse_tui::data;
use pulse_tui::events::{AppEvent, EventHandler, handle_key};
use pulse_tui::ui;

#[derive(Parser)]
#[command(name = "pulse-tui")]
#[command(about = "Aqua Pulse Terminal UI - Groundwater monitoring dashboard")]
#[command(version)]
struct Cli {
    /// Animation tick rate in milliseconds
    #[arg(long, default_value = "80")]
    tick_rate: u64,

    /// Demo feed update interval in seconds
    #[arg(long, default_value = "2")]
    feed_interval: u64,

    /// Disable the demo feed and show static seed data
    #[arg(long)]
    frozen: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging (to stderr, not the drawn terminal)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("pulse_tui=debug".parse()?))
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run application
    let result = run_app(&mut terminal, cli).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cli: Cli,
) -> anyhow::Result<()> {
    let mut app = App::new()?;
    let tick_rate = Duration::from_millis(cli.tick_rate.max(1));
    let feed_interval = Duration::from_secs(cli.feed_interval.max(1));

    let mut event_handler = EventHandler::new(tick_rate);

    if !cli.frozen {
        let tx = event_handler.sender();
        tokio::spawn(async move {
            data::run_demo_feed(tx, feed_interval).await;
        });
    }

    // Main loop
    while app.running {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Some(event) = event_handler.next().await {
            match event {
                AppEvent::Key(key) => {
                    handle_key(&mut app, key);
                }
                AppEvent::Resize(_, _) => {
                    // Terminal will redraw automatically
                }
                AppEvent::Tick => {
                    app.ornaments.tick(tick_rate);
                }
                AppEvent::DataUpdate(data_event) => {
                    data::apply_data_event(&mut app, data_event);
                }
            }
        }
    }

    Ok(())
}
