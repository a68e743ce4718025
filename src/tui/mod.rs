//! Terminal UI for Tic-Tac-Toe +.

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tictactoe_plus::{GameMode, TurnClock};
use tokio::sync::mpsc;
use tracing::{error, info};

use app::App;

/// Runs the TUI for the given game mode until the player quits.
pub async fn run(mode: GameMode) -> Result<()> {
    // Log to a file so tracing output doesn't fight the TUI for the screen.
    let log_file = std::fs::File::create("tictactoe_plus.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(%mode, "starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, mode).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "game loop error");
        eprintln!("Error: {:?}", err);
    }

    res
}

/// Event loop: render, handle key presses, drain clock ticks.
///
/// Events reach the session strictly one at a time; the clock runs as a
/// background task but its ticks are queued on a channel and applied here,
/// between renders, on this single logical thread of control.
async fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mode: GameMode,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let mut app = App::new(mode);

    // Plus Mode arms the turn clock; the handle stops the task on drop
    // when this screen exits.
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let _clock = match mode {
        GameMode::Plus => Some(TurnClock::start(tick_tx)),
        GameMode::Normal => None,
    };

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if app.should_quit() {
            info!("player quit");
            return Ok(());
        }

        // Keyboard input (non-blocking poll keeps the tick queue fresh).
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key.code);
        }

        while tick_rx.try_recv().is_ok() {
            app.handle_tick();
        }
    }
}
