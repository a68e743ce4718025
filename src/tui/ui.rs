//! Stateless rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_plus::{GameMode, Player, Square};

use super::app::App;

/// Renders the full game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Countdown (Plus Mode)
            Constraint::Length(3),  // Status
        ])
        .split(area);

    let title_text = match app.session().mode() {
        GameMode::Normal => "TIC-TAC-TOE",
        GameMode::Plus => "TIC-TAC-TOE +",
    };
    let title = Paragraph::new(title_text)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);
    draw_countdown(frame, chunks[2], app);

    let status = Paragraph::new(format!(
        "{}  (1-9: place mark, r: reset, q: quit)",
        app.status_message()
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 23, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, row * 3 + col);
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: usize) {
    let state = app.session().state();
    let square = state.board().get(pos);

    let (symbol, mut style) = match square {
        Some(Square::Occupied(Player::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => ((pos + 1).to_string(), Style::default().fg(Color::DarkGray)),
    };

    // Highlight the completed line.
    if let Some(line) = state.winning_line()
        && line.contains(&pos)
    {
        style = style.bg(Color::Magenta);
    }

    let cell = Paragraph::new(format!("\n{}", symbol))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_countdown(frame: &mut Frame, area: Rect, app: &App) {
    let Some(timer) = app.session().timer() else {
        return;
    };

    let seconds = timer.seconds_remaining();
    let style = if seconds <= 1 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let countdown = Paragraph::new(format!("{} seconds left", seconds))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(countdown, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
