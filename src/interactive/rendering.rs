//! TUI rendering with ratatui
//!
//! Draws the tile grid, on-screen keyboard, and message log from session
//! state every frame; a cell's status color is shown only once the app says
//! the cell has flipped.

use super::app::{App, MessageStyle};
use crate::core::Status;
use crate::output::share_text;
use crate::settings::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board or finish panel
            Constraint::Length(5),  // Keyboard
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    if app.finish.is_some() {
        render_finish(f, app, chunks[1]);
    } else {
        render_board(f, app, chunks[1]);
    }

    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn base_fg(app: &App) -> Color {
    match app.settings.theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

fn status_style(status: Status) -> Style {
    let bg = match status {
        Status::Correct => Color::Green,
        Status::Present => Color::Yellow,
        Status::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🔠 WORDGRID - {} Mode", app.mode.name()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let fg = base_fg(app);

    let mut lines = vec![Line::default()];
    for row in 0..state.max_rows() {
        let mut spans = Vec::with_capacity(state.word_len());
        for col in 0..state.word_len() {
            let ch = state.cell(row, col);
            let text = match ch {
                Some(ch) => format!(" {ch} "),
                None => " · ".to_string(),
            };
            let style = match state.cell_status(row, col) {
                Some(status) if app.revealed(row, col) => status_style(status),
                _ if ch.is_some() => Style::default().fg(fg).add_modifier(Modifier::BOLD),
                _ => Style::default().fg(Color::DarkGray),
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_finish(f: &mut Frame, app: &App, area: Rect) {
    let Some(snapshot) = &app.finish else {
        return;
    };

    let (title, color) = if snapshot.win {
        (" 🎉 CONGRATULATIONS! 🎉 ", Color::Green)
    } else {
        (" Out of guesses ", Color::Red)
    };

    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                snapshot.answer.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center),
        Line::default(),
    ];
    for grid_line in share_text(snapshot, app.session.state().max_rows(), false).lines() {
        lines.push(Line::from(grid_line.to_string()).alignment(Alignment::Center));
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "n: New Game | q: Quit",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(panel, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let knowledge = app.session.state().keyboard();
    let fg = base_fg(app);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for letter in row.chars() {
                let style = match knowledge.status_of(letter) {
                    Some(status) => status_style(status),
                    None => Style::default().fg(fg),
                };
                spans.push(Span::styled(letter.to_string(), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let state = app.session.state();
    let attempt_text = if state.is_done() {
        "Game over".to_string()
    } else {
        format!("Guess {}/{}", state.row() + 1, state.max_rows())
    };
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let spellcheck_text = format!(
        "Spellcheck: {}",
        if app.settings.spellcheck { "on" } else { "off" }
    );
    let spellcheck = Paragraph::new(spellcheck_text).alignment(Alignment::Center);
    f.render_widget(spellcheck, chunks[1]);

    let help = Paragraph::new("Esc: Quit | ^R: Random | ^D: Daily | ^T: Theme | ^P: Spellcheck")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
