//! TUI rendering with ratatui
//!
//! Draws the guess grid, the keyboard and the message log.

use super::app::{App, InputMode, Message, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::core::{MAX_ROUNDS, Phase, Verdict, WORD_LEN};
use crate::output::KEYBOARD_ROWS;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - grid on the left, keyboard and info on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORTLE - Guess the German word")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

const fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

/// The 6x5 guess grid: evaluated rows, the row being typed, empty rows
fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let typed: Vec<char> = app.input.chars().collect();
    let typing_row = if app.session.is_terminal() {
        None
    } else {
        Some(history.len())
    };

    let mut lines = Vec::with_capacity(MAX_ROUNDS as usize * 2);
    for row in 0..MAX_ROUNDS as usize {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);

        for col in 0..WORD_LEN {
            let span = if let Some(record) = history.get(row) {
                Span::styled(
                    format!(" {} ", record.guess.letter_at(col)),
                    verdict_style(record.result.verdict_at(col)),
                )
            } else if typing_row == Some(row) {
                match typed.get(col) {
                    Some(ch) => Span::styled(
                        format!(" {ch} "),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                }
            } else {
                Span::styled(" _ ", Style::default().fg(Color::DarkGray))
            };

            spans.push(span);
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(7), // Stats
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

/// Keyboard with each guessed letter in its best-known color
fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(" ".repeat(i * 2))];
            for letter in row.chars() {
                let style = match keyboard.verdict_for(letter) {
                    Some(verdict) => verdict_style(verdict),
                    None => Style::default(),
                };
                spans.push(Span::styled(format!(" {letter} "), style));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let round_line = match app.session.phase() {
        Phase::AwaitingGuess { round } => format!("Round:       {round}/{MAX_ROUNDS}"),
        Phase::Won { rounds_used } => format!("Won in:      {rounds_used}/{MAX_ROUNDS}"),
        Phase::Lost => "Lost".to_string(),
    };

    let mut lines = vec![
        Line::from(round_line),
        Line::from(format!("Games:       {}", stats.total_games)),
        Line::from(format!(
            "Won:         {} ({:.0}%)",
            stats.wins,
            stats.win_rate()
        )),
    ];
    if let Some(average) = stats.average_rounds {
        lines.push(Line::from(format!("Avg guesses: {average:.2}")));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app.messages.iter().map(message_item).collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn message_item(message: &Message) -> ListItem<'_> {
    let style = match message.style {
        MessageStyle::Info => Style::default().fg(Color::Gray),
        MessageStyle::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };
    ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Typing => "Type letters | Enter: submit | Backspace: delete | Esc: quit",
        InputMode::GameOver => "n: new game | q: quit",
    };

    let status = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
