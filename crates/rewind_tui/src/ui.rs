//! Stateless UI rendering.
//!
//! Everything drawn here is read from [`App`] and the derived queries of
//! its game; rendering never mutates state.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{GameStatus, Player, Position, Square};

const HELP: &str = "arrows move  Enter play/jump  1-9 play  Tab focus  s sort  n new  q quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(21), Constraint::Min(20)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_info(frame, body[1], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default().title(title).borders(Borders::ALL).border_style(border)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Board;
    let separator = Line::styled("───┼───┼───", Style::default().fg(Color::DarkGray));

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(separator.clone());
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            if let Some(pos) = Position::from_row_col(row, col) {
                spans.push(cell_span(app, pos, focused));
            }
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel("Board", focused));
    frame.render_widget(board, area);
}

fn cell_span(app: &App, pos: Position, focused: bool) -> Span<'static> {
    let game = app.game();
    let (symbol, mut style) = match game.current_board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            format!(" {} ", player),
            Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
        ),
    };

    if game.is_winning_cell(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if focused && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let game = app.game();
    let status_style = match game.status() {
        GameStatus::InProgress { next } => Style::default().fg(player_color(next)),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(game.status_text())
        .style(status_style)
        .block(Block::default().title("Status").borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let items: Vec<ListItem> = game
        .move_list()
        .into_iter()
        .map(|item| {
            let style = if item.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if item.step == game.current_step() { "> " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(item.description.to_string(), style),
            ]))
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let title = if game.is_sort_ascending() {
        "Moves (oldest first)"
    } else {
        "Moves (newest first)"
    };
    let list = List::new(items)
        .block(panel(title, focused))
        .highlight_style(if focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        });

    let mut state = ListState::default().with_selected(Some(app.history_row()));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
