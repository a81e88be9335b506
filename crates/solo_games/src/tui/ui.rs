//! Stateless UI rendering for the setup screen, the board and the confetti.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use solo_tictactoe::{Cell, Mark, Party, Position, Snapshot, Status};

use super::app::{App, Screen};

/// Renders the whole frame for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Setup => draw_setup(frame, app),
        Screen::Playing => draw_game(frame, app),
    }
    draw_confetti(frame, app);
    if let Some(message) = app.popup() {
        draw_popup(frame, message);
    }
}

/// Status message for the current state of play.
pub fn status_line(snapshot: &Snapshot) -> String {
    let name = snapshot.player_name.as_deref().unwrap_or("Player");
    match snapshot.status {
        Status::Won(Party::Player) => format!("{} wins!", name),
        Status::Won(Party::Opponent) => "Computer wins!".to_string(),
        Status::Draw => "It's a draw!".to_string(),
        Status::InProgress => match snapshot.active_turn {
            Some(Party::Opponent) => "Computer's turn".to_string(),
            _ => format!("{}'s turn", name),
        },
    }
}

fn title(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
}

fn draw_setup(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Name
            Constraint::Length(3), // Mark
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    frame.render_widget(title("Tic Tac Toe"), chunks[0]);

    let name = Paragraph::new(format!("{}_", app.name_input()))
        .block(Block::default().borders(Borders::ALL).title("Enter your name"));
    frame.render_widget(name, chunks[1]);

    let choice = |mark: Mark| {
        let style = if mark == app.symbol_choice() {
            Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", mark), style)
    };
    let marks = Paragraph::new(Line::from(vec![choice(Mark::X), Span::raw("   "), choice(Mark::O)]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Choose your mark"));
    frame.render_widget(marks, chunks[2]);

    let help = Paragraph::new("Type your name, Tab to switch mark, Enter to start, Esc to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_game(frame: &mut Frame, app: &App) {
    let snapshot = app.engine().snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scores
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    frame.render_widget(title("Tic Tac Toe"), chunks[0]);
    draw_scores(frame, chunks[1], &snapshot);
    draw_board(frame, chunks[2], &snapshot, app.cursor());

    let mut status = status_line(&snapshot);
    if let Some(last) = app.last_move() {
        status = format!("{}  ({})", status, last);
    }
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("Arrows + Enter or 1-9 to play, r to reset, q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let name = snapshot.player_name.as_deref().unwrap_or("Player");
    let scores = snapshot.scores;
    let line = Line::from(vec![
        Span::styled(format!("{}: {}", name, scores.player_wins()), Style::default().fg(Color::Blue)),
        Span::raw("   "),
        Span::styled(format!("Computer: {}", scores.opponent_wins()), Style::default().fg(Color::Red)),
        Span::raw("   "),
        Span::styled(format!("Draws: {}", scores.draws()), Style::default().fg(Color::Gray)),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position) {
    let board_area = center_rect(area, 40, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..3 {
        let cells: Vec<Span> = (0..3)
            .filter_map(|col| Position::from_row_col(row, col))
            .flat_map(|pos| {
                let sep = if pos.col() < 2 { "│" } else { "" };
                [cell_span(snapshot, cursor, pos), Span::styled(sep, Style::default().fg(Color::DarkGray))]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(cells)).alignment(Alignment::Center),
            rows[row * 2],
        );
        if row < 2 {
            frame.render_widget(
                Paragraph::new("───────┼───────┼───────")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                rows[row * 2 + 1],
            );
        }
    }
}

fn cell_span(snapshot: &Snapshot, cursor: Position, pos: Position) -> Span<'static> {
    let (symbol, base_style) = match snapshot.board.get(pos) {
        Cell::Empty => (format!("   {}   ", pos.to_index() + 1), Style::default().fg(Color::DarkGray)),
        Cell::Marked(Mark::X) => (
            "   X   ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "   O   ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = snapshot.winning_triple.is_some_and(|t| t.contains(pos));
    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == cursor && !snapshot.status.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_confetti(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buffer = frame.buffer_mut();
    for particle in app.celebration().particles() {
        if !(0.0..1.0).contains(&particle.x) || !(0.0..1.0).contains(&particle.y) {
            continue;
        }
        let x = area.x + (particle.x * f32::from(area.width)) as u16;
        let y = area.y + (particle.y * f32::from(area.height)) as u16;
        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_symbol("*").set_fg(particle.color);
        }
    }
}

fn draw_popup(frame: &mut Frame, message: &str) {
    let area = center_rect(frame.area(), 44, 5);
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(format!("{}\n\nPress any key", message))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Notice"));
    frame.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
