//! Stateless UI rendering for the guessing game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, ListState, Paragraph, Row, Table},
};

use super::app::App;
use chessguess_core::{Direction, GameState, GuessRecord, NationalityMatch, RevealLevel};

const ACCENT: Color = Color::Rgb(0x00, 0xAD, 0xB5);
const MATCH: Color = Color::Green;
const MASK: char = '•';

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(9), // Portrait + guess box
            Constraint::Min(5),    // History
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Guess The Chess Player")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let top = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    draw_portrait(frame, top[0], app.game());
    draw_guess_box(frame, top[1], app);
    draw_history(frame, chunks[2], app.game());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    if app.game().won() {
        draw_win_modal(frame, area, app.game());
    }
}

fn draw_portrait(frame: &mut Frame, area: Rect, game: &GameState) {
    let block = Block::default().title("Portrait").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let level = game.reveal_level();
    let label = obscure(game.target().portrait(), level);
    let portrait = Paragraph::new(label)
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(portrait, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ACCENT))
        .label(format!("blur {}px", level))
        .ratio(level.clarity());
    frame.render_widget(gauge, rows[1]);
}

fn draw_guess_box(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(format!("{}▏", app.query())).block(
        Block::default()
            .title("Guess The Chess Player")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(input, rows[0]);

    let items: Vec<ListItem> = app
        .suggestions()
        .into_iter()
        .map(|entry| ListItem::new(entry.name().to_string()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM))
        .highlight_style(Style::default().bg(ACCENT).fg(Color::Black))
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(app.highlighted());
    frame.render_stateful_widget(list, rows[1], &mut state);
}

fn draw_history(frame: &mut Frame, area: Rect, game: &GameState) {
    let header = Row::new(["Player", "Peak Elo", "Nationality", "Born Year", "Title"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = game.history().iter().map(history_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(32),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
        ],
    )
    .header(header)
    .block(Block::default().title("Guesses").borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn history_row(record: &GuessRecord) -> Row<'static> {
    let guessed = record.guessed();
    let feedback = record.comparison();

    Row::new([
        Cell::from(guessed.name().to_string()),
        ordinal_cell(guessed.rating().to_string(), feedback.rating),
        categorical_cell(guessed.nationality().to_string(), feedback.nationality),
        ordinal_cell(guessed.birth_year().to_string(), feedback.birth_year),
        ordinal_cell(guessed.title().label(), feedback.title),
    ])
}

/// Arrow pointing towards the target's value; none when equal.
pub fn arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Higher => "↑",
        Direction::Lower => "↓",
        Direction::Equal => "",
    }
}

fn ordinal_cell(value: String, direction: Direction) -> Cell<'static> {
    let style = if direction.is_equal() {
        Style::default().bg(MATCH).fg(Color::Black)
    } else {
        Style::default()
    };
    Cell::from(Line::from(vec![
        Span::raw(value),
        Span::raw(" "),
        Span::styled(arrow(direction), Style::default().fg(ACCENT)),
    ]))
    .style(style)
}

fn categorical_cell(value: String, outcome: NationalityMatch) -> Cell<'static> {
    let style = if outcome.is_equal() {
        Style::default().bg(MATCH).fg(Color::Black)
    } else {
        Style::default()
    };
    Cell::from(value).style(style)
}

fn draw_win_modal(frame: &mut Frame, area: Rect, game: &GameState) {
    let modal = center_rect(area, 50, 7);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Congratulations! You've guessed correctly."),
        Line::from(""),
        Line::from(Span::styled(
            game.target().name().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from("Play Again: Enter / r    Quit: q"),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(MATCH)));
    frame.render_widget(paragraph, modal);
}

/// Masks a portrait reference according to the reveal level.
///
/// Separators always show. Other characters appear in a fixed scattered
/// order as the level drops, all of them once it reaches zero.
pub fn obscure(portrait: &str, level: RevealLevel) -> String {
    let clarity = level.clarity();
    portrait
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if !c.is_alphanumeric() {
                return c;
            }
            let threshold = ((i * 37 + 11) % 100) as f64 / 100.0;
            if threshold < clarity { c } else { MASK }
        })
        .collect()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
