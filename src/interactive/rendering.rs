//! TUI rendering with ratatui
//!
//! Two guess grids, the keyboard and the duel status.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, SubGame};
use crate::output::keyboard::ROWS;
use crate::solver::GuessSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(10), // Grids
            Constraint::Min(5),     // Keyboard and messages
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let grids = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_human_grid(f, app, grids[0]);
    render_opponent_grid(f, app, grids[1]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_keyboard(f, app, lower[0]);
    if app.show_word_bank {
        render_word_bank(f, app, lower[1]);
    } else {
        render_messages(f, app, lower[1]);
    }

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🎯 WORDLE DUEL - {} difficulty", app.difficulty()))
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

const fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, verdict: Option<Verdict>) -> Span<'static> {
    let style = match verdict {
        Some(v) => Style::default()
            .fg(Color::Black)
            .bg(verdict_color(v))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {letter} "), style)
}

/// One line per attempt; `pending` fills the next free row
fn grid_lines(game: &SubGame, pending: Option<&str>) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = game
        .guesses()
        .iter()
        .map(|(word, verdicts)| {
            Line::from(
                word.chars()
                    .iter()
                    .zip(verdicts)
                    .map(|(&letter, &verdict)| tile(char::from(letter), Some(verdict)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if let Some(pending) = pending.filter(|_| lines.len() < MAX_ATTEMPTS) {
        let mut letters: Vec<char> = pending.chars().collect();
        letters.resize(WORD_LENGTH, '_');
        lines.push(Line::from(
            letters.into_iter().map(|c| tile(c, None)).collect::<Vec<_>>(),
        ));
    }

    while lines.len() < MAX_ATTEMPTS {
        lines.push(Line::styled(
            " · ".repeat(WORD_LENGTH),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines
}

fn grid_block(title: String, color: Color) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(color))
}

fn render_human_grid(f: &mut Frame, app: &App, area: Rect) {
    let human = app.session.human();
    let pending = (app.input_mode() == InputMode::Guessing).then_some(app.input_buffer.as_str());

    let mut lines = grid_lines(human, pending);
    lines.push(Line::from(format!("{}/{MAX_ATTEMPTS} attempts", human.attempts())));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(grid_block(" You ".to_string(), Color::Cyan));
    f.render_widget(paragraph, area);
}

fn render_opponent_grid(f: &mut Frame, app: &App, area: Rect) {
    let opponent = app.session.opponent();
    let mut lines = grid_lines(opponent.sub_game(), None);

    let status = if app.is_thinking() {
        Line::styled(
            "🤔 Thinking...",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        let source = match app.last_opponent.as_ref().map(|d| (d.source, d.stats)) {
            Some((GuessSource::Search, stats)) if stats.nodes > 0 => {
                format!(" | {} nodes, {} cutoffs", stats.nodes, stats.cutoffs)
            }
            Some((GuessSource::Opener, _)) => " | opener".to_string(),
            Some((GuessSource::Random, _)) => " | random pick".to_string(),
            _ => String::new(),
        };
        Line::from(format!("{} candidates{source}", opponent.pool().len()))
    };
    lines.push(status);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(grid_block(
            format!(" Opponent ({}) ", app.difficulty()),
            Color::Magenta,
        ));
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|letter| tile(letter, app.keyboard.get(letter as u8)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_word_bank(f: &mut Frame, app: &App, area: Rect) {
    let words: Vec<&str> = app.word_bank().iter().map(|w| w.text()).collect();
    let paragraph = Paragraph::new(words.join(" "))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" Word Bank ({}) ", words.len()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode() {
        InputMode::GameOver => {
            let summary = app
                .session
                .outcome()
                .map(|outcome| {
                    format!(
                        "{} Your word: {}. Opponent's word: {}.",
                        outcome.summary(),
                        outcome.human_target,
                        outcome.opponent_target
                    )
                })
                .unwrap_or_default();
            (
                " 🏁 GAME OVER | Press 'n' for new game or 'q' to quit ",
                summary,
                Color::Green,
            )
        }
        InputMode::Guessing => (
            " Your Guess (5 letters, Enter to submit) ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
        InputMode::OpponentThinking => (
            " Waiting for the opponent ",
            String::new(),
            Color::DarkGray,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | You: {} | Opponent: {} | Draws: {}",
        app.stats.total_games, app.stats.human_wins, app.stats.opponent_wins, app.stats.draws
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Esc: Quit | Tab: Difficulty | Ctrl-N: New | ?: Word Bank")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
