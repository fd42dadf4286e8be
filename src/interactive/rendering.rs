//! TUI rendering with ratatui
//!
//! Board, virtual keyboard, messages and the game-over overlay.

use super::app::{Hud, MessageStyle};
use super::layout::{ScreenLayout, VirtualKey, centered, keyboard_keys};
use crate::core::{Classification, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, Presenter, RevealStep, SessionView, Status};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use std::io;

/// Draws sessions onto a ratatui terminal
pub struct TerminalPresenter<'a, B: Backend> {
    pub terminal: &'a mut Terminal<B>,
    pub hud: &'a mut Hud,
}

impl<B: Backend> Presenter for TerminalPresenter<'_, B> {
    type Error = io::Error;

    fn render_frame(&mut self, view: &SessionView<'_>) -> io::Result<()> {
        let hud: &Hud = self.hud;
        self.terminal.draw(|f| ui(f, view, hud))?;
        Ok(())
    }

    fn reveal_step(&mut self, step: RevealStep) -> io::Result<()> {
        self.hud.last_step = Some(step);
        Ok(())
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, view: &SessionView<'_>, hud: &Hud) {
    let layout = ScreenLayout::new(f.area());

    render_header(f, layout.header);
    render_board(f, view, hud, layout.board);
    render_keyboard(f, view, &layout);
    render_messages(f, hud, layout.messages);
    render_status(f, view, hud, layout.status);

    if view.is_finished() {
        render_game_over(f, view, f.area());
    }
}

fn classification_style(class: Option<Classification>) -> Style {
    match class {
        Some(Classification::Green) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Yellow) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Grey) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_board(f: &mut Frame, view: &SessionView<'_>, hud: &Hud, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        if row > 0 {
            lines.push(Line::from(""));
        }
        lines.push(board_row(view, hud, row));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn board_row<'a>(view: &SessionView<'_>, hud: &Hud, row: usize) -> Line<'a> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    for position in 0..WORD_LENGTH {
        if position > 0 {
            spans.push(Span::raw(" "));
        }

        let span = if let Some(guess) = view.history.get(row) {
            let letter = char::from(guess.word.char_at(position));
            if view.is_tile_revealed(row, position) {
                let mut style = classification_style(Some(guess.feedback.at(position)));
                // Mark the tile that just flipped
                if view.is_revealing()
                    && hud
                        .last_step
                        .is_some_and(|s| s.row == row && s.position == position)
                {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                Span::styled(format!(" {letter} "), style)
            } else {
                Span::styled(
                    format!("[{letter}]"),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )
            }
        } else if row == view.history.len() && view.status == Status::InProgress {
            // Draft row
            match view.draft.letters().get(position) {
                Some(&letter) => Span::styled(
                    format!("[{}]", char::from(letter)),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" _ ", Style::default().fg(Color::Gray)),
            }
        } else {
            Span::styled(" · ", Style::default().fg(Color::DarkGray))
        };
        spans.push(span);
    }

    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, view: &SessionView<'_>, layout: &ScreenLayout) {
    let block = Block::default()
        .title(" Keyboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, layout.keyboard);

    for (rect, key) in keyboard_keys(layout.keyboard_inner()) {
        let style = match key {
            VirtualKey::Letter(letter) => match view.keyboard.get(letter) {
                None => Style::default().fg(Color::Black).bg(Color::Gray),
                known => classification_style(known),
            },
            VirtualKey::Enter | VirtualKey::Backspace => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        };
        f.render_widget(Paragraph::new(key.label()).style(style), rect);
    }
}

fn render_messages(f: &mut Frame, hud: &Hud, area: Rect) {
    let messages: Vec<ListItem> = hud
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

fn render_status(f: &mut Frame, view: &SessionView<'_>, hud: &Hud, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let attempts = Paragraph::new(format!("{} left", view.remaining_attempts))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        hud.stats.total_games,
        hud.stats.win_rate(),
        hud.stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if view.is_finished() {
        "n: New Game | q: Quit"
    } else if view.is_revealing() {
        "TAB: Skip | Ctrl-N: New | Esc: Quit"
    } else {
        "Enter: Submit | Ctrl-N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_game_over(f: &mut Frame, view: &SessionView<'_>, area: Rect) {
    let Some(answer) = view.answer else {
        return;
    };

    let (title, color) = match view.status {
        Status::Won => ("You Win!", Color::Green),
        _ => ("Game Over!", Color::Red),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                answer.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(
        view.history
            .iter()
            .map(|guess| Line::from(guess.feedback.to_emoji())),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n: new game | q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = centered(area, 34, lines.len() as u16 + 2);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        ),
        popup,
    );
}
