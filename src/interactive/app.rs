//! TUI application state and logic

use super::input::{Action, map_key, map_mouse};
use super::rendering::TerminalPresenter;
use crate::core::GameError;
use crate::game::{RevealStep, Session, Status, WordSource};
use crate::stats::Statistics;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input when nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Everything on screen that is not the game itself
#[derive(Debug, Default, Clone)]
pub struct Hud {
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub last_step: Option<RevealStep>,
}

impl Hud {
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last few messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Application state
pub struct App<W: WordSource> {
    pub session: Session,
    pub hud: Hud,
    pub should_quit: bool,
    source: W,
    reveal_delay: Duration,
    next_reveal_at: Option<Instant>,
    recorded: bool,
}

impl<W: WordSource> App<W> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `GameError::SourceUnavailable` if the first answer cannot be drawn.
    pub fn new(mut source: W, reveal_delay: Duration) -> Result<Self, GameError> {
        let session = Session::start(&mut source)?;

        let mut hud = Hud::default();
        hud.add_message(
            "Guess the 5-letter word in 6 tries. Type and press Enter.",
            MessageStyle::Info,
        );
        hud.add_message("You can also click the keyboard below.", MessageStyle::Info);

        Ok(Self {
            session,
            hud,
            should_quit: false,
            source,
            reveal_delay,
            next_reveal_at: None,
            recorded: false,
        })
    }

    /// Apply one player action
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Type(c) => {
                self.session.append_char(c);
            }
            Action::Backspace => {
                self.session.backspace();
            }
            Action::Submit => self.submit(now),
            Action::SkipReveal => {
                if self.session.skip_reveal() > 0 {
                    self.finish_reveal();
                }
            }
            Action::NewGame => self.new_game(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.session.commit() {
            Ok(_) => {
                // First tile flips right away
                self.next_reveal_at = Some(now);
            }
            Err(GameError::IncompleteGuess(_)) => {
                self.hud
                    .add_message("Not enough letters!", MessageStyle::Error);
            }
            // Enter pressed mid-reveal; nothing to report
            Err(GameError::RevealActive) => {}
            Err(e) => self.hud.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        match Session::start(&mut self.source) {
            Ok(session) => {
                self.session = session;
                self.next_reveal_at = None;
                self.recorded = false;
                self.hud.last_step = None;
                self.hud.messages.clear();
                self.hud
                    .add_message("New game started! Good luck.", MessageStyle::Info);
            }
            Err(e) => {
                // Keep playing the current session
                self.hud.add_message(
                    &format!("Could not start a new game: {e}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Time until the next reveal step is due, if one is pending
    #[must_use]
    pub fn reveal_timeout(&self, now: Instant) -> Option<Duration> {
        self.next_reveal_at
            .map(|due| due.saturating_duration_since(now))
    }

    /// Emit the next reveal step if it is due
    ///
    /// # Errors
    ///
    /// Propagates terminal I/O errors.
    pub fn tick<B: Backend>(&mut self, now: Instant, terminal: &mut Terminal<B>) -> io::Result<()> {
        let Some(due) = self.next_reveal_at else {
            return Ok(());
        };
        if now < due {
            return Ok(());
        }

        let mut presenter = TerminalPresenter {
            terminal,
            hud: &mut self.hud,
        };
        self.session.advance_reveal(&mut presenter)?;

        if self.session.is_revealing() {
            self.next_reveal_at = Some(now + self.reveal_delay);
        } else {
            self.finish_reveal();
        }
        Ok(())
    }

    /// Draw the current frame
    ///
    /// # Errors
    ///
    /// Propagates terminal I/O errors.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.session.present(&mut TerminalPresenter {
            terminal,
            hud: &mut self.hud,
        })
    }

    fn finish_reveal(&mut self) {
        self.next_reveal_at = None;

        let status = self.session.status();
        if !status.is_terminal() || self.recorded {
            return;
        }
        self.recorded = true;

        let guess_count = self.session.game().attempts_used();
        self.hud.stats.record(status, guess_count);

        if status == Status::Won {
            // Celebration message based on guess count
            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.hud.add_message(celebration, MessageStyle::Success);
        } else {
            self.hud
                .add_message("Out of guesses. Better luck next time!", MessageStyle::Error);
        }
        self.hud
            .add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Whether the finished-game overlay is showing
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.view().is_finished()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, W: WordSource>(terminal: &mut Terminal<B>, mut app: App<W>) -> Result<()> {
    loop {
        app.draw(terminal)?;

        // Never block past the next reveal step, so quitting and resizing stay
        // responsive mid-animation
        let timeout = app.reveal_timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => map_key(key, app.is_finished()),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    map_mouse(mouse, Rect::new(0, 0, size.width, size.height))
                }
                _ => None,
            };
            if let Some(action) = action {
                app.handle_action(action, Instant::now());
            }
        }

        app.tick(Instant::now(), terminal)?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
