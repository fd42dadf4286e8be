//! Wordle Game
//!
//! Terminal Wordle: guess evaluation with exact duplicate-letter rules, a turn
//! state machine, tile-by-tile reveal and a ratatui front-end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameState, Status};
//!
//! let mut game = GameState::new(Word::new("allow").unwrap());
//!
//! let guess = game.submit_text("lolly").unwrap();
//! assert_eq!(guess.feedback.to_emoji(), "🟨🟨🟩⬜⬜");
//!
//! game.submit_text("allow").unwrap();
//! assert_eq!(game.status(), Status::Won);
//! ```

// Core domain types
pub mod core;

// Game rules and turn flow
pub mod game;

// Word lists and answer sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Win/loss tracking
pub mod stats;
