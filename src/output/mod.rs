//! Terminal output formatting
//!
//! Display utilities for line-mode play and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_guess, print_keyboard, print_outcome,
    print_statistics,
};
