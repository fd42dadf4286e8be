//! Screen geometry
//!
//! Shared by the renderer and the mouse hit-test so a click always lands on
//! the key that was drawn there.

use crate::game::MAX_ATTEMPTS;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

const KEY_GAP: u16 = 1;
/// Blank line between key rows and between board rows
const ROW_PITCH: u16 = 2;

/// Height of the board block: one line per row, a gap between rows, borders
pub const BOARD_HEIGHT: u16 = MAX_ATTEMPTS as u16 * ROW_PITCH - 1 + 2;
/// Height of the keyboard block
pub const KEYBOARD_HEIGHT: u16 = KEYBOARD_ROWS.len() as u16 * ROW_PITCH - 1 + 2;

/// A key on the virtual keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualKey {
    Letter(u8),
    Enter,
    Backspace,
}

impl VirtualKey {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => format!(" {} ", char::from(letter)),
            Self::Enter => " ENTER ".to_string(),
            Self::Backspace => " DEL ".to_string(),
        }
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.label().len() as u16
    }
}

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub keyboard: Rect,
    pub messages: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Header
                Constraint::Length(BOARD_HEIGHT),    // Guess grid
                Constraint::Length(KEYBOARD_HEIGHT), // Virtual keyboard
                Constraint::Min(3),                  // Messages
                Constraint::Length(1),               // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            board: chunks[1],
            keyboard: chunks[2],
            messages: chunks[3],
            status: chunks[4],
        }
    }

    /// Inside of the keyboard block, where the keys go
    #[must_use]
    pub fn keyboard_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.keyboard)
    }
}

/// Keys of the virtual keyboard in row order
fn key_rows() -> [Vec<VirtualKey>; 3] {
    let letters = |row: &str| row.bytes().map(VirtualKey::Letter).collect::<Vec<_>>();

    let mut bottom = vec![VirtualKey::Enter];
    bottom.extend(letters(KEYBOARD_ROWS[2]));
    bottom.push(VirtualKey::Backspace);

    [letters(KEYBOARD_ROWS[0]), letters(KEYBOARD_ROWS[1]), bottom]
}

/// Every key with the rectangle it occupies inside `area`
///
/// Rows are centered; keys that do not fit are left out.
#[must_use]
pub fn keyboard_keys(area: Rect) -> Vec<(Rect, VirtualKey)> {
    let mut keys = Vec::new();

    for (row_index, row) in key_rows().iter().enumerate() {
        let y = area.y + row_index as u16 * ROW_PITCH;
        if y >= area.bottom() {
            break;
        }

        let row_width: u16 =
            row.iter().map(|k| k.width()).sum::<u16>() + KEY_GAP * (row.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for &key in row {
            let width = key.width();
            if x + width > area.right() {
                break;
            }
            keys.push((Rect::new(x, y, width, 1), key));
            x += width + KEY_GAP;
        }
    }

    keys
}

/// The key drawn at a screen position, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<VirtualKey> {
    keyboard_keys(area)
        .into_iter()
        .find(|(rect, _)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(_, key)| key)
}

/// Centered rectangle of a fixed size, clamped to `area`
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
