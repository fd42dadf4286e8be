//! Input adapter
//!
//! Translates crossterm key presses and clicks on the virtual keyboard into
//! game actions.

use super::layout::{ScreenLayout, VirtualKey, key_at};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Type(char),
    Backspace,
    Submit,
    SkipReveal,
    NewGame,
    Quit,
}

impl From<VirtualKey> for Action {
    fn from(key: VirtualKey) -> Self {
        match key {
            VirtualKey::Letter(letter) => Self::Type(char::from(letter)),
            VirtualKey::Enter => Self::Submit,
            VirtualKey::Backspace => Self::Backspace,
        }
    }
}

/// Map a key press
///
/// Once the game is finished, plain `q` and `n` quit and start over; during
/// play every letter goes to the draft.
#[must_use]
pub fn map_key(key: KeyEvent, finished: bool) -> Option<Action> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::NewGame),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('q') if finished => Some(Action::Quit),
        KeyCode::Char('n') if finished => Some(Action::NewGame),
        KeyCode::Char(c) if !ctrl => Some(Action::Type(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab => Some(Action::SkipReveal),
        _ => None,
    }
}

/// Map a left click on the virtual keyboard
#[must_use]
pub fn map_mouse(event: MouseEvent, screen: Rect) -> Option<Action> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let keyboard = ScreenLayout::new(screen).keyboard_inner();
    key_at(keyboard, event.column, event.row).map(Action::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::layout::keyboard_keys;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 40,
    };

    #[test]
    fn letters_type_during_play() {
        assert_eq!(map_key(press(KeyCode::Char('q')), false), Some(Action::Type('q')));
        assert_eq!(map_key(press(KeyCode::Char('n')), false), Some(Action::Type('n')));
    }

    #[test]
    fn q_and_n_control_game_when_finished() {
        assert_eq!(map_key(press(KeyCode::Char('q')), true), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Char('n')), true), Some(Action::NewGame));
    }

    #[test]
    fn control_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, false), Some(Action::Quit));
        assert_eq!(map_key(ctrl_n, false), Some(Action::NewGame));
        assert_eq!(map_key(ctrl_x, false), None);
        assert_eq!(map_key(press(KeyCode::Esc), false), Some(Action::Quit));
    }

    #[test]
    fn editing_keys() {
        assert_eq!(map_key(press(KeyCode::Backspace), false), Some(Action::Backspace));
        assert_eq!(map_key(press(KeyCode::Enter), false), Some(Action::Submit));
        assert_eq!(map_key(press(KeyCode::Tab), false), Some(Action::SkipReveal));
        assert_eq!(map_key(press(KeyCode::F(1)), false), None);
    }

    #[test]
    fn key_release_ignored() {
        let mut release = press(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release, false), None);
    }

    #[test]
    fn click_on_keyboard_maps_to_key() {
        let inner = ScreenLayout::new(SCREEN).keyboard_inner();
        for (rect, key) in keyboard_keys(inner) {
            assert_eq!(map_mouse(click(rect.x + 1, rect.y), SCREEN), Some(Action::from(key)));
        }
    }

    #[test]
    fn click_outside_keyboard_ignored() {
        assert_eq!(map_mouse(click(0, 0), SCREEN), None);

        let inner = ScreenLayout::new(SCREEN).keyboard_inner();
        let (rect, _) = keyboard_keys(inner)[0];
        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click(rect.x, rect.y)
        };
        assert_eq!(map_mouse(right_click, SCREEN), None);
    }

    #[test]
    fn virtual_keys_become_actions() {
        assert_eq!(Action::from(VirtualKey::Letter(b'A')), Action::Type('A'));
        assert_eq!(Action::from(VirtualKey::Enter), Action::Submit);
        assert_eq!(Action::from(VirtualKey::Backspace), Action::Backspace);
    }
}
