//! Keyboard Module - recognized key tokens
//!
//! The run loop only reacts to a handful of keys. Everything crossterm
//! reports is narrowed down to a [`Key`] here; anything else is ignored.
//!
//! | key | token |
//! |---|---|
//! | Ctrl+C | [`Key::Interrupt`] |
//! | arrows | [`Key::Up`], [`Key::Down`], [`Key::Left`], [`Key::Right`] |
//! | Enter | [`Key::Enter`] |
//! | Esc | [`Key::Escape`] |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Direction;

/// A key the navigator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Interrupt,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

impl Key {
    /// Narrow a crossterm key event to a token.
    ///
    /// Release events are dropped so terminals reporting both press and
    /// release don't dispatch twice.
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Interrupt)
            }
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Esc => Some(Self::Escape),
            _ => None,
        }
    }

    /// The arrow direction of this key, if it is an arrow.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn arrows_enter_escape() {
        assert_eq!(Key::from_event(&press(KeyCode::Up, KeyModifiers::NONE)), Some(Key::Up));
        assert_eq!(Key::from_event(&press(KeyCode::Down, KeyModifiers::NONE)), Some(Key::Down));
        assert_eq!(Key::from_event(&press(KeyCode::Left, KeyModifiers::NONE)), Some(Key::Left));
        assert_eq!(Key::from_event(&press(KeyCode::Right, KeyModifiers::NONE)), Some(Key::Right));
        assert_eq!(Key::from_event(&press(KeyCode::Enter, KeyModifiers::NONE)), Some(Key::Enter));
        assert_eq!(Key::from_event(&press(KeyCode::Esc, KeyModifiers::NONE)), Some(Key::Escape));
    }

    #[test]
    fn ctrl_c_interrupts() {
        assert_eq!(
            Key::from_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
        assert_eq!(Key::from_event(&press(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn unrecognized_and_release_ignored() {
        assert_eq!(Key::from_event(&press(KeyCode::Tab, KeyModifiers::NONE)), None);

        let mut release = press(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(Key::from_event(&release), None);
    }

    #[test]
    fn directions() {
        assert_eq!(Key::Left.direction(), Some(Direction::Left));
        assert_eq!(Key::Enter.direction(), None);
    }
}
