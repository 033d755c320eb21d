//! Host-agnostic input event types.
//!
//! Every host maps its native keyboard and pointer input to these types. The
//! terminal core never sees raw host input.

use serde::{Deserialize, Serialize};

/// A host-agnostic input event delivered to the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A key was pressed while the input element had focus.
    Key(KeyEvent),
    /// A pointer click landed somewhere inside the terminal surface.
    Click(ClickTarget),
}

/// Logical keys the terminal distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character.
    Char(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Escape,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Only Ctrl held.
    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// A key press with Ctrl held.
    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }

    /// True for Ctrl+L (either case).
    pub fn is_clear_screen(&self) -> bool {
        self.modifiers.ctrl && matches!(self.key, Key::Char('l') | Key::Char('L'))
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

/// What a pointer click inside the terminal surface landed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTarget {
    /// Anywhere on the terminal surface that is not a link.
    Surface,
    /// An element marked as an external link inside a rendered line.
    ExternalLink { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_has_no_modifiers() {
        let e = KeyEvent::plain(Key::Enter);
        assert_eq!(e.modifiers, Modifiers::NONE);
        assert_eq!(e.key, Key::Enter);
    }

    #[test]
    fn ctrl_l_is_clear_screen() {
        assert!(KeyEvent::ctrl(Key::Char('l')).is_clear_screen());
        assert!(KeyEvent::ctrl(Key::Char('L')).is_clear_screen());
    }

    #[test]
    fn bare_l_is_not_clear_screen() {
        assert!(!KeyEvent::plain(Key::Char('l')).is_clear_screen());
        assert!(!KeyEvent::ctrl(Key::Char('k')).is_clear_screen());
    }

    #[test]
    fn from_key_is_plain() {
        let e: KeyEvent = Key::Tab.into();
        assert_eq!(e, KeyEvent::plain(Key::Tab));
    }

    #[test]
    fn input_events_serde_roundtrip() {
        let events = vec![
            InputEvent::Key(KeyEvent::ctrl(Key::Char('l'))),
            InputEvent::Key(KeyEvent::plain(Key::Tab)),
            InputEvent::Click(ClickTarget::Surface),
            InputEvent::Click(ClickTarget::ExternalLink {
                url: "https://example.com".into(),
            }),
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<InputEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);
    }

    #[test]
    fn click_targets_differ() {
        let a = InputEvent::Click(ClickTarget::Surface);
        let b = InputEvent::Click(ClickTarget::ExternalLink {
            url: "https://example.com".into(),
        });
        assert_ne!(a, b);
    }

    #[test]
    fn key_hash_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Key::ArrowUp);
        set.insert(Key::ArrowDown);
        set.insert(Key::ArrowUp);
        assert_eq!(set.len(), 2);
    }
}
