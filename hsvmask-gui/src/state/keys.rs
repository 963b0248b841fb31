//! Keyboard handling.

use eframe::egui::{Event, Key};

/// What one iteration does after reading the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep looping.
    Continue,
    /// Write the mask and keep looping.
    Save,
    /// Close the tuner.
    Exit,
}

impl KeyAction {
    /// Maps a single key.
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Q => KeyAction::Exit,
            Key::S => KeyAction::Save,
            _ => KeyAction::Continue,
        }
    }

    /// Reads this frame's events once and returns the first actionable key press.
    pub fn from_events(events: &[Event]) -> Self {
        events
            .iter()
            .find_map(|event| match event {
                Event::Key {
                    key, pressed: true, ..
                } => match Self::from_key(*key) {
                    KeyAction::Continue => None,
                    action => Some(action),
                },
                _ => None,
            })
            .unwrap_or(KeyAction::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Modifiers;

    fn press(key: Key, pressed: bool) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyAction::from_key(Key::Q), KeyAction::Exit);
        assert_eq!(KeyAction::from_key(Key::S), KeyAction::Save);
        assert_eq!(KeyAction::from_key(Key::A), KeyAction::Continue);
    }

    #[test]
    fn test_no_events_continues() {
        assert_eq!(KeyAction::from_events(&[]), KeyAction::Continue);
    }

    #[test]
    fn test_releases_and_other_keys_ignored() {
        let events = [press(Key::S, false), press(Key::X, true)];
        assert_eq!(KeyAction::from_events(&events), KeyAction::Continue);
    }

    #[test]
    fn test_first_actionable_key_wins() {
        let events = [press(Key::A, true), press(Key::S, true), press(Key::Q, true)];
        assert_eq!(KeyAction::from_events(&events), KeyAction::Save);

        let events = [press(Key::Q, true), press(Key::S, true)];
        assert_eq!(KeyAction::from_events(&events), KeyAction::Exit);
    }
}
