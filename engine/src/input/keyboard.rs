//! Keyboard State Tracking
//!
//! A minimal pressed-key set over [`KeyCode`]. The runtime does not route
//! input events itself; embedders feed press/release transitions in and read
//! the held set back out.

use std::collections::HashSet;

use super::keycodes::KeyCode;

/// Tracks which keys are currently held down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release.
    ///
    /// Returns `true` if the held set changed (a repeat press of an
    /// already-held key does not).
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::None {
            return false;
        }
        if pressed {
            self.held.insert(key)
        } else {
            self.held.remove(&key)
        }
    }

    /// Whether the given key is currently held.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether any key is currently held.
    pub fn any_held(&self) -> bool {
        !self.held.is_empty()
    }

    /// Whether any of Shift/Control/Alt is currently held.
    pub fn modifier_held(&self) -> bool {
        self.held.iter().any(|k| k.is_modifier())
    }

    /// Number of keys currently held.
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Release every key.
    pub fn reset(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_default_empty() {
        let keys = KeyboardState::new();
        assert!(!keys.any_held());
        assert_eq!(keys.held_count(), 0);
    }

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyboardState::new();

        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.is_held(KeyCode::W));
        // Repeat press is not a change
        assert!(!keys.handle_key(KeyCode::W, true));

        assert!(keys.handle_key(KeyCode::W, false));
        assert!(!keys.is_held(KeyCode::W));
        // Releasing a key that is not held is not a change
        assert!(!keys.handle_key(KeyCode::W, false));
    }

    #[test]
    fn test_none_key_ignored() {
        let mut keys = KeyboardState::new();
        assert!(!keys.handle_key(KeyCode::None, true));
        assert!(!keys.any_held());
    }

    #[test]
    fn test_modifier_held() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::A, true);
        assert!(!keys.modifier_held());

        keys.handle_key(KeyCode::Shift, true);
        assert!(keys.modifier_held());

        keys.reset();
        assert!(!keys.any_held());
    }
}
