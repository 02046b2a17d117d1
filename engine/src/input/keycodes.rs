//! Key Code Table
//!
//! Generic key codes decoupled from any windowing system. The discriminants
//! are the platform virtual-key values the runtime's embedders already use,
//! so a key recorded by foreign code round-trips through [`KeyCode::from_raw`]
//! unchanged. The numeric values are load-bearing; do not renumber.

use serde::{Deserialize, Serialize};

/// A keyboard key identified by its platform virtual-key value.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeyCode {
    /// No key / unrecognized raw value
    #[default]
    None = 0,

    // Editing and control keys
    Backspace = 0x08,
    Tab = 0x09,
    Enter = 0x0D,
    Shift = 0x10,
    Control = 0x11,
    Alt = 0x12,
    CapsLock = 0x14,
    Escape = 0x1B,
    Space = 0x20,

    // Navigation keys
    PageUp = 0x21,
    PageDown = 0x22,
    End = 0x23,
    Home = 0x24,
    ArrowLeft = 0x25,
    ArrowUp = 0x26,
    ArrowRight = 0x27,
    ArrowDown = 0x28,
    Insert = 0x2D,
    Delete = 0x2E,

    // Digit keys
    Digit0 = 0x30,
    Digit1 = 0x31,
    Digit2 = 0x32,
    Digit3 = 0x33,
    Digit4 = 0x34,
    Digit5 = 0x35,
    Digit6 = 0x36,
    Digit7 = 0x37,
    Digit8 = 0x38,
    Digit9 = 0x39,

    // Letter keys
    A = 0x41,
    B = 0x42,
    C = 0x43,
    D = 0x44,
    E = 0x45,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    I = 0x49,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    M = 0x4D,
    N = 0x4E,
    O = 0x4F,
    P = 0x50,
    Q = 0x51,
    R = 0x52,
    S = 0x53,
    T = 0x54,
    U = 0x55,
    V = 0x56,
    W = 0x57,
    X = 0x58,
    Y = 0x59,
    Z = 0x5A,

    // Function keys
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,

    // Punctuation
    Plus = 0xBB,
    Comma = 0xBC,
    Minus = 0xBD,
    Period = 0xBE,
}

impl KeyCode {
    /// The platform virtual-key value of this key.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    /// Map a raw platform virtual-key value to a key code.
    ///
    /// Values outside the table map to [`KeyCode::None`].
    pub fn from_raw(raw: i32) -> KeyCode {
        use KeyCode::*;
        match raw {
            0x08 => Backspace,
            0x09 => Tab,
            0x0D => Enter,
            0x10 => Shift,
            0x11 => Control,
            0x12 => Alt,
            0x14 => CapsLock,
            0x1B => Escape,
            0x20 => Space,
            0x21 => PageUp,
            0x22 => PageDown,
            0x23 => End,
            0x24 => Home,
            0x25 => ArrowLeft,
            0x26 => ArrowUp,
            0x27 => ArrowRight,
            0x28 => ArrowDown,
            0x2D => Insert,
            0x2E => Delete,
            0x30 => Digit0,
            0x31 => Digit1,
            0x32 => Digit2,
            0x33 => Digit3,
            0x34 => Digit4,
            0x35 => Digit5,
            0x36 => Digit6,
            0x37 => Digit7,
            0x38 => Digit8,
            0x39 => Digit9,
            0x41 => A,
            0x42 => B,
            0x43 => C,
            0x44 => D,
            0x45 => E,
            0x46 => F,
            0x47 => G,
            0x48 => H,
            0x49 => I,
            0x4A => J,
            0x4B => K,
            0x4C => L,
            0x4D => M,
            0x4E => N,
            0x4F => O,
            0x50 => P,
            0x51 => Q,
            0x52 => R,
            0x53 => S,
            0x54 => T,
            0x55 => U,
            0x56 => V,
            0x57 => W,
            0x58 => X,
            0x59 => Y,
            0x5A => Z,
            0x70 => F1,
            0x71 => F2,
            0x72 => F3,
            0x73 => F4,
            0x74 => F5,
            0x75 => F6,
            0x76 => F7,
            0x77 => F8,
            0x78 => F9,
            0x79 => F10,
            0x7A => F11,
            0x7B => F12,
            0xBB => Plus,
            0xBC => Comma,
            0xBD => Minus,
            0xBE => Period,
            _ => None,
        }
    }

    /// Whether this is one of the four arrow keys.
    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            KeyCode::ArrowLeft | KeyCode::ArrowUp | KeyCode::ArrowRight | KeyCode::ArrowDown
        )
    }

    /// Whether this is a function key (F1..F12).
    pub fn is_function_key(self) -> bool {
        (KeyCode::F1.to_raw()..=KeyCode::F12.to_raw()).contains(&self.to_raw())
    }

    /// Whether this is a digit key (0..9 on the main row).
    pub fn is_digit(self) -> bool {
        (KeyCode::Digit0.to_raw()..=KeyCode::Digit9.to_raw()).contains(&self.to_raw())
    }

    /// Whether this is a letter key (A..Z).
    pub fn is_letter(self) -> bool {
        (KeyCode::A.to_raw()..=KeyCode::Z.to_raw()).contains(&self.to_raw())
    }

    /// Whether this is a modifier key (Shift, Control, Alt).
    pub fn is_modifier(self) -> bool {
        matches!(self, KeyCode::Shift | KeyCode::Control | KeyCode::Alt)
    }
}
