use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt::{self, Display};

/// set on the low byte of a press code to form the matching release code
pub const RELEASE_BIT: u32 = 0x80;

/// set-1 keyboard scancodes as reported by the badge keyboard
///
/// extended keys carry the `0xe0` prefix in the second byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum Scancode {
    Esc = 0x01,
    Key1 = 0x02,
    Key2 = 0x03,
    Key3 = 0x04,
    Key4 = 0x05,
    Key5 = 0x06,
    Key6 = 0x07,
    Key7 = 0x08,
    Key8 = 0x09,
    Key9 = 0x0a,
    Key0 = 0x0b,
    Minus = 0x0c,
    Equal = 0x0d,
    Backspace = 0x0e,
    Tab = 0x0f,
    Q = 0x10,
    W = 0x11,
    E = 0x12,
    R = 0x13,
    T = 0x14,
    Y = 0x15,
    U = 0x16,
    I = 0x17,
    O = 0x18,
    P = 0x19,
    LeftBrace = 0x1a,
    RightBrace = 0x1b,
    Enter = 0x1c,
    LeftCtrl = 0x1d,
    A = 0x1e,
    S = 0x1f,
    D = 0x20,
    F = 0x21,
    G = 0x22,
    H = 0x23,
    J = 0x24,
    K = 0x25,
    L = 0x26,
    Semicolon = 0x27,
    Apostrophe = 0x28,
    Grave = 0x29,
    LeftShift = 0x2a,
    Backslash = 0x2b,
    Z = 0x2c,
    X = 0x2d,
    C = 0x2e,
    V = 0x2f,
    B = 0x30,
    N = 0x31,
    M = 0x32,
    Comma = 0x33,
    Dot = 0x34,
    Slash = 0x35,
    RightShift = 0x36,
    LeftAlt = 0x38,
    Space = 0x39,
    CapsLock = 0x3a,
    F1 = 0x3b,
    F2 = 0x3c,
    F3 = 0x3d,
    F4 = 0x3e,
    F5 = 0x3f,
    F6 = 0x40,
    RightCtrl = 0xe01d,
    RightAlt = 0xe038,
    Up = 0xe048,
    Left = 0xe04b,
    Right = 0xe04d,
    Down = 0xe050,
    LeftMeta = 0xe05b,
    RightMeta = 0xe05c,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

impl Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyState::Pressed => write!(f, "pressed"),
            KeyState::Released => write!(f, "released"),
        }
    }
}

impl Scancode {
    pub fn press_code(self) -> u32 {
        self.into()
    }

    pub fn release_code(self) -> u32 {
        self.press_code() | RELEASE_BIT
    }
}

/// decode a raw scancode into the key and its press / release state
pub fn decode(code: u32) -> Option<(Scancode, KeyState)> {
    if let Ok(scancode) = Scancode::try_from(code) {
        return Some((scancode, KeyState::Pressed));
    }
    if code & RELEASE_BIT != 0 {
        if let Ok(scancode) = Scancode::try_from(code & !RELEASE_BIT) {
            return Some((scancode, KeyState::Released));
        }
    }
    log::trace!("unknown scancode: {code:#x}");
    None
}
