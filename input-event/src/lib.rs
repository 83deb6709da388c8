pub use error::ProtocolError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt::{self, Display};

pub mod error;
pub mod scancode;

use scancode::{KeyState, Scancode};

/// kind of an input event as delivered by the firmware input hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum EventKind {
    /// navigation keys (arrows, return, ...) translated by the firmware
    Navigation = 0,
    /// translated keyboard characters
    Keyboard = 1,
    /// power / sleep / lid actions
    Action = 2,
    /// raw scancodes, press and release
    Scancode = 3,
}

/// a single input event
///
/// `key` carries the raw code; for [`EventKind::Scancode`] events this
/// is a set-1 scancode where a release is the press code with
/// [`scancode::RELEASE_BIT`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: EventKind,
    pub key: u32,
}

impl KeyEvent {
    /// scancode event with the given raw code
    pub fn scancode(key: u32) -> Self {
        Self {
            kind: EventKind::Scancode,
            key,
        }
    }

    /// press event for the given key
    pub fn press(scancode: Scancode) -> Self {
        Self::scancode(scancode.press_code())
    }

    /// release event for the given key
    pub fn release(scancode: Scancode) -> Self {
        Self::scancode(scancode.release_code())
    }

    /// decode an event from the raw (kind, key) pair handed over by the host
    pub fn from_raw(kind: u32, key: u32) -> Result<Self, ProtocolError> {
        let kind = EventKind::try_from(kind)?;
        Ok(Self { kind, key })
    }

    /// the raw scancode, if this is a scancode event
    pub fn raw_scancode(&self) -> Option<u32> {
        match self.kind {
            EventKind::Scancode => Some(self.key),
            _ => None,
        }
    }

    /// decoded key and press / release state, if this is a known scancode
    pub fn key_state(&self) -> Option<(Scancode, KeyState)> {
        self.raw_scancode().and_then(scancode::decode)
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            EventKind::Navigation => "navigation",
            EventKind::Keyboard => "keyboard",
            EventKind::Action => "action",
            EventKind::Scancode => "scancode",
        };
        write!(f, "{kind}")
    }
}

impl Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key_state() {
            Some((scan, state)) => write!(f, "key({scan:?}, {state})"),
            None => write!(f, "{}({:#x})", self.kind, self.key),
        }
    }
}
