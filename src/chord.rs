//! LOGO+P chord detection
//!
//! The detector only remembers whether a LOGO (meta) key is held.
//! Every event maps to a [`Transition`]: the next state, whether the
//! event is consumed, and optionally an [`Action`] the caller has to
//! perform. The detector itself never does any I/O.

use std::fmt::{self, Display};

use input_event::{
    scancode::{self, KeyState, Scancode},
    KeyEvent,
};

/// either of these keys arms the chord
pub const CHORD_MODIFIERS: [Scancode; 2] = [Scancode::LeftMeta, Scancode::RightMeta];

/// pressing this key while armed fires the chord
pub const CHORD_TRIGGER: Scancode = Scancode::P;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModifierState {
    #[default]
    Released,
    Held,
}

/// whether an event was consumed by the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// the event is consumed, the host stops dispatching it
    Handled,
    /// the host continues dispatching the event
    NotHandled,
}

impl Verdict {
    pub fn is_handled(self) -> bool {
        matches!(self, Verdict::Handled)
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_handled()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// save the current framebuffer
    Capture,
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Capture => write!(f, "capture"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: ModifierState,
    pub verdict: Verdict,
    pub action: Option<Action>,
}

impl Transition {
    fn pass(state: ModifierState) -> Self {
        Self {
            state,
            verdict: Verdict::NotHandled,
            action: None,
        }
    }
}

/// compute the reaction to `event` in `state`
///
/// Modifier presses and releases are tracked but never consumed. A
/// trigger press while armed is consumed, requests a capture and
/// disarms the chord, so the modifier has to be pressed again to fire
/// another capture. Trigger releases are not tracked.
pub fn transition(state: ModifierState, event: &KeyEvent) -> Transition {
    let Some(code) = event.raw_scancode() else {
        return Transition::pass(state);
    };
    match scancode::decode(code) {
        Some((key, KeyState::Pressed)) if CHORD_MODIFIERS.contains(&key) => {
            Transition::pass(ModifierState::Held)
        }
        Some((key, KeyState::Released)) if CHORD_MODIFIERS.contains(&key) => {
            Transition::pass(ModifierState::Released)
        }
        Some((CHORD_TRIGGER, KeyState::Pressed)) if state == ModifierState::Held => Transition {
            state: ModifierState::Released,
            verdict: Verdict::Handled,
            action: Some(Action::Capture),
        },
        _ => Transition::pass(state),
    }
}

/// chord detector owning its modifier state
#[derive(Debug, Default)]
pub struct ChordDetector {
    state: ModifierState,
}

impl ChordDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModifierState {
        self.state
    }

    /// feed the next event, in order
    pub fn feed(&mut self, event: &KeyEvent) -> (Verdict, Option<Action>) {
        let Transition {
            state,
            verdict,
            action,
        } = transition(self.state, event);
        if state != self.state {
            log::trace!("chord modifier: {:?} -> {state:?}", self.state);
        }
        self.state = state;
        (verdict, action)
    }
}
