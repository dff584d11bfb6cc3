//! Controller events to game intents
//!
//! Button presses become one-shot intents; the D-pad is read as held state
//! once per frame instead.

use crate::audio::SoundEffect;

/// Controller buttons the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Quit
    Minus,
    /// Pause toggle
    Plus,
    /// Auto-play toggle
    A,
    DpadLeft,
    DpadRight,
    /// Anything else on the pad
    Other(u8),
}

/// A raw event from the window/controller layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// Window or system asked us to close
    Quit,
    ButtonDown(Button),
    ButtonUp(Button),
}

/// An already-interpreted user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Quit,
    TogglePause,
    ToggleAutoPlay,
}

impl Intent {
    /// Feedback cue played when the intent is applied
    pub fn sound(&self) -> Option<SoundEffect> {
        match self {
            Intent::Quit => None,
            Intent::TogglePause => Some(SoundEffect::PaddleHit),
            Intent::ToggleAutoPlay => Some(SoundEffect::WallHit),
        }
    }
}

/// Translate one raw event. Only presses count, releases are ignored.
pub fn map_event(event: &RawEvent) -> Option<Intent> {
    match event {
        RawEvent::Quit => Some(Intent::Quit),
        RawEvent::ButtonDown(Button::Minus) => Some(Intent::Quit),
        RawEvent::ButtonDown(Button::Plus) => Some(Intent::TogglePause),
        RawEvent::ButtonDown(Button::A) => Some(Intent::ToggleAutoPlay),
        _ => None,
    }
}

/// Translate a frame's worth of events, keeping their order
pub fn collect_intents(events: &[RawEvent]) -> Vec<Intent> {
    events.iter().filter_map(map_event).collect()
}

/// D-pad state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
}
