//! Input normalization for the reel minigame.
//!
//! Three physical sources — the primary action key, mouse button
//! press/release, and key auto-repeat on terminals that never report
//! releases — collapse into one boolean "thrust engaged" signal. Press
//! from any source engages, release from any source releases, last event
//! wins. The adapter reports edges only, so repeat presses are ignored
//! without a state change.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};

/// The primary action key.
pub const THRUST_KEY: KeyCode = KeyCode::Char(' ');

/// Frames a key press stays engaged on terminals without key-release
/// reporting (~200ms at 16ms frames). Auto-repeat refreshes the window
/// so holding the key feels continuous rather than stuttery.
pub const KEY_HOLD_FRAMES: u32 = 12;

/// Folds key and mouse events into the single thrust signal.
pub struct ThrustAdapter {
    engaged: bool,
    /// Whether the terminal delivers real key-release events.
    release_events: bool,
    /// Remaining frames of the synthetic hold window; 0 when inactive.
    key_window: u32,
}

impl ThrustAdapter {
    pub fn new(release_events: bool) -> Self {
        Self {
            engaged: false,
            release_events,
            key_window: 0,
        }
    }

    /// Feed one terminal event. Returns `Some(new_state)` when the
    /// signal changed, `None` otherwise.
    pub fn handle_event(&mut self, event: &Event) -> Option<bool> {
        match event {
            Event::Key(key) if key.code == THRUST_KEY => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    if !self.release_events {
                        self.key_window = KEY_HOLD_FRAMES;
                    }
                    self.set_engaged(true)
                }
                KeyEventKind::Release => self.set_engaged(false),
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => {
                    self.key_window = 0;
                    self.set_engaged(true)
                }
                MouseEventKind::Up(_) => self.set_engaged(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Advance the synthetic hold window by one frame. Returns
    /// `Some(false)` when the window lapses and the key counts as
    /// released.
    pub fn on_frame(&mut self) -> Option<bool> {
        if self.release_events || !self.engaged || self.key_window == 0 {
            return None;
        }
        self.key_window -= 1;
        if self.key_window == 0 {
            self.set_engaged(false)
        } else {
            None
        }
    }

    pub fn engaged(&self) -> bool {
        self.engaged
    }

    fn set_engaged(&mut self, engaged: bool) -> Option<bool> {
        if self.engaged == engaged {
            return None;
        }
        self.engaged = engaged;
        Some(engaged)
    }
}
