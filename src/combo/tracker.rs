//! Combo domain: the rolling hit counter.

use bevy::prelude::*;

/// Hits that count toward a combo before the combo cue starts playing.
pub const COMBO_CUE_THRESHOLD: u32 = 2;

/// Consecutive qualifying hits within a rolling window.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct ComboTracker {
    pub counter: u32,
    /// Seconds left before the combo lapses. Only meaningful while `counter > 0`.
    pub timer: f32,
}

impl ComboTracker {
    /// Register a hit and restart the window. Returns true when the combo cue should play.
    pub fn hit(&mut self, window: f32) -> bool {
        self.counter += 1;
        self.timer = window;
        self.counter >= COMBO_CUE_THRESHOLD
    }

    /// Run the window down. Returns true if the combo lapsed on this call.
    pub fn decay(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }

        self.timer -= dt;
        if self.timer <= 0.0 {
            self.counter = 0;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.counter > 0
    }
}
