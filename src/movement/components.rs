//! Movement domain: components for the player body.

use bevy::prelude::*;

use crate::audio::SoundCue;

/// Jumps available before the player has to touch ground again.
pub const MAX_JUMPS: u8 = 2;

#[derive(Component, Debug)]
pub struct Player;

/// Jumps used since the last ground contact, in `0..=MAX_JUMPS`.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JumpCounter {
    used: u8,
}

impl JumpCounter {
    pub fn used(&self) -> u8 {
        self.used
    }

    pub fn can_jump(&self) -> bool {
        self.used < MAX_JUMPS
    }

    /// Spend a jump. Returns the cue for the jump taken, or `None` when
    /// all jumps are used up.
    pub fn try_jump(&mut self) -> Option<SoundCue> {
        if !self.can_jump() {
            return None;
        }

        let cue = if self.used == 0 {
            SoundCue::Jump1
        } else {
            SoundCue::Jump2
        };
        self.used += 1;
        Some(cue)
    }

    pub fn reset(&mut self) {
        self.used = 0;
    }
}

/// Where the player was when the movement cue last played.
#[derive(Component, Debug, Clone, Copy)]
pub struct MovementAudio {
    pub last_position: Vec3,
}

impl MovementAudio {
    pub fn new(position: Vec3) -> Self {
        Self {
            last_position: position,
        }
    }

    /// Whether the movement cue should play now. Records `position` when it does.
    pub fn observe(&mut self, position: Vec3, voice_busy: bool) -> bool {
        if position == self.last_position || voice_busy {
            return false;
        }
        self.last_position = position;
        true
    }
}
