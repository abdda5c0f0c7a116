//! Audio domain: the named sound effects the controller can trigger.

use bevy::ecs::message::Message;
use serde::{Deserialize, Serialize};

/// Every one-shot sound effect the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SoundCue {
    Movement,
    Jump1,
    Jump2,
    Landing,
    Falling,
    GameOver,
    Collision,
    Combo,
    Summon,
    EnemyFalling,
    Win,
}

impl SoundCue {
    pub const ALL: [SoundCue; 11] = [
        SoundCue::Movement,
        SoundCue::Jump1,
        SoundCue::Jump2,
        SoundCue::Landing,
        SoundCue::Falling,
        SoundCue::GameOver,
        SoundCue::Collision,
        SoundCue::Combo,
        SoundCue::Summon,
        SoundCue::EnemyFalling,
        SoundCue::Win,
    ];

    /// Cues that may be left without a clip without it being a config mistake.
    pub fn is_optional(self) -> bool {
        matches!(self, SoundCue::Collision)
    }
}

/// Request to play a cue once through the shared voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCue(pub SoundCue);

impl Message for PlayCue {}
