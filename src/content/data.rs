//! Content domain: data definitions deserialized from RON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audio::SoundCue;

/// One entry in the sound table: which clip backs a cue and how long it runs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SoundDef {
    pub cue: SoundCue,
    /// Asset path relative to `assets/`. `None` leaves the cue silent.
    #[serde(default)]
    pub path: Option<String>,
    /// Clip duration in seconds.
    pub length: f32,
}

impl SoundDef {
    fn new(cue: SoundCue, path: &str, length: f32) -> Self {
        Self {
            cue,
            path: Some(path.to_string()),
            length,
        }
    }
}

/// Tuning and sound table for the player controller.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub move_speed: f32,
    pub jump_force: f32,
    /// Player height below which the run is lost.
    pub fall_threshold: f32,
    /// Enemy height below which the enemy counts as knocked off.
    pub enemy_fall_threshold: f32,
    /// Seconds a combo stays alive after the last qualifying hit.
    pub combo_window: f32,
    /// Delay between game over and the scene reload.
    pub game_over_delay: f32,
    /// Extra wait after the enemy-fall clip before the enemy is summoned back.
    pub respawn_buffer: f32,
    pub sounds: Vec<SoundDef>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 5.0,
            fall_threshold: -11.0,
            enemy_fall_threshold: -11.0,
            combo_window: 1.5,
            game_over_delay: 2.5,
            respawn_buffer: 0.5,
            sounds: vec![
                SoundDef::new(SoundCue::Movement, "audio/sfx/movement.ogg", 0.4),
                SoundDef::new(SoundCue::Jump1, "audio/sfx/jump_1.ogg", 0.3),
                SoundDef::new(SoundCue::Jump2, "audio/sfx/jump_2.ogg", 0.35),
                SoundDef::new(SoundCue::Landing, "audio/sfx/landing.ogg", 0.25),
                SoundDef::new(SoundCue::Falling, "audio/sfx/falling.ogg", 1.2),
                SoundDef::new(SoundCue::GameOver, "audio/sfx/game_over.ogg", 2.0),
                SoundDef {
                    cue: SoundCue::Collision,
                    path: None,
                    length: 0.2,
                },
                SoundDef::new(SoundCue::Combo, "audio/sfx/combo.ogg", 0.5),
                SoundDef::new(SoundCue::Summon, "audio/sfx/summon.ogg", 1.0),
                SoundDef::new(SoundCue::EnemyFalling, "audio/sfx/enemy_falling.ogg", 1.5),
                SoundDef::new(SoundCue::Win, "audio/sfx/win.ogg", 2.0),
            ],
        }
    }
}

impl ControllerConfig {
    pub fn sound(&self, cue: SoundCue) -> Option<&SoundDef> {
        self.sounds.iter().find(|def| def.cue == cue)
    }

    /// Duration of the clip behind `cue`, zero when the cue is not in the table.
    pub fn clip_length(&self, cue: SoundCue) -> f32 {
        self.sound(cue).map_or(0.0, |def| def.length)
    }
}
