//! Movement domain: horizontal motion and jumping.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{ActiveVoice, PlayCue, SoundCue};
use crate::content::ControllerConfig;
use crate::movement::{ControlInput, JumpCounter, MovementAudio, Player};

pub(crate) fn apply_movement(
    input: Res<ControlInput>,
    config: Res<ControllerConfig>,
    voices: Query<(), With<ActiveVoice>>,
    mut cues: MessageWriter<PlayCue>,
    mut query: Query<(&Transform, &mut LinearVelocity, &mut MovementAudio), With<Player>>,
) {
    let planar = input.planar_direction() * config.move_speed;
    let voice_busy = !voices.is_empty();

    for (transform, mut velocity, mut movement_audio) in &mut query {
        // Vertical velocity belongs to gravity and jumps
        velocity.x = planar.x;
        velocity.z = planar.z;

        if movement_audio.observe(transform.translation, voice_busy) {
            cues.write(PlayCue(SoundCue::Movement));
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<ControlInput>,
    config: Res<ControllerConfig>,
    mut cues: MessageWriter<PlayCue>,
    mut query: Query<(&mut JumpCounter, &mut LinearVelocity, Option<&ComputedMass>), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (mut jumps, mut velocity, mass) in &mut query {
        let Some(cue) = jumps.try_jump() else {
            debug!("Jump ignored: no jumps left");
            continue;
        };

        // Vertical speed is zeroed before the impulse: dv = J / m
        let mass = mass
            .map(|m| m.value())
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or(1.0);
        velocity.y = config.jump_force / mass;

        cues.write(PlayCue(cue));
        debug!("Jump {}: vy={}", jumps.used(), velocity.y);
    }
}
