//! Enemy domain: fall detection and respawn.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlayCue, SoundCue};
use crate::content::ControllerConfig;
use crate::core::GameState;
use crate::deferred::{DeferredAction, DeferredQueue, DeferredTag};
use crate::enemy::{Enemy, FallWatch, RespawnEnemyRequested};

pub(crate) fn check_enemy_fall(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut queue: ResMut<DeferredQueue>,
    mut cues: MessageWriter<PlayCue>,
    game_state: Res<NextState<GameState>>,
    mut query: Query<(Entity, &Transform, &mut FallWatch), With<Enemy>>,
) {
    // The player fell earlier in this tick
    if matches!(*game_state, NextState::Pending(GameState::GameOver)) {
        return;
    }

    let now = time.elapsed_secs();

    for (entity, transform, mut watch) in &mut query {
        if !watch.check(transform.translation.y, config.enemy_fall_threshold) {
            continue;
        }

        // The win cue waits for the fall clip to finish
        let fall_length = config.clip_length(SoundCue::EnemyFalling);
        info!(
            "Enemy {:?} fell off at y={:.2}; summoning back in {:.2}s",
            entity,
            transform.translation.y,
            fall_length + config.respawn_buffer
        );

        cues.write(PlayCue(SoundCue::EnemyFalling));
        queue.schedule(
            now,
            fall_length,
            DeferredTag::EnemySequence,
            DeferredAction::PlayCue(SoundCue::Win),
        );
        queue.schedule(
            now,
            fall_length + config.respawn_buffer,
            DeferredTag::EnemySequence,
            DeferredAction::RespawnEnemy(entity),
        );
    }
}

pub(crate) fn respawn_enemies(
    mut requests: MessageReader<RespawnEnemyRequested>,
    mut cues: MessageWriter<PlayCue>,
    mut query: Query<
        (
            &mut Transform,
            &mut FallWatch,
            Option<&mut LinearVelocity>,
            Option<&mut AngularVelocity>,
        ),
        With<Enemy>,
    >,
) {
    for request in requests.read() {
        let Ok((mut transform, mut watch, linear, angular)) = query.get_mut(request.enemy) else {
            debug!("Enemy {:?} no longer exists, skipping respawn", request.enemy);
            continue;
        };

        transform.translation = watch.reset();
        transform.rotation = Quat::IDENTITY;
        if let Some(mut linear) = linear {
            linear.0 = Vec3::ZERO;
        }
        if let Some(mut angular) = angular {
            angular.0 = Vec3::ZERO;
        }

        cues.write(PlayCue(SoundCue::Summon));
        info!("Enemy {:?} summoned back to {}", request.enemy, transform.translation);
    }
}
