//! Movement domain: fall detection and the game-over transition.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{PlayCue, SoundCue};
use crate::content::ControllerConfig;
use crate::core::GameState;
use crate::deferred::{DeferredAction, DeferredQueue, DeferredTag};
use crate::movement::Player;

/// Ends the game on the tick the player drops below the threshold. The freeze,
/// the cue and the reload scheduling all happen here; the state change only
/// gates the tick from the next frame on.
pub(crate) fn detect_fall(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut queue: ResMut<DeferredQueue>,
    mut cues: MessageWriter<PlayCue>,
    mut game_state: ResMut<NextState<GameState>>,
    mut query: Query<(Entity, &Transform, &mut LinearVelocity), With<Player>>,
) {
    for (entity, transform, mut velocity) in &mut query {
        if transform.translation.y >= config.fall_threshold {
            continue;
        }

        cues.write(PlayCue(SoundCue::Falling));

        velocity.0 = Vec3::ZERO;
        commands.entity(entity).insert(RigidBody::Kinematic);
        end_game(time.elapsed_secs(), &config, &mut queue, &mut cues);
        game_state.set(GameState::GameOver);
        return;
    }
}

fn end_game(
    now: f32,
    config: &ControllerConfig,
    queue: &mut DeferredQueue,
    cues: &mut MessageWriter<PlayCue>,
) {
    info!("Game over at {:.2}s, reloading in {}s", now, config.game_over_delay);

    cues.write(PlayCue(SoundCue::GameOver));

    // The reload respawns the enemy, so a pending win/summon would only leak
    // into the next scene.
    let cancelled = queue.cancel(DeferredTag::EnemySequence);
    if cancelled > 0 {
        debug!("Cancelled {} pending enemy actions", cancelled);
    }

    queue.schedule(
        now,
        config.game_over_delay,
        DeferredTag::GameOver,
        DeferredAction::ReloadScene,
    );
    queue.schedule(
        now,
        config.game_over_delay,
        DeferredTag::GameOver,
        DeferredAction::PlayCue(SoundCue::Summon),
    );
}
