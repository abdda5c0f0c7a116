//! Core domain: boot and scene reload systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::SceneReloadRequested;
use crate::core::state::GameState;

/// Marker for everything that belongs to the current scene and goes away on reload.
/// Session-level resources (config, sound library, deferred queue) are not scene members.
#[derive(Component, Debug, Default)]
pub struct SceneMember;

pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

/// Despawn the scene and re-enter `Playing`, which spawns it again from scratch.
pub(crate) fn reload_scene(
    mut commands: Commands,
    mut requests: MessageReader<SceneReloadRequested>,
    members: Query<Entity, With<SceneMember>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    // Several requests in one frame still mean one reload
    if requests.read().count() == 0 {
        return;
    }

    let mut despawned = 0;
    for entity in &members {
        commands.entity(entity).despawn();
        despawned += 1;
    }

    info!("Reloading scene ({} entities despawned)", despawned);
    game_state.set(GameState::Playing);
}
