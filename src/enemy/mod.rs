//! Enemy domain: the knock-off target, its fall/win sequence and respawn.

mod components;
mod systems;


pub use components::{Enemy, FallWatch, RespawnEnemyRequested};

use bevy::prelude::*;

use crate::core::{ControllerSet, TickStep};
use crate::enemy::systems::{check_enemy_fall, respawn_enemies};

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RespawnEnemyRequested>()
            .add_systems(Update, check_enemy_fall.in_set(TickStep::EnemyCheck))
            .add_systems(Update, respawn_enemies.in_set(ControllerSet::Effects));
    }
}
