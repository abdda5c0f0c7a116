//! Debug hotkeys, compiled in with the `dev-tools` feature.
//!
//! - F3: log player, enemy and deferred queue state
//! - Ctrl+K: knock the enemy off the arena

mod systems;

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::debug::systems::{knock_off_enemy, log_controller_snapshot};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (log_controller_snapshot, knock_off_enemy).in_set(ControllerSet::Input),
        );
    }
}
