//! Movement domain: player locomotion, jumping and falling.

mod components;
mod resources;
mod systems;


pub use components::{JumpCounter, MovementAudio, Player};
pub use resources::ControlInput;

use bevy::prelude::*;

use crate::core::{ControllerSet, TickStep};
use crate::movement::systems::{apply_jump, apply_movement, detect_fall, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlInput>()
            .add_systems(Update, read_input.in_set(ControllerSet::Input))
            .add_systems(Update, apply_movement.in_set(TickStep::Movement))
            .add_systems(Update, apply_jump.in_set(TickStep::Jump))
            .add_systems(Update, detect_fall.in_set(TickStep::Fall));
    }
}
