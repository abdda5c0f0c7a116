//! Deferred domain: delayed one-shot actions driven by elapsed game time.

mod queue;
mod systems;

pub use queue::{DeferredAction, DeferredQueue, DeferredTag};

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::deferred::systems::run_due_actions;

pub struct DeferredPlugin;

impl Plugin for DeferredPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DeferredQueue>()
            .add_systems(Update, run_due_actions.in_set(ControllerSet::Deferred));
    }
}
