//! Core domain: game state, scene membership and per-frame ordering.

mod events;
mod state;
mod systems;

pub use events::SceneReloadRequested;
pub use state::GameState;
pub use systems::SceneMember;

use bevy::prelude::*;

use crate::core::systems::{finish_boot, reload_scene};

/// Per-frame ordering of the controller. Every set runs in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Sample devices into input resources.
    Input,
    /// React to contacts reported by physics since the last frame.
    Contacts,
    /// Movement, jump, fall, combo decay, enemy check. Only while playing.
    Tick,
    /// Fire deferred actions that have come due.
    Deferred,
    /// Apply effects requested by deferred actions (respawns, reloads).
    Effects,
    /// Turn cue requests into sound.
    Playback,
}

/// Fixed order of the per-frame controller steps inside `ControllerSet::Tick`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickStep {
    Movement,
    Jump,
    Fall,
    ComboDecay,
    EnemyCheck,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_message::<SceneReloadRequested>()
            .configure_sets(
                Update,
                (
                    ControllerSet::Input,
                    ControllerSet::Contacts,
                    ControllerSet::Tick.run_if(in_state(GameState::Playing)),
                    ControllerSet::Deferred,
                    ControllerSet::Effects,
                    ControllerSet::Playback,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                (
                    TickStep::Movement,
                    TickStep::Jump,
                    TickStep::Fall,
                    TickStep::ComboDecay,
                    TickStep::EnemyCheck,
                )
                    .chain()
                    .in_set(ControllerSet::Tick),
            )
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(Update, reload_scene.in_set(ControllerSet::Effects));
    }
}
