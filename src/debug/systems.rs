//! Debug domain: hotkeys for inspecting and poking the controller.

use bevy::prelude::*;

use crate::combo::ComboTracker;
use crate::content::ControllerConfig;
use crate::core::GameState;
use crate::deferred::DeferredQueue;
use crate::enemy::{Enemy, FallWatch};
use crate::movement::{JumpCounter, Player};

/// F3: log a snapshot of the controller state
pub(crate) fn log_controller_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    queue: Res<DeferredQueue>,
    players: Query<(&Transform, &JumpCounter, &ComboTracker), With<Player>>,
    enemies: Query<(Entity, &Transform, &FallWatch), With<Enemy>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    info!(
        "[DEBUG] state={:?}, {} deferred actions pending",
        state.get(),
        queue.len()
    );
    for (transform, jumps, combo) in &players {
        info!(
            "[DEBUG] player at {} jumps_used={} combo={} ({:.2}s left)",
            transform.translation,
            jumps.used(),
            combo.counter,
            combo.timer.max(0.0)
        );
    }
    for (entity, transform, watch) in &enemies {
        info!(
            "[DEBUG] enemy {:?} at {} fall_announced={}",
            entity, transform.translation, watch.fall_announced
        );
    }
    for entry in queue.pending() {
        info!(
            "[DEBUG] pending {:?} at {:.2}s ({:?})",
            entry.action, entry.fire_at, entry.tag
        );
    }
}

/// Ctrl+K: drop the enemy below the fall threshold
pub(crate) fn knock_off_enemy(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<ControllerConfig>,
    mut enemies: Query<&mut Transform, With<Enemy>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || !keyboard.just_pressed(KeyCode::KeyK) {
        return;
    }

    for mut transform in &mut enemies {
        transform.translation.y = config.enemy_fall_threshold - 1.0;
        info!("[DEBUG] Knocked enemy off to {}", transform.translation);
    }
}
