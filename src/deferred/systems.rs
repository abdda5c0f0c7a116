//! Deferred domain: draining due entries into their effects.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::PlayCue;
use crate::core::SceneReloadRequested;
use crate::deferred::{DeferredAction, DeferredQueue};
use crate::enemy::RespawnEnemyRequested;

pub(crate) fn run_due_actions(
    time: Res<Time>,
    mut queue: ResMut<DeferredQueue>,
    mut cues: MessageWriter<PlayCue>,
    mut respawns: MessageWriter<RespawnEnemyRequested>,
    mut reloads: MessageWriter<SceneReloadRequested>,
) {
    if queue.is_empty() {
        return;
    }

    let now = time.elapsed_secs();

    for entry in queue.drain_due(now) {
        debug!(
            "Deferred {:?} fired at {:.2}s (due {:.2}s)",
            entry.action, now, entry.fire_at
        );
        match entry.action {
            DeferredAction::PlayCue(cue) => {
                cues.write(PlayCue(cue));
            }
            DeferredAction::RespawnEnemy(enemy) => {
                respawns.write(RespawnEnemyRequested { enemy });
            }
            DeferredAction::ReloadScene => {
                reloads.write(SceneReloadRequested);
            }
        }
    }
}
