//! Combo domain: counting qualifying hits within a rolling window.

mod tracker;

pub use tracker::ComboTracker;

use bevy::prelude::*;

use crate::core::TickStep;
use crate::movement::Player;

pub(crate) fn decay_combo(time: Res<Time>, mut query: Query<&mut ComboTracker, With<Player>>) {
    let dt = time.delta_secs();

    for mut combo in &mut query {
        if combo.decay(dt) {
            debug!("Combo lapsed");
        }
    }
}

pub struct ComboPlugin;

impl Plugin for ComboPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, decay_combo.in_set(TickStep::ComboDecay));
    }
}
