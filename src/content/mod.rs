//! Content domain: controller config loading and validation.

mod data;
mod loader;
mod validation;


pub use data::ControllerConfig;

use bevy::prelude::*;

use crate::content::loader::load_config_from_disk;

/// Startup work that other plugins order themselves after.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentLoaded;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerConfig>()
            .add_systems(Startup, load_config_from_disk.in_set(ContentLoaded));
    }
}
