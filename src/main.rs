mod arena;
mod audio;
mod combo;
mod contacts;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod deferred;
mod enemy;
mod movement;

#[cfg(test)]
mod test_support;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cube Knockoff".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        audio::AudioCuePlugin,
        deferred::DeferredPlugin,
        movement::MovementPlugin,
        combo::ComboPlugin,
        enemy::EnemyPlugin,
        contacts::ContactsPlugin,
        arena::ArenaPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
