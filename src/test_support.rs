//! Headless app harness shared by the system-level tests.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::audio::{AudioCuePlugin, PlayCue, SoundCue};
use crate::combo::{ComboPlugin, ComboTracker};
use crate::contacts::ContactsPlugin;
use crate::content::ControllerConfig;
use crate::core::{CorePlugin, GameState, SceneMember};
use crate::deferred::DeferredPlugin;
use crate::enemy::{Enemy, EnemyPlugin, FallWatch};
use crate::movement::{JumpCounter, MovementAudio, MovementPlugin, Player};

pub const FRAME: Duration = Duration::from_millis(20);

/// Every cue played, in order.
#[derive(Resource, Debug, Default)]
pub struct CueLog(pub Vec<SoundCue>);

impl CueLog {
    pub fn count(&self, cue: SoundCue) -> usize {
        self.0.iter().filter(|c| **c == cue).count()
    }
}

fn record_cues(mut cues: MessageReader<PlayCue>, mut log: ResMut<CueLog>) {
    log.0.extend(cues.read().map(|PlayCue(cue)| *cue));
}

/// Controller plugins on top of `MinimalPlugins`, with no physics, audio or
/// rendering backends. Leaves the app in `GameState::Playing`.
pub fn controller_app(config: ControllerConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(config)
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<CueLog>()
        .add_message::<CollisionStart>()
        .add_plugins((
            CorePlugin,
            AudioCuePlugin,
            DeferredPlugin,
            MovementPlugin,
            ComboPlugin,
            EnemyPlugin,
            ContactsPlugin,
        ))
        .add_systems(Last, record_cues);

    // Startup, then Boot -> Playing
    app.update();
    app.update();
    assert_eq!(state(&app), GameState::Playing);
    app
}

pub fn state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

pub fn player_bundle(position: Vec3) -> impl Bundle {
    (
        SceneMember,
        Player,
        JumpCounter::default(),
        ComboTracker::default(),
        MovementAudio::new(position),
        Transform::from_translation(position),
        LinearVelocity::default(),
    )
}

pub fn enemy_bundle(position: Vec3) -> impl Bundle {
    (
        SceneMember,
        Enemy,
        FallWatch::new(position),
        Transform::from_translation(position),
        LinearVelocity::default(),
        AngularVelocity::default(),
    )
}

pub fn spawn_player(app: &mut App, position: Vec3) -> Entity {
    app.world_mut().spawn(player_bundle(position)).id()
}

pub fn spawn_enemy(app: &mut App, position: Vec3) -> Entity {
    app.world_mut().spawn(enemy_bundle(position)).id()
}

pub fn set_y(app: &mut App, entity: Entity, y: f32) {
    if let Some(mut transform) = app.world_mut().get_mut::<Transform>(entity) {
        transform.translation.y = y;
    }
}

/// Press a key for exactly one frame, the way `InputPlugin` would report it.
pub fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(key);
    keyboard.clear();
}

pub fn elapsed(app: &App) -> f32 {
    app.world().resource::<Time>().elapsed_secs()
}

/// Run frames until at least `seconds` of game time have passed.
pub fn advance(app: &mut App, seconds: f32) {
    let target = elapsed(app) + seconds;
    while elapsed(app) < target {
        app.update();
    }
}

pub fn cues(app: &App) -> &CueLog {
    app.world().resource::<CueLog>()
}

pub fn clear_cues(app: &mut App) {
    app.world_mut().resource_mut::<CueLog>().0.clear();
}
