//! Arena domain: the playable scene, rebuilt on every entry into `Playing`.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::combo::ComboTracker;
use crate::contacts::{ContactTag, ContactTags};
use crate::core::{GameState, SceneMember};
use crate::enemy::{Enemy, FallWatch};
use crate::movement::{JumpCounter, MovementAudio, Player};

const PLAYER_START: Vec3 = Vec3::new(0.0, 1.0, 3.0);
const ENEMY_START: Vec3 = Vec3::new(0.0, 1.0, -3.0);

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), spawn_arena);
    }
}

/// Camera and light outlive scene reloads.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 12.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub(crate) fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let pillar_color = Color::srgb(0.8, 0.6, 0.2);

    // Ground
    commands.spawn((
        SceneMember,
        ContactTags::new([ContactTag::Ground]),
        Mesh3d(meshes.add(Cuboid::new(14.0, 1.0, 14.0))),
        MeshMaterial3d(materials.add(ground_color)),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(14.0, 1.0, 14.0),
    ));

    // Combo pillars: each bump counts toward the combo
    for x in [-5.0, 5.0] {
        commands.spawn((
            SceneMember,
            ContactTags::new([ContactTag::ComboTarget]),
            Mesh3d(meshes.add(Cuboid::new(1.0, 3.0, 1.0))),
            MeshMaterial3d(materials.add(pillar_color)),
            Transform::from_xyz(x, 1.5, 0.0),
            RigidBody::Static,
            Collider::cuboid(1.0, 3.0, 1.0),
        ));
    }

    // Enemy
    commands.spawn((
        SceneMember,
        Enemy,
        FallWatch::new(ENEMY_START),
        ContactTags::new([ContactTag::Enemy]),
        Mesh3d(meshes.add(Cuboid::new(1.2, 1.2, 1.2))),
        MeshMaterial3d(materials.add(Color::srgb(0.85, 0.2, 0.2))),
        Transform::from_translation(ENEMY_START),
        RigidBody::Dynamic,
        Collider::cuboid(1.2, 1.2, 1.2),
        LinearVelocity::default(),
        AngularVelocity::default(),
    ));

    // Player
    commands.spawn((
        (
            SceneMember,
            Player,
            JumpCounter::default(),
            ComboTracker::default(),
            MovementAudio::new(PLAYER_START),
        ),
        Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.2, 0.5, 0.9))),
        Transform::from_translation(PLAYER_START),
        (
            RigidBody::Dynamic,
            Collider::cuboid(1.0, 1.0, 1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            CollisionEventsEnabled,
        ),
    ));

    info!("Arena spawned");
}
