//! Contacts domain: tests for the player contact handler.

use avian3d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::{ContactTag, ContactTags, PlayerContact};
use crate::audio::SoundCue;
use crate::combo::ComboTracker;
use crate::content::ControllerConfig;
use crate::movement::JumpCounter;
use crate::test_support::{advance, clear_cues, controller_app, cues, spawn_player, tap};

fn touch(app: &mut App, player: Entity, tags: &[ContactTag]) {
    let other = app.world_mut().spawn_empty().id();
    app.world_mut()
        .resource_mut::<Messages<PlayerContact>>()
        .write(PlayerContact {
            player,
            other,
            tags: ContactTags::new(tags.iter().copied()),
        });
    app.update();
}

/// Report a collision start the way the physics step does.
fn collide(app: &mut App, collider1: Entity, collider2: Entity) {
    app.world_mut()
        .resource_mut::<Messages<CollisionStart>>()
        .write(CollisionStart {
            collider1,
            collider2,
            body1: Some(collider1),
            body2: Some(collider2),
        });
    app.update();
}

fn spawn_tagged(app: &mut App, tags: &[ContactTag]) -> Entity {
    app.world_mut()
        .spawn(ContactTags::new(tags.iter().copied()))
        .id()
}

fn combo_counter(app: &App, player: Entity) -> u32 {
    app.world()
        .get::<ComboTracker>(player)
        .map_or(0, |combo| combo.counter)
}

fn config_with_collision_clip() -> ControllerConfig {
    let mut config = ControllerConfig::default();
    for def in &mut config.sounds {
        if def.cue == SoundCue::Collision {
            def.path = Some("audio/sfx/collision.ogg".to_string());
        }
    }
    config
}

#[test]
fn test_ground_contact_resets_jumps() {
    let mut app = controller_app(ControllerConfig::default());
    let player = spawn_player(&mut app, Vec3::new(0.0, 3.0, 0.0));

    tap(&mut app, KeyCode::Space);
    tap(&mut app, KeyCode::Space);
    assert_eq!(app.world().get::<JumpCounter>(player).map(|j| j.used()), Some(2));

    touch(&mut app, player, &[ContactTag::Ground]);
    assert_eq!(app.world().get::<JumpCounter>(player).map(|j| j.used()), Some(0));
    assert_eq!(cues(&app).count(SoundCue::Landing), 1);

    // First jump sound again after landing
    clear_cues(&mut app);
    tap(&mut app, KeyCode::Space);
    assert_eq!(cues(&app).count(SoundCue::Jump1), 1);
}

#[test]
fn test_collision_cue_only_when_configured() {
    let mut app = controller_app(ControllerConfig::default());
    let player = spawn_player(&mut app, Vec3::ZERO);
    touch(&mut app, player, &[]);
    assert_eq!(cues(&app).count(SoundCue::Collision), 0);

    let mut app = controller_app(config_with_collision_clip());
    let player = spawn_player(&mut app, Vec3::ZERO);
    touch(&mut app, player, &[]);
    touch(&mut app, player, &[ContactTag::Ground]);
    assert_eq!(cues(&app).count(SoundCue::Collision), 2);
}

#[test]
fn test_untagged_contact_changes_nothing() {
    let mut app = controller_app(ControllerConfig::default());
    let player = spawn_player(&mut app, Vec3::new(0.0, 3.0, 0.0));
    tap(&mut app, KeyCode::Space);

    touch(&mut app, player, &[]);
    assert_eq!(app.world().get::<JumpCounter>(player).map(|j| j.used()), Some(1));
    assert_eq!(combo_counter(&app, player), 0);
    assert_eq!(cues(&app).count(SoundCue::Landing), 0);
}

#[test]
fn test_combo_cue_starts_at_second_hit() {
    let mut app = controller_app(ControllerConfig::default());
    let player = spawn_player(&mut app, Vec3::ZERO);

    touch(&mut app, player, &[ContactTag::Enemy]);
    assert_eq!(combo_counter(&app, player), 1);
    assert_eq!(cues(&app).count(SoundCue::Combo), 0);

    touch(&mut app, player, &[ContactTag::ComboTarget]);
    assert_eq!(combo_counter(&app, player), 2);
    assert_eq!(cues(&app).count(SoundCue::Combo), 1);

    touch(&mut app, player, &[ContactTag::Enemy]);
    assert_eq!(combo_counter(&app, player), 3);
    assert_eq!(cues(&app).count(SoundCue::Combo), 2);
}

#[test]
fn test_combo_lapses_silently() {
    let mut app = controller_app(ControllerConfig::default());
    let player = spawn_player(&mut app, Vec3::ZERO);

    touch(&mut app, player, &[ContactTag::Enemy]);
    touch(&mut app, player, &[ContactTag::Enemy]);
    advance(&mut app, 1.0);
    assert_eq!(combo_counter(&app, player), 2);

    advance(&mut app, 0.6);
    assert_eq!(combo_counter(&app, player), 0);
    assert_eq!(cues(&app).count(SoundCue::Combo), 1);

    // A fresh hit starts a new combo without the cue
    touch(&mut app, player, &[ContactTag::Enemy]);
    assert_eq!(combo_counter(&app, player), 1);
    assert_eq!(cues(&app).count(SoundCue::Combo), 1);
}

#[test]
fn test_tags_apply_independently() {
    let mut app = controller_app(ControllerConfig::default());
    let player = spawn_player(&mut app, Vec3::new(0.0, 3.0, 0.0));
    tap(&mut app, KeyCode::Space);

    touch(&mut app, player, &[ContactTag::Ground, ContactTag::ComboTarget]);
    assert_eq!(app.world().get::<JumpCounter>(player).map(|j| j.used()), Some(0));
    assert_eq!(combo_counter(&app, player), 1);
    assert_eq!(cues(&app).count(SoundCue::Landing), 1);
}

#[test]
fn test_contact_for_non_player_is_ignored() {
    let mut app = controller_app(config_with_collision_clip());
    let player = spawn_player(&mut app, Vec3::ZERO);
    let bystander = app.world_mut().spawn(ComboTracker::default()).id();

    touch(&mut app, bystander, &[ContactTag::Enemy]);
    assert_eq!(combo_counter(&app, player), 0);
    assert_eq!(cues(&app).count(SoundCue::Collision), 0);
}

#[test]
fn test_collision_with_ground_lands_in_either_order() {
    let mut app = controller_app(ControllerConfig::default());
    let player = spawn_player(&mut app, Vec3::new(0.0, 3.0, 0.0));
    let ground = spawn_tagged(&mut app, &[ContactTag::Ground]);

    tap(&mut app, KeyCode::Space);
    tap(&mut app, KeyCode::Space);
    collide(&mut app, ground, player);
    assert_eq!(app.world().get::<JumpCounter>(player).map(|j| j.used()), Some(0));
    assert_eq!(cues(&app).count(SoundCue::Landing), 1);

    tap(&mut app, KeyCode::Space);
    collide(&mut app, player, ground);
    assert_eq!(app.world().get::<JumpCounter>(player).map(|j| j.used()), Some(0));
    assert_eq!(cues(&app).count(SoundCue::Landing), 2);
}

#[test]
fn test_collision_uses_the_other_bodys_tags() {
    let mut app = controller_app(ControllerConfig::default());
    let player = spawn_player(&mut app, Vec3::ZERO);
    // Tags on the player itself must not count as a hit
    app.world_mut()
        .entity_mut(player)
        .insert(ContactTags::new([ContactTag::Ground]));
    let enemy = spawn_tagged(&mut app, &[ContactTag::Enemy]);

    collide(&mut app, enemy, player);
    assert_eq!(combo_counter(&app, player), 1);
    assert_eq!(cues(&app).count(SoundCue::Landing), 0);

    collide(&mut app, player, enemy);
    assert_eq!(combo_counter(&app, player), 2);
    assert_eq!(cues(&app).count(SoundCue::Combo), 1);
}

#[test]
fn test_collision_without_player_is_not_forwarded() {
    let mut app = controller_app(config_with_collision_clip());
    let player = spawn_player(&mut app, Vec3::ZERO);
    let ground = spawn_tagged(&mut app, &[ContactTag::Ground]);
    let enemy = spawn_tagged(&mut app, &[ContactTag::Enemy]);

    collide(&mut app, ground, enemy);
    assert!(app.world().resource::<Messages<PlayerContact>>().is_empty());
    assert_eq!(combo_counter(&app, player), 0);
    assert_eq!(cues(&app).count(SoundCue::Collision), 0);
    assert_eq!(cues(&app).count(SoundCue::Landing), 0);
}
