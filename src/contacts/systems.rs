//! Contacts domain: turning physics contacts into controller effects.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlayCue, SoundCue, SoundLibrary};
use crate::combo::ComboTracker;
use crate::contacts::{ContactTag, ContactTags, PlayerContact};
use crate::content::ControllerConfig;
use crate::movement::{JumpCounter, Player};

/// Forward collision starts that involve the player, with the other body's tags.
pub(crate) fn forward_player_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    mut contacts: MessageWriter<PlayerContact>,
    players: Query<(), With<Player>>,
    tags: Query<&ContactTags>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, other) in pairs {
            if !players.contains(player) {
                continue;
            }

            contacts.write(PlayerContact {
                player,
                other,
                tags: tags.get(other).copied().unwrap_or_default(),
            });
        }
    }
}

/// Every contact may play the collision cue; the tags then decide the rest.
pub(crate) fn handle_player_contacts(
    mut contacts: MessageReader<PlayerContact>,
    mut cues: MessageWriter<PlayCue>,
    config: Res<ControllerConfig>,
    library: Res<SoundLibrary>,
    mut players: Query<(&mut JumpCounter, &mut ComboTracker), With<Player>>,
) {
    for contact in contacts.read() {
        let Ok((mut jumps, mut combo)) = players.get_mut(contact.player) else {
            continue;
        };

        if library.is_configured(SoundCue::Collision) {
            cues.write(PlayCue(SoundCue::Collision));
        }

        if contact.tags.contains(ContactTag::Ground) {
            jumps.reset();
            cues.write(PlayCue(SoundCue::Landing));
            debug!("Landed on {:?}", contact.other);
        }

        if contact.tags.is_combo_hit() {
            if combo.hit(config.combo_window) {
                cues.write(PlayCue(SoundCue::Combo));
            }
            debug!("Combo hit on {:?}: {}", contact.other, combo.counter);
        }
    }
}
