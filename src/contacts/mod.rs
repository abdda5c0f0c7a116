//! Contacts domain: collision categories and the player contact handler.

mod systems;
mod tags;

#[cfg(test)]
mod tests;

pub use tags::{ContactTag, ContactTags, PlayerContact};

use bevy::prelude::*;

use crate::contacts::systems::{forward_player_contacts, handle_player_contacts};
use crate::core::ControllerSet;

pub struct ContactsPlugin;

impl Plugin for ContactsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerContact>().add_systems(
            Update,
            (forward_player_contacts, handle_player_contacts)
                .chain()
                .in_set(ControllerSet::Contacts),
        );
    }
}
