//! Contacts domain: collision categories.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// What a body counts as when the player runs into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactTag {
    Ground,
    Enemy,
    ComboTarget,
}

impl ContactTag {
    fn bit(self) -> u8 {
        match self {
            ContactTag::Ground => 1 << 0,
            ContactTag::Enemy => 1 << 1,
            ContactTag::ComboTarget => 1 << 2,
        }
    }
}

/// Set of categories carried by a collider. A body may be several at once.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContactTags(u8);

impl ContactTags {
    pub const NONE: ContactTags = ContactTags(0);

    pub fn new(tags: impl IntoIterator<Item = ContactTag>) -> Self {
        tags.into_iter().fold(Self::NONE, Self::with)
    }

    pub fn with(self, tag: ContactTag) -> Self {
        Self(self.0 | tag.bit())
    }

    pub fn contains(self, tag: ContactTag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Hits that feed the combo counter.
    pub fn is_combo_hit(self) -> bool {
        self.contains(ContactTag::Enemy) || self.contains(ContactTag::ComboTarget)
    }
}

/// The player started touching another body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerContact {
    pub player: Entity,
    pub other: Entity,
    pub tags: ContactTags,
}

impl Message for PlayerContact {}
