//! Core domain: events for scene flow.

use bevy::ecs::message::Message;

/// Event fired when the current scene should be torn down and rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneReloadRequested;

impl Message for SceneReloadRequested {}
