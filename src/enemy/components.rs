//! Enemy domain: components for the knock-off target.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Enemy;

/// Watches an enemy for falling off the arena.
///
/// `fall_announced` is the latch: set when the enemy crosses the threshold,
/// cleared when it is summoned back to `start`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FallWatch {
    pub start: Vec3,
    pub fall_announced: bool,
}

impl FallWatch {
    pub fn new(start: Vec3) -> Self {
        Self {
            start,
            fall_announced: false,
        }
    }

    /// Returns true exactly once per fall: on the first check below `threshold`
    /// since the last reset.
    pub fn check(&mut self, y: f32, threshold: f32) -> bool {
        if self.fall_announced || y >= threshold {
            return false;
        }
        self.fall_announced = true;
        true
    }

    /// Re-arm the watch. Returns the position the enemy goes back to.
    pub fn reset(&mut self) -> Vec3 {
        self.fall_announced = false;
        self.start
    }
}

/// Request to put a fallen enemy back at its start position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RespawnEnemyRequested {
    pub enemy: Entity,
}

impl Message for RespawnEnemyRequested {}
