//! Movement domain: input resources.

use bevy::prelude::*;

/// Control state sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct ControlInput {
    /// x: strafe (right positive), y: forward (away from the camera positive)
    pub axis: Vec2,
    pub jump_just_pressed: bool,
}

impl ControlInput {
    /// World-space horizontal direction for the current axes. Forward maps to -Z.
    pub fn planar_direction(&self) -> Vec3 {
        Vec3::new(self.axis.x, 0.0, -self.axis.y)
    }
}
