//! Movement domain: system modules for locomotion updates.

pub(crate) mod falling;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use falling::detect_fall;
pub(crate) use input::read_input;
pub(crate) use movement::{apply_jump, apply_movement};
