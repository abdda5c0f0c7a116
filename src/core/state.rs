//! Core domain: game state definitions for the play loop.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Playing,
    /// Terminal until the scheduled reload puts the game back into `Playing`.
    GameOver,
}
