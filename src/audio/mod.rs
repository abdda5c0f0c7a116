//! Audio domain: sound cues, the clip library and the shared voice.

mod cues;
mod library;
mod systems;


pub use cues::{PlayCue, SoundCue};
pub use library::{ActiveVoice, SoundLibrary};

use bevy::prelude::*;

use crate::audio::systems::{build_sound_library, expire_voices, play_cues};
use crate::content::ContentLoaded;
use crate::core::ControllerSet;

pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayCue>()
            .add_systems(Startup, build_sound_library.after(ContentLoaded))
            .add_systems(
                Update,
                (expire_voices, play_cues).chain().in_set(ControllerSet::Playback),
            );
    }
}
