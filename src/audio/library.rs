//! Audio domain: clip handles and voice tracking.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::audio::SoundCue;
use crate::content::ControllerConfig;

#[derive(Debug, Clone, Default)]
pub struct SoundClip {
    /// Whether the config names a clip for this cue at all.
    pub configured: bool,
    pub handle: Option<Handle<AudioSource>>,
    pub length: f32,
}

/// Loaded clips keyed by cue. Lives for the whole session.
#[derive(Resource, Debug, Default)]
pub struct SoundLibrary {
    clips: HashMap<SoundCue, SoundClip>,
}

impl SoundLibrary {
    /// Build the library from the config. Without an asset server the clips
    /// keep their lengths but have no handles.
    pub fn from_config(config: &ControllerConfig, asset_server: Option<&AssetServer>) -> Self {
        let clips = config
            .sounds
            .iter()
            .map(|def| {
                let handle = match (asset_server, &def.path) {
                    (Some(server), Some(path)) => Some(server.load(path.clone())),
                    _ => None,
                };
                let clip = SoundClip {
                    configured: def.path.is_some(),
                    handle,
                    length: def.length.max(0.0),
                };
                (def.cue, clip)
            })
            .collect();

        Self { clips }
    }

    pub fn clip(&self, cue: SoundCue) -> Option<&SoundClip> {
        self.clips.get(&cue)
    }

    pub fn is_configured(&self, cue: SoundCue) -> bool {
        self.clip(cue).is_some_and(|clip| clip.configured)
    }
}

/// A cue that is still sounding. While any exist, the voice counts as busy.
#[derive(Component, Debug)]
pub struct ActiveVoice {
    pub cue: SoundCue,
    pub remaining: f32,
}
