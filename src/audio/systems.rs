//! Audio domain: playback of cue requests.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::audio::{ActiveVoice, PlayCue, SoundLibrary};
use crate::content::ControllerConfig;

pub(crate) fn build_sound_library(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    asset_server: Option<Res<AssetServer>>,
) {
    let library = SoundLibrary::from_config(&config, asset_server.as_deref());
    info!("Sound library ready with {} cues", config.sounds.len());
    commands.insert_resource(library);
}

/// Spawn a voice for every requested cue that names a clip. A named clip that
/// is not loaded still occupies the voice for its configured length; a cue
/// with no clip at all is silent and leaves the voice free.
pub(crate) fn play_cues(
    mut commands: Commands,
    mut requests: MessageReader<PlayCue>,
    library: Res<SoundLibrary>,
) {
    for PlayCue(cue) in requests.read() {
        let Some(clip) = library.clip(*cue) else {
            debug!("No sound entry for {:?}, skipping", cue);
            continue;
        };
        if !clip.configured {
            debug!("{:?} has no clip, skipping", cue);
            continue;
        }

        let voice = ActiveVoice {
            cue: *cue,
            remaining: clip.length,
        };

        match &clip.handle {
            Some(handle) => {
                commands.spawn((
                    voice,
                    AudioPlayer::new(handle.clone()),
                    PlaybackSettings::DESPAWN,
                ));
            }
            None => {
                commands.spawn(voice);
            }
        }
    }
}

pub(crate) fn expire_voices(
    mut commands: Commands,
    time: Res<Time>,
    mut voices: Query<(Entity, &mut ActiveVoice)>,
) {
    let dt = time.delta_secs();

    for (entity, mut voice) in &mut voices {
        voice.remaining -= dt;
        if voice.remaining <= 0.0 {
            debug!("{:?} finished", voice.cue);
            commands.entity(entity).try_despawn();
        }
    }
}
