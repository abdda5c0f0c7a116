//! Validation for controller tuning and the sound table.

use std::collections::HashSet;

use super::data::ControllerConfig;
use crate::audio::SoundCue;

/// A validation problem with the field it was found in.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotPositive { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
    MissingCue(SoundCue),
    DuplicateCue(SoundCue),
    SilentCue(SoundCue),
    BadClipLength { cue: SoundCue, length: f32 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotPositive { field, value } => {
                write!(f, "'{}' must be positive, got {}", field, value)
            }
            ValidationError::Negative { field, value } => {
                write!(f, "'{}' must not be negative, got {}", field, value)
            }
            ValidationError::MissingCue(cue) => write!(f, "no sound entry for {:?}", cue),
            ValidationError::DuplicateCue(cue) => {
                write!(f, "sound {:?} is defined more than once", cue)
            }
            ValidationError::SilentCue(cue) => write!(f, "sound {:?} has no clip path", cue),
            ValidationError::BadClipLength { cue, length } => {
                write!(f, "sound {:?} has invalid length {}", cue, length)
            }
        }
    }
}

/// Validate a config. Returns a list of problems, empty if the config is usable as-is.
pub fn validate_config(config: &ControllerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("move_speed", config.move_speed),
        ("jump_force", config.jump_force),
        ("combo_window", config.combo_window),
    ] {
        if value.is_nan() || value <= 0.0 {
            errors.push(ValidationError::NotPositive { field, value });
        }
    }

    for (field, value) in [
        ("game_over_delay", config.game_over_delay),
        ("respawn_buffer", config.respawn_buffer),
    ] {
        if value.is_nan() || value < 0.0 {
            errors.push(ValidationError::Negative { field, value });
        }
    }

    let mut seen = HashSet::new();
    for def in &config.sounds {
        if !seen.insert(def.cue) {
            errors.push(ValidationError::DuplicateCue(def.cue));
        }
        if def.path.is_none() && !def.cue.is_optional() {
            errors.push(ValidationError::SilentCue(def.cue));
        }
        if !def.length.is_finite() || def.length <= 0.0 {
            errors.push(ValidationError::BadClipLength {
                cue: def.cue,
                length: def.length,
            });
        }
    }

    for cue in SoundCue::ALL {
        if !seen.contains(&cue) {
            errors.push(ValidationError::MissingCue(cue));
        }
    }

    errors
}
