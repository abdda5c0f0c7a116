//! Loader for the RON controller config at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ControllerConfig;
use super::validation::validate_config;

/// Location of the controller config, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/controller.ron";

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse config text. `file` is only used for error reporting.
pub fn parse_controller_config(
    contents: &str,
    file: &str,
) -> Result<ControllerConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn load_controller_config(path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_controller_config(&contents, &file_name)
}

/// Startup system: replace the default config with the one on disk, if any.
pub(crate) fn load_config_from_disk(mut config: ResMut<ControllerConfig>) {
    let loaded = match load_controller_config(Path::new(CONFIG_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default controller config", e);
            return;
        }
    };

    for error in validate_config(&loaded) {
        warn!("Controller config: {}", error);
    }

    info!(
        "Loaded controller config: move_speed={}, jump_force={}, fall_threshold={}, {} sounds",
        loaded.move_speed,
        loaded.jump_force,
        loaded.fall_threshold,
        loaded.sounds.len()
    );
    *config = loaded;
}
