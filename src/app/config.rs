//! Settings loading from the deployment directory.

use tracing::debug;

use crate::domain::layout::SETTINGS_FILE;
use crate::domain::settings::parse_settings_content;
use crate::domain::{AppError, Settings};
use crate::ports::ArtifactStore;

/// Load `odoogen.toml` if present, otherwise the built-in settings.
pub fn load_settings<S: ArtifactStore>(store: &S) -> Result<Settings, AppError> {
    if !store.file_exists(SETTINGS_FILE) {
        debug!("no {} found, using built-in defaults", SETTINGS_FILE);
        return Ok(Settings::default());
    }

    let content = store.read_file(SETTINGS_FILE)?;
    parse_settings_content(&content)
}
