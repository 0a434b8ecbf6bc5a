//! Preview the compose file without prompting or writing anything.

use crate::app::collector::parameters_from_defaults;
use crate::domain::{AppError, OdooVersion, Settings, render_descriptor};

/// Render the descriptor a run would produce if every prompt took its default.
pub fn execute(settings: &Settings, version: OdooVersion) -> Result<String, AppError> {
    let params = parameters_from_defaults(&settings.defaults, version);
    render_descriptor(&params, &settings.images)
}
