//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{ComposeCommandAdapter, FilesystemStore, TerminalPrompt};
use crate::app::{
    AppContext, config,
    commands::{deploy, render},
};
use crate::domain::{DefaultOverrides, OdooVersion, Settings};

pub use crate::app::commands::deploy::{DeployOptions, DeploySummary};
pub use crate::domain::AppError;

/// Open the deployment directory and load its settings with CLI overrides applied.
fn open_directory(
    dir: PathBuf,
    overrides: DefaultOverrides,
) -> Result<(FilesystemStore, Settings), AppError> {
    if !dir.is_dir() {
        return Err(AppError::InvalidPath(format!("{} is not a directory", dir.display())));
    }
    let store = FilesystemStore::new(dir);
    let mut settings = config::load_settings(&store)?;
    settings.defaults.apply_overrides(overrides);
    Ok((store, settings))
}

/// Run the interactive generator in `dir` on the process's terminal.
pub fn deploy_at(
    dir: impl Into<PathBuf>,
    overrides: DefaultOverrides,
    options: &DeployOptions,
) -> Result<DeploySummary, AppError> {
    let (store, settings) = open_directory(dir.into(), overrides)?;
    let orchestrator = ComposeCommandAdapter::new(&settings.orchestrator, store.root().to_path_buf());
    let ctx = AppContext::new(TerminalPrompt::new(), store, orchestrator);

    deploy::execute(&ctx, &settings, options)
}

/// Render the compose file for `version` from defaults only.
pub fn render_at(
    dir: impl Into<PathBuf>,
    overrides: DefaultOverrides,
    version: OdooVersion,
) -> Result<String, AppError> {
    let (_, settings) = open_directory(dir.into(), overrides)?;
    render::execute(&settings, version)
}
