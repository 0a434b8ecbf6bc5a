use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, OrchestratorSettings};
use crate::ports::Orchestrator;

/// Runs `docker compose up -d` (or the configured equivalent) in the
/// deployment directory. Output goes straight to the operator's terminal.
#[derive(Debug, Clone)]
pub struct ComposeCommandAdapter {
    settings: OrchestratorSettings,
    workdir: PathBuf,
}

impl ComposeCommandAdapter {
    pub fn new(settings: &OrchestratorSettings, workdir: PathBuf) -> Self {
        Self { settings: settings.clone(), workdir }
    }
}

impl Orchestrator for ComposeCommandAdapter {
    fn up_detached(&self) -> Result<(), AppError> {
        debug!(command = %self.command_line(), workdir = %self.workdir.display(), "starting services");

        let program = &self.settings.program;
        let status = Command::new(program)
            .args(&self.settings.args)
            .current_dir(&self.workdir)
            .status()
            .map_err(|e| AppError::ExternalToolError {
                tool: program.clone(),
                error: format!("Failed to execute '{}': {}", self.command_line(), e),
            })?;

        if !status.success() {
            return Err(AppError::ExternalToolError {
                tool: program.clone(),
                error: format!("'{}' exited with {}", self.command_line(), status),
            });
        }

        Ok(())
    }

    fn command_line(&self) -> String {
        self.settings.display_command()
    }
}
