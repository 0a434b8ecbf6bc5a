use crate::domain::AppError;

/// External tool that starts the services described by the compose file.
pub trait Orchestrator {
    /// Bring the services up in the background.
    ///
    /// Fails with [`AppError::ExternalToolError`] when the tool cannot be
    /// started or exits unsuccessfully.
    fn up_detached(&self) -> Result<(), AppError>;

    /// Command line shown to the operator.
    fn command_line(&self) -> String;
}
