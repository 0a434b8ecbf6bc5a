use crate::domain::AppError;

/// Line-oriented question/answer channel with the operator.
///
/// Validation and retries live in the caller; implementations only move text.
pub trait PromptChannel {
    /// Show `prompt` and return the answer without its line terminator.
    ///
    /// Returns [`AppError::InputClosed`] once no further answers can be read.
    fn ask(&self, prompt: &str) -> Result<String, AppError>;

    /// Show an informational line.
    fn say(&self, message: &str);
}
