use tracing::warn;

use crate::app::collector::prompt_yes_no;
use crate::domain::{AppError, YesNo};
use crate::ports::{Orchestrator, PromptChannel};

/// What happened after the operator was offered to start the services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Started,
    /// The orchestrator failed; the message was shown to the operator.
    Failed(String),
    Declined,
    /// The question was not asked.
    Skipped,
}

/// Offer to start the services and report the result.
///
/// Orchestrator failures are reported on the prompt channel and returned as
/// [`LaunchOutcome::Failed`]; only prompt errors propagate.
pub fn execute<P, O>(prompt: &P, orchestrator: &O) -> Result<LaunchOutcome, AppError>
where
    P: PromptChannel,
    O: Orchestrator,
{
    match prompt_yes_no(prompt, "Do you want to run 'Odoo' now?")? {
        YesNo::Yes => match orchestrator.up_detached() {
            Ok(()) => {
                prompt.say("✅ Docker Compose services started successfully!");
                Ok(LaunchOutcome::Started)
            }
            Err(err) => {
                warn!(error = %err, "orchestrator failed");
                prompt.say(&format!("❌ Error: {}", err));
                Ok(LaunchOutcome::Failed(err.to_string()))
            }
        },
        YesNo::No => {
            prompt.say(&format!(
                "⚠️  Please remember to run '{}' to start the services.",
                orchestrator.command_line()
            ));
            Ok(LaunchOutcome::Declined)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeOrchestrator, ScriptedPrompt};

    #[test]
    fn yes_starts_services() {
        let prompt = ScriptedPrompt::new(["Y"]);
        let orchestrator = FakeOrchestrator::new();

        let outcome = execute(&prompt, &orchestrator).unwrap();

        assert_eq!(outcome, LaunchOutcome::Started);
        assert_eq!(orchestrator.launch_count(), 1);
        assert!(prompt.said_containing("started successfully"));
    }

    #[test]
    fn no_leaves_a_reminder() {
        let prompt = ScriptedPrompt::new(["n"]);
        let orchestrator = FakeOrchestrator::new();

        let outcome = execute(&prompt, &orchestrator).unwrap();

        assert_eq!(outcome, LaunchOutcome::Declined);
        assert_eq!(orchestrator.launch_count(), 0);
        assert!(prompt.said_containing("docker compose up -d"));
    }

    #[test]
    fn orchestrator_failure_is_reported_not_raised() {
        let prompt = ScriptedPrompt::new(["maybe", "y"]);
        let orchestrator = FakeOrchestrator::failing("daemon not running");

        let outcome = execute(&prompt, &orchestrator).unwrap();

        assert_eq!(outcome, LaunchOutcome::Failed("docker: daemon not running".to_string()));
        assert!(prompt.said_containing("❌ Error: docker: daemon not running"));
        assert_eq!(orchestrator.launch_count(), 1);
    }
}
