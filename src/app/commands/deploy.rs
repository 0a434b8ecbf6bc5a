//! The full interactive run: collect, generate, and optionally launch.

use crate::app::AppContext;
use crate::app::collector::ParameterCollector;
use crate::domain::{AppError, DeploymentParameters, Settings};
use crate::ports::{ArtifactStore, Orchestrator, PromptChannel};

use super::generate::{self, GenerateOutcome};
use super::launch::{self, LaunchOutcome};

#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Do not offer to start the services.
    pub skip_launch: bool,
}

#[derive(Debug, Clone)]
pub struct DeploySummary {
    pub parameters: DeploymentParameters,
    pub generated: GenerateOutcome,
    pub launch: LaunchOutcome,
}

pub fn execute<P, S, O>(
    ctx: &AppContext<P, S, O>,
    settings: &Settings,
    options: &DeployOptions,
) -> Result<DeploySummary, AppError>
where
    P: PromptChannel,
    S: ArtifactStore,
    O: Orchestrator,
{
    let prompt = ctx.prompt();
    let parameters = ParameterCollector::new(prompt, &settings.defaults).collect()?;

    let generated = generate::execute(ctx.store(), &parameters, &settings.images)?;
    for artifact in generated.replaced() {
        prompt.say(&format!("⚠️  Replaced existing {}", artifact.path));
    }
    prompt.say("✅ Docker Compose file and other necessary files created successfully!");

    let launch = if options.skip_launch {
        LaunchOutcome::Skipped
    } else {
        launch::execute(prompt, ctx.orchestrator())?
    };

    Ok(DeploySummary { parameters, generated, launch })
}
