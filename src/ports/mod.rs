mod artifact_store;
mod orchestrator;
mod prompt_channel;

pub use artifact_store::ArtifactStore;
pub use orchestrator::Orchestrator;
pub use prompt_channel::PromptChannel;
