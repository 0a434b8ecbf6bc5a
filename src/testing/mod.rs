mod fake_orchestrator;
mod memory_store;
mod scripted_prompt;

pub use fake_orchestrator::FakeOrchestrator;
pub use memory_store::MemoryArtifactStore;
pub use scripted_prompt::ScriptedPrompt;
