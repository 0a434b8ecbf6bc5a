use crate::ports::{ArtifactStore, Orchestrator, PromptChannel};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: PromptChannel, S: ArtifactStore, O: Orchestrator> {
    prompt: P,
    store: S,
    orchestrator: O,
}

impl<P: PromptChannel, S: ArtifactStore, O: Orchestrator> AppContext<P, S, O> {
    /// Create a new application context.
    pub fn new(prompt: P, store: S, orchestrator: O) -> Self {
        Self { prompt, store, orchestrator }
    }

    /// Get a reference to the prompt channel.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the orchestrator.
    pub fn orchestrator(&self) -> &O {
        &self.orchestrator
    }
}
