use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Orchestrator;

/// Records launch requests and optionally fails them.
#[derive(Debug, Default)]
pub struct FakeOrchestrator {
    pub launches: Mutex<usize>,
    pub failure: Option<String>,
}

impl FakeOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { launches: Mutex::new(0), failure: Some(message.to_string()) }
    }

    pub fn launch_count(&self) -> usize {
        *self.launches.lock().unwrap()
    }
}

impl Orchestrator for FakeOrchestrator {
    fn up_detached(&self) -> Result<(), AppError> {
        *self.launches.lock().unwrap() += 1;
        match &self.failure {
            Some(message) => {
                Err(AppError::ExternalToolError { tool: "docker".into(), error: message.clone() })
            }
            None => Ok(()),
        }
    }

    fn command_line(&self) -> String {
        "docker compose up -d".to_string()
    }
}
