//! Test double for `PromptChannel` that replays canned answers.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PromptChannel;

/// Answers prompts from a fixed script and records the conversation.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<String>>,
    pub asked: Mutex<Vec<String>>,
    pub said: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
            said: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn said(&self) -> Vec<String> {
        self.said.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    /// True if any informational line contains `needle`.
    pub fn said_containing(&self, needle: &str) -> bool {
        self.said.lock().unwrap().iter().any(|line| line.contains(needle))
    }
}

impl PromptChannel for ScriptedPrompt {
    fn ask(&self, prompt: &str) -> Result<String, AppError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::InputClosed(prompt.to_string()))
    }

    fn say(&self, message: &str) {
        self.said.lock().unwrap().push(message.to_string());
    }
}
