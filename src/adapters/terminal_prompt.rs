use std::io::{self, BufRead, ErrorKind, Write};

use dialoguer::{Error as DialoguerError, Input};
use is_terminal::IsTerminal;

use crate::domain::AppError;
use crate::ports::PromptChannel;

/// Prompt channel on the process's stdin/stdout.
///
/// Interactive terminals get dialoguer line editing. Piped stdin is read line
/// by line so answers can be scripted.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self { interactive: io::stdin().is_terminal() }
    }

    fn ask_interactive(&self, prompt: &str) -> Result<String, AppError> {
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::InputClosed(prompt.to_string()))
            }
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }

    fn ask_piped(&self, prompt: &str) -> Result<String, AppError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}: ", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            writeln!(stdout)?;
            return Err(AppError::InputClosed(prompt.to_string()));
        }
        writeln!(stdout)?;

        Ok(strip_line_ending(&line).to_string())
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptChannel for TerminalPrompt {
    fn ask(&self, prompt: &str) -> Result<String, AppError> {
        if self.interactive { self.ask_interactive(prompt) } else { self.ask_piped(prompt) }
    }

    fn say(&self, message: &str) {
        println!("{}", message);
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n').map(|rest| rest.strip_suffix('\r').unwrap_or(rest)).unwrap_or(line)
}
