pub mod compose_command;
pub mod filesystem_store;
pub mod terminal_prompt;

pub use compose_command::ComposeCommandAdapter;
pub use filesystem_store::FilesystemStore;
pub use terminal_prompt::TerminalPrompt;
