pub mod deploy;
pub mod generate;
pub mod launch;
pub mod render;
