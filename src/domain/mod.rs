pub mod answer;
pub mod compose;
pub mod error;
pub mod layout;
pub mod odoo_config;
pub mod parameters;
pub mod settings;
pub mod version;

pub use answer::YesNo;
pub use compose::{ComposeFile, SecretDefinition, Service, render_descriptor};
pub use error::AppError;
pub use odoo_config::OdooConfig;
pub use parameters::{AddonPath, DeploymentParameters, ParameterValues};
pub use settings::{DefaultOverrides, Defaults, Images, OrchestratorSettings, Settings};
pub use version::OdooVersion;
