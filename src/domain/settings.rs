//! Optional settings loaded from `odoogen.toml`.

use serde::Deserialize;

use super::AppError;

/// Settings for a generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Defaults offered by the free-text prompts.
    #[serde(default)]
    pub defaults: Defaults,
    /// Image repositories for the two services.
    #[serde(default)]
    pub images: Images,
    /// Command used to start the services.
    #[serde(default)]
    pub orchestrator: OrchestratorSettings,
}

/// Value applied when a prompt is answered with an empty line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_postgres_version")]
    pub postgres_version: String,
    #[serde(default = "default_postgres_db")]
    pub postgres_db: String,
    #[serde(default = "default_postgres_user")]
    pub postgres_user: String,
    #[serde(default = "default_password")]
    pub postgres_password: String,
    #[serde(default = "default_password")]
    pub admin_password: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            port: default_port(),
            postgres_version: default_postgres_version(),
            postgres_db: default_postgres_db(),
            postgres_user: default_postgres_user(),
            postgres_password: default_password(),
            admin_password: default_password(),
        }
    }
}

/// Command-line overrides for [`Defaults`]; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct DefaultOverrides {
    pub port: Option<u16>,
    pub postgres_version: Option<String>,
    pub postgres_db: Option<String>,
    pub postgres_user: Option<String>,
}

impl Defaults {
    pub fn apply_overrides(&mut self, overrides: DefaultOverrides) {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(version) = overrides.postgres_version {
            self.postgres_version = version;
        }
        if let Some(db) = overrides.postgres_db {
            self.postgres_db = db;
        }
        if let Some(user) = overrides.postgres_user {
            self.postgres_user = user;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Images {
    #[serde(default = "default_odoo_image")]
    pub odoo: String,
    #[serde(default = "default_postgres_image")]
    pub postgres: String,
}

impl Default for Images {
    fn default() -> Self {
        Self { odoo: default_odoo_image(), postgres: default_postgres_image() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrchestratorSettings {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self { program: default_program(), args: default_args() }
    }
}

impl OrchestratorSettings {
    /// Command line as shown to the user.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.defaults.port == 0 {
            return Err(AppError::config_error("defaults.port must be between 1 and 65535"));
        }
        if self.images.odoo.trim().is_empty() || self.images.postgres.trim().is_empty() {
            return Err(AppError::config_error("images.odoo and images.postgres must not be empty"));
        }
        if self.orchestrator.program.trim().is_empty() {
            return Err(AppError::config_error("orchestrator.program must not be empty"));
        }
        Ok(())
    }
}

/// Parse and validate settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

fn default_port() -> u16 {
    8078
}

fn default_postgres_version() -> String {
    "15".to_string()
}

fn default_postgres_db() -> String {
    "postgres".to_string()
}

fn default_postgres_user() -> String {
    "odoo".to_string()
}

fn default_password() -> String {
    "admin".to_string()
}

fn default_odoo_image() -> String {
    "odoo".to_string()
}

fn default_postgres_image() -> String {
    "postgres".to_string()
}

fn default_program() -> String {
    "docker".to_string()
}

fn default_args() -> Vec<String> {
    vec!["compose".to_string(), "up".to_string(), "-d".to_string()]
}
