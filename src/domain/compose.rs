//! Typed model of the generated `docker-compose.yaml`.
//!
//! Only the subset of the Compose format the generator writes is modelled.
//! Field order follows declaration order and maps are `BTreeMap`s, so a given
//! parameter set always serializes to the same bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AppError;
use super::layout::{self, container};
use super::parameters::DeploymentParameters;
use super::settings::Images;

pub const COMPOSE_VERSION: &str = "3.1";
pub const WEB_SERVICE: &str = "web";
pub const DB_SERVICE: &str = "db";

/// Root of a compose file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeFile {
    pub version: String,
    pub services: BTreeMap<String, Service>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secrets: BTreeMap<String, SecretDefinition>,
}

/// A single service entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    /// `KEY=value` entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<String>,
}

/// A file-backed secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretDefinition {
    pub file: String,
}

fn bind(host: impl AsRef<str>, target: &str) -> String {
    format!("{}:{}", host.as_ref(), target)
}

fn env(key: &str, value: impl AsRef<str>) -> String {
    format!("{}={}", key, value.as_ref())
}

impl ComposeFile {
    /// Build the two-service Odoo deployment for `params`.
    pub fn from_parameters(params: &DeploymentParameters, images: &Images) -> Self {
        let secret_path = layout::secret_mount(layout::SECRET_NAME);

        let web = Service {
            image: format!("{}:{}", images.odoo, params.odoo_version().tag()),
            depends_on: vec![DB_SERVICE.to_string()],
            ports: vec![format!("{}:{}", params.port(), layout::CONTAINER_PORT)],
            volumes: vec![
                bind(layout::local_dir(layout::WEB_DATA_DIR), container::ODOO_DATA),
                bind(layout::local_dir(layout::CONFIG_DIR), container::ODOO_CONFIG),
                bind(params.extra_addons().host_mount(), container::EXTRA_ADDONS),
                bind(params.enterprise_addons().host_mount(), container::ENTERPRISE_ADDONS),
            ],
            environment: vec![env("PASSWORD_FILE", &secret_path)],
            secrets: vec![layout::SECRET_NAME.to_string()],
        };

        let db = Service {
            image: format!("{}:{}", images.postgres, params.postgres_version()),
            depends_on: Vec::new(),
            ports: Vec::new(),
            volumes: vec![bind(layout::local_dir(layout::DB_DATA_DIR), container::POSTGRES_DATA)],
            environment: vec![
                env("POSTGRES_DB", params.postgres_db()),
                env("POSTGRES_PASSWORD_FILE", &secret_path),
                env("POSTGRES_USER", params.postgres_user()),
                env("PGDATA", container::PGDATA),
            ],
            secrets: vec![layout::SECRET_NAME.to_string()],
        };

        let mut services = BTreeMap::new();
        services.insert(WEB_SERVICE.to_string(), web);
        services.insert(DB_SERVICE.to_string(), db);

        let mut secrets = BTreeMap::new();
        secrets.insert(
            layout::SECRET_NAME.to_string(),
            SecretDefinition { file: layout::SECRET_FILE.to_string() },
        );

        Self { version: COMPOSE_VERSION.to_string(), services, secrets }
    }

    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }

    /// File backing the named secret, if declared.
    pub fn secret_file(&self, name: &str) -> Option<&str> {
        self.secrets.get(name).map(|secret| secret.file.as_str())
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Render the descriptor text for `params`.
pub fn render_descriptor(params: &DeploymentParameters, images: &Images) -> Result<String, AppError> {
    ComposeFile::from_parameters(params, images).to_yaml()
}
