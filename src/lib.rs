//! odoogen: Generate a Docker Compose deployment for Odoo and PostgreSQL.
//!
//! An interactive run asks for the deployment parameters, creates the
//! directory layout, and writes three artifacts into the target directory:
//! the database password secret, `config/odoo.conf`, and
//! `docker-compose.yaml`. It can then start the services with
//! `docker compose up -d`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{DeployOptions, DeploySummary, deploy_at, render_at};
pub use app::commands::generate::{GenerateOutcome, WriteStatus, WrittenArtifact};
pub use app::commands::launch::LaunchOutcome;
pub use domain::{AppError, DefaultOverrides, DeploymentParameters, OdooVersion};
