//! Materialize the directory layout and write the three artifacts.

use tracing::{debug, info};

use crate::domain::layout::{self, DIRECTORIES};
use crate::domain::{AppError, DeploymentParameters, Images, OdooConfig, render_descriptor};
use crate::ports::ArtifactStore;

/// Whether a write created a new file or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Replaced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub path: &'static str,
    pub status: WriteStatus,
}

/// Result of a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Layout folders that did not exist before this run.
    pub created_dirs: Vec<String>,
    /// Secret, config, and compose file, in write order.
    pub artifacts: Vec<WrittenArtifact>,
}

impl GenerateOutcome {
    pub fn replaced(&self) -> impl Iterator<Item = &WrittenArtifact> {
        self.artifacts.iter().filter(|artifact| artifact.status == WriteStatus::Replaced)
    }
}

/// Create each directory that is missing. Existing ones are left untouched.
pub fn ensure_directories<S: ArtifactStore>(
    store: &S,
    names: &[&str],
) -> Result<Vec<String>, AppError> {
    let mut created = Vec::new();
    for name in names {
        if store.is_dir(name) {
            continue;
        }
        store.create_dir_all(name)?;
        debug!(dir = %name, "created directory");
        created.push((*name).to_string());
    }
    Ok(created)
}

fn write_artifact<S: ArtifactStore>(
    store: &S,
    path: &'static str,
    content: &str,
) -> Result<WrittenArtifact, AppError> {
    let status = if store.file_exists(path) { WriteStatus::Replaced } else { WriteStatus::Created };
    store.write_file(path, content)?;

    match status {
        WriteStatus::Replaced => info!(path, "replaced existing artifact"),
        WriteStatus::Created => debug!(path, "wrote artifact"),
    }
    Ok(WrittenArtifact { path, status })
}

/// Write the database password to the file the compose secret points at.
pub fn write_secret<S: ArtifactStore>(
    store: &S,
    password: &str,
) -> Result<WrittenArtifact, AppError> {
    write_artifact(store, layout::SECRET_FILE, password)
}

pub fn write_app_config<S: ArtifactStore>(
    store: &S,
    config: &OdooConfig,
) -> Result<WrittenArtifact, AppError> {
    write_artifact(store, layout::CONFIG_FILE, &config.render())
}

pub fn write_descriptor<S: ArtifactStore>(
    store: &S,
    descriptor: &str,
) -> Result<WrittenArtifact, AppError> {
    write_artifact(store, layout::COMPOSE_FILE, descriptor)
}

/// Generate every artifact from one parameter set.
///
/// The descriptor is rendered before anything touches the disk, so a
/// rendering failure leaves the directory as it was.
pub fn execute<S: ArtifactStore>(
    store: &S,
    params: &DeploymentParameters,
    images: &Images,
) -> Result<GenerateOutcome, AppError> {
    let descriptor = render_descriptor(params, images)?;
    let config = OdooConfig::new(params.admin_password());

    let created_dirs = ensure_directories(store, &DIRECTORIES)?;
    let artifacts = vec![
        write_secret(store, params.postgres_password())?,
        write_app_config(store, &config)?,
        write_descriptor(store, &descriptor)?,
    ];

    Ok(GenerateOutcome { created_dirs, artifacts })
}
