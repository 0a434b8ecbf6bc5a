//! Fixed on-disk layout and in-container paths shared by every artifact.
//!
//! The descriptor, the secret file, and `odoo.conf` all reference each other
//! through these constants, so they live in one place.

/// Folders that must exist in the working directory before anything is written.
pub const DIRECTORIES: [&str; 6] =
    ["odoo-db-data", "odoo-web-data", "config", "addons", "enterprise-addons", "odoo-logs"];

/// Secret name declared in the descriptor and the file backing it.
pub const SECRET_NAME: &str = "postgresql_password";
pub const SECRET_FILE: &str = "postgresql_password";

pub const CONFIG_DIR: &str = "config";
pub const CONFIG_FILE: &str = "config/odoo.conf";
pub const COMPOSE_FILE: &str = "docker-compose.yaml";
pub const SETTINGS_FILE: &str = "odoogen.toml";

pub const WEB_DATA_DIR: &str = "odoo-web-data";
pub const DB_DATA_DIR: &str = "odoo-db-data";

/// Port Odoo listens on inside its container.
pub const CONTAINER_PORT: u16 = 8069;

pub mod container {
    pub const ODOO_DATA: &str = "/var/lib/odoo";
    pub const ODOO_CONFIG: &str = "/etc/odoo";
    pub const BASE_ADDONS: &str = "/usr/lib/python3/dist-packages/odoo/addons";
    pub const EXTRA_ADDONS: &str = "/mnt/extra-addons";
    pub const ENTERPRISE_ADDONS: &str = "/mnt/enterprise-addons";
    pub const POSTGRES_DATA: &str = "/var/lib/postgresql/data";
    pub const PGDATA: &str = "/var/lib/postgresql/data/pgdata";
}

/// Where the orchestrator mounts a named secret inside a container.
pub fn secret_mount(name: &str) -> String {
    format!("/run/secrets/{}", name)
}

/// One of the fixed layout folders as a bind mount source.
pub fn local_dir(name: &str) -> String {
    format!("./{}", name)
}

/// Host side of a bind mount relative to the working directory.
///
/// The value is prefixed with `.` verbatim, so `/addons` becomes `./addons`
/// and `addons` becomes `.addons`.
pub fn relative_mount(segment: &str) -> String {
    format!(".{}", segment)
}
