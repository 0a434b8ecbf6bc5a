//! The parameter set every artifact is rendered from.

use super::layout;
use super::version::OdooVersion;

pub const DEFAULT_EXTRA_ADDONS: &str = "/addons";
pub const DEFAULT_ENTERPRISE_ADDONS: &str = "/enterprise-addons";

/// A host-side addon folder, stored exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonPath(String);

impl AddonPath {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn extra_default() -> Self {
        Self::new(DEFAULT_EXTRA_ADDONS)
    }

    pub fn enterprise_default() -> Self {
        Self::new(DEFAULT_ENTERPRISE_ADDONS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Source of the bind mount in the compose file.
    pub fn host_mount(&self) -> String {
        layout::relative_mount(&self.0)
    }
}

/// Raw field values gathered before the parameter set is sealed.
#[derive(Debug, Clone)]
pub struct ParameterValues {
    pub odoo_version: OdooVersion,
    pub port: u16,
    pub postgres_version: String,
    pub postgres_db: String,
    pub postgres_user: String,
    pub postgres_password: String,
    pub admin_password: String,
    pub extra_addons: AddonPath,
    pub enterprise_addons: AddonPath,
}

/// Immutable deployment parameters.
///
/// Only constructible from a complete [`ParameterValues`], so no artifact can
/// be rendered from a half-collected set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParameters {
    odoo_version: OdooVersion,
    port: u16,
    postgres_version: String,
    postgres_db: String,
    postgres_user: String,
    postgres_password: String,
    admin_password: String,
    extra_addons: AddonPath,
    enterprise_addons: AddonPath,
}

impl DeploymentParameters {
    pub fn new(values: ParameterValues) -> Self {
        let ParameterValues {
            odoo_version,
            port,
            postgres_version,
            postgres_db,
            postgres_user,
            postgres_password,
            admin_password,
            extra_addons,
            enterprise_addons,
        } = values;
        Self {
            odoo_version,
            port,
            postgres_version,
            postgres_db,
            postgres_user,
            postgres_password,
            admin_password,
            extra_addons,
            enterprise_addons,
        }
    }

    pub fn odoo_version(&self) -> OdooVersion {
        self.odoo_version
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn postgres_version(&self) -> &str {
        &self.postgres_version
    }

    pub fn postgres_db(&self) -> &str {
        &self.postgres_db
    }

    pub fn postgres_user(&self) -> &str {
        &self.postgres_user
    }

    pub fn postgres_password(&self) -> &str {
        &self.postgres_password
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    pub fn extra_addons(&self) -> &AddonPath {
        &self.extra_addons
    }

    pub fn enterprise_addons(&self) -> &AddonPath {
        &self.enterprise_addons
    }
}
