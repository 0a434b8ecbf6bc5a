//! `config/odoo.conf` model.

use std::fmt;

use super::layout::container;

/// Options written to the `[options]` section of `odoo.conf`.
///
/// `addons_path` lists in-container locations only. The host folders are
/// mapped onto them by the compose file's volume mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OdooConfig {
    pub addons_path: Vec<String>,
    pub admin_passwd: String,
}

impl OdooConfig {
    pub fn new(admin_password: impl Into<String>) -> Self {
        Self {
            addons_path: vec![
                container::BASE_ADDONS.to_string(),
                container::EXTRA_ADDONS.to_string(),
                container::ENTERPRISE_ADDONS.to_string(),
            ],
            admin_passwd: admin_password.into(),
        }
    }

    /// Render as INI text. The password is written verbatim, unescaped.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OdooConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[options]")?;
        writeln!(f, "addons_path = {}", self.addons_path.join(","))?;
        writeln!(f, "admin_passwd = {}", self.admin_passwd)
    }
}
