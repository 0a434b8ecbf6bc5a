use std::fmt;

/// Odoo releases the generator knows how to deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OdooVersion {
    V13,
    V14,
    V15,
    V16,
    V17,
}

impl OdooVersion {
    /// All supported versions in menu order.
    pub const ALL: [OdooVersion; 5] = [
        OdooVersion::V13,
        OdooVersion::V14,
        OdooVersion::V15,
        OdooVersion::V16,
        OdooVersion::V17,
    ];

    /// Image tag published for this release.
    pub fn tag(&self) -> &'static str {
        match self {
            OdooVersion::V13 => "13.0",
            OdooVersion::V14 => "14",
            OdooVersion::V15 => "15",
            OdooVersion::V16 => "16",
            OdooVersion::V17 => "17",
        }
    }

    /// Parse an image tag; `13` is accepted for `13.0`.
    pub fn from_tag(tag: &str) -> Option<OdooVersion> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|version| {
            version.tag() == tag || version.tag().strip_suffix(".0") == Some(tag)
        })
    }
}

impl fmt::Display for OdooVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
