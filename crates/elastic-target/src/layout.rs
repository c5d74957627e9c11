//! Base directory table, one entry per variant.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::os::OsFamily;
use crate::variant::Variant;

pub const SHIELD_DEFAULT_BASE: &str = "/usr/share/elasticsearch/shield";
pub const SHIELD_OPENBSD_BASE: &str = "/usr/local/elasticsearch/shield";
pub const XPACK_BASE: &str = "/etc/elasticsearch/x-pack";

/// Where a variant keeps its files, with at most one OS family exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutEntry {
    pub default_base:      PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_base:      Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_os_family: Option<OsFamily>,
}

impl LayoutEntry {
    pub fn new(default_base: impl Into<PathBuf>) -> Self {
        Self {
            default_base:      default_base.into(),
            special_base:      None,
            special_os_family: None,
        }
    }

    pub fn with_exception(mut self, family: OsFamily, base: impl Into<PathBuf>) -> Self {
        self.special_os_family = Some(family);
        self.special_base = Some(base.into());
        self
    }

    /// Base directory for the given OS family. Absent or unmatched families
    /// get the default base.
    pub fn base_for(&self, os_family: Option<&OsFamily>) -> &Path {
        match (&self.special_os_family, &self.special_base, os_family) {
            (Some(special), Some(base), Some(family)) if special == family => base,
            _ => &self.default_base,
        }
    }

    fn validate(&self, variant: Variant) -> Result<()> {
        if !self.default_base.has_root() {
            return Err(Error::Layout {
                variant,
                reason: "default_base must be absolute",
            });
        }

        match (&self.special_os_family, &self.special_base) {
            (Some(_), Some(base)) if !base.has_root() => Err(Error::Layout {
                variant,
                reason: "special_base must be absolute",
            }),
            (Some(_), None) => Err(Error::Layout {
                variant,
                reason: "special_os_family requires special_base",
            }),
            (None, Some(_)) => Err(Error::Layout {
                variant,
                reason: "special_base requires special_os_family",
            }),
            _ => Ok(()),
        }
    }
}

/// Layout for every known variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutTable {
    pub shield: LayoutEntry,
    #[serde(alias = "x-pack")]
    pub xpack:  LayoutEntry,
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self {
            shield: LayoutEntry::new(SHIELD_DEFAULT_BASE)
                .with_exception(OsFamily::OpenBSD, SHIELD_OPENBSD_BASE),
            xpack:  LayoutEntry::new(XPACK_BASE),
        }
    }
}

impl LayoutTable {
    pub fn entry(&self, variant: Variant) -> &LayoutEntry {
        match variant {
            Variant::Shield => &self.shield,
            Variant::Xpack => &self.xpack,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for variant in Variant::ALL {
            self.entry(variant).validate(variant)?;
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let table: LayoutTable = toml::from_str(s)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded layout table");
        Ok(table)
    }
}
