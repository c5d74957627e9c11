//! Default on-disk locations of Elasticsearch security plugin files.
//!
//! Both the legacy Shield plugin and X-Pack keep their flat-file realms and
//! role definitions under a fixed base directory. [`Resolver`] picks that
//! directory from the plugin [`Variant`] and the host [`OsFamily`] and
//! remembers the result for the rest of the process.

pub use error::{Error, Result};
pub use layout::{LayoutEntry, LayoutTable};
pub use os::OsFamily;
pub use resolver::{Resolver, compute};
pub use target::DefaultTarget;
pub use variant::Variant;

mod error;
pub mod layout;
pub mod os;
pub mod resolver;
pub mod target;
pub mod variant;

use std::path::PathBuf;

/// Resolve through the process-wide resolver.
pub fn resolve(variant: Variant, val: &str, os_family: Option<&OsFamily>) -> Result<PathBuf> {
    Resolver::global().resolve(variant, val, os_family)
}

pub fn resolve_str(variant: &str, val: &str, os_family: Option<&str>) -> Result<PathBuf> {
    Resolver::global().resolve_str(variant, val, os_family)
}

/// Default path of a Shield file.
pub fn shield_config(val: &str, os_family: Option<&OsFamily>) -> Result<PathBuf> {
    resolve(Variant::Shield, val, os_family)
}

/// Default path of an X-Pack file.
pub fn xpack_config(val: &str, os_family: Option<&OsFamily>) -> Result<PathBuf> {
    resolve(Variant::Xpack, val, os_family)
}

/// Clear the process-wide cache.
pub fn reset() { Resolver::global().reset() }
