//! Contract between the resolver and the parsed-file providers that consume it.

use std::path::PathBuf;

use crate::error::Result;
use crate::os::OsFamily;
use crate::resolver::Resolver;
use crate::variant::Variant;

/// A provider whose records live in one flat file per variant.
///
/// The provider names its variant and file; the default target is resolved
/// once per process through the shared resolver and reused by every
/// resource instance that does not set an explicit target.
pub trait DefaultTarget {
    const VARIANT: Variant;
    const FILE_NAME: &'static str;

    fn default_target(os_family: Option<&OsFamily>) -> Result<PathBuf> {
        Self::default_target_in(Resolver::global(), os_family)
    }

    fn default_target_in(resolver: &Resolver, os_family: Option<&OsFamily>) -> Result<PathBuf> {
        resolver.resolve(Self::VARIANT, Self::FILE_NAME, os_family)
    }

    /// The explicit target if one is configured, the default otherwise.
    fn target(explicit: Option<PathBuf>, os_family: Option<&OsFamily>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path),
            None => Self::default_target(os_family),
        }
    }
}
