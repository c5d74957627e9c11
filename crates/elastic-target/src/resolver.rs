//! Memoized default target resolution.
//!
//! Each variant owns one cache slot. The first successful resolution for a
//! variant fills its slot and every later call with that variant returns the
//! stored path as is, even when it passes a different file name or OS family.
//! Providers resolve one file per variant, so the slot is never expected to
//! hold more than one name.

use std::path::{Component, Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::layout::LayoutTable;
use crate::os::OsFamily;
use crate::variant::Variant;

static GLOBAL: Lazy<Resolver> = Lazy::new(Resolver::new);

#[derive(Debug)]
pub struct Resolver {
    layout: LayoutTable,
    slots:  [RwLock<Option<PathBuf>>; Variant::ALL.len()],
}

impl Default for Resolver {
    fn default() -> Self { Self::new() }
}

impl Resolver {
    /// Resolver over the built-in layout table.
    pub fn new() -> Self {
        Self {
            layout: LayoutTable::default(),
            slots:  Default::default(),
        }
    }

    pub fn with_layout(layout: LayoutTable) -> Result<Self> {
        layout.validate()?;
        Ok(Self {
            layout,
            slots: Default::default(),
        })
    }

    /// Process-wide resolver, shared by every provider.
    pub fn global() -> &'static Resolver { &GLOBAL }

    pub fn layout(&self) -> &LayoutTable { &self.layout }

    /// Default path for `variant`, computed on first use and cached after.
    pub fn resolve(
        &self,
        variant: Variant,
        val: &str,
        os_family: Option<&OsFamily>,
    ) -> Result<PathBuf> {
        let slot = &self.slots[variant.index()];

        if let Some(path) = slot.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            hit(variant, val, path);
            return Ok(path.clone());
        }

        let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have filled the slot between the two locks.
        if let Some(path) = guard.as_ref() {
            hit(variant, val, path);
            return Ok(path.clone());
        }

        let path = compute(&self.layout, variant, val, os_family)?;
        debug!(
            %variant,
            os_family = os_family.map(OsFamily::as_str),
            path = %path.display(),
            "resolved default target"
        );
        *guard = Some(path.clone());
        Ok(path)
    }

    /// Like [`Resolver::resolve`], taking the raw variant identifier and OS
    /// family fact.
    pub fn resolve_str(
        &self,
        variant: &str,
        val: &str,
        os_family: Option<&str>,
    ) -> Result<PathBuf> {
        let variant: Variant = variant.parse()?;
        let os_family = os_family.map(OsFamily::parse);
        self.resolve(variant, val, os_family.as_ref())
    }

    /// Cached path for `variant`, without computing one.
    pub fn cached(&self, variant: Variant) -> Option<PathBuf> {
        self.slots[variant.index()]
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget every cached path. Meant for test isolation.
    pub fn reset(&self) {
        for variant in Variant::ALL {
            self.reset_variant(variant);
        }
    }

    pub fn reset_variant(&self, variant: Variant) {
        let previous = self.slots[variant.index()]
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            debug!(%variant, "cleared default target");
        }
    }
}

fn hit(variant: Variant, val: &str, cached: &Path) {
    if cached.ends_with(val) {
        trace!(%variant, path = %cached.display(), "default target cache hit");
    } else {
        warn!(
            %variant,
            requested = val,
            path = %cached.display(),
            "default target already resolved for another file, returning cached path"
        );
    }
}

/// Uncached resolution against `layout`.
pub fn compute(
    layout: &LayoutTable,
    variant: Variant,
    val: &str,
    os_family: Option<&OsFamily>,
) -> Result<PathBuf> {
    validate_val(val)?;
    let base = layout.entry(variant).base_for(os_family);
    Ok(base.join(val))
}

fn validate_val(val: &str) -> Result<()> {
    if val.is_empty() {
        return Err(Error::invalid_argument(val, "must not be empty"));
    }
    if val.contains('\0') {
        return Err(Error::invalid_argument(val, "must not contain NUL"));
    }

    let path = Path::new(val);
    if path.has_root() {
        return Err(Error::invalid_argument(val, "must be relative"));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir | Component::Prefix(_))) {
        return Err(Error::invalid_argument(val, "must stay inside the base directory"));
    }

    Ok(())
}
