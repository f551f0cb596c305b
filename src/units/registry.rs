// ============================================================================
// Unit Registry
// Which unit tags may be attached to a dimensioned value
// ============================================================================

use super::errors::UnitsError;
use super::tag::Units;
use parking_lot::RwLock;
use std::collections::HashSet;

/// Set of acceptable unit tags.
///
/// An unrestricted registry accepts every tag, including [`Units::NONE`].
/// A restricted registry accepts only its members; the "no unit" sentinel
/// must be added explicitly (see [`UnitRegistry::with_unitless`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitRegistry {
    /// None means unrestricted
    allowed: Option<HashSet<Units>>,
}

impl UnitRegistry {
    /// Registry accepting any tag.
    pub const fn unrestricted() -> Self {
        Self { allowed: None }
    }

    /// Restricted registry with no members yet.
    pub fn restricted() -> Self {
        Self {
            allowed: Some(HashSet::new()),
        }
    }

    /// Restricted registry accepting exactly `units`.
    pub fn restricted_to<I, U>(units: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<Units>,
    {
        Self {
            allowed: Some(units.into_iter().map(Into::into).collect()),
        }
    }

    /// Builder method: accept `units`.
    ///
    /// An unrestricted registry becomes restricted to this single tag.
    pub fn with_unit(mut self, units: impl Into<Units>) -> Self {
        self.allowed
            .get_or_insert_with(HashSet::new)
            .insert(units.into());
        self
    }

    /// Builder method: accept values without a unit tag.
    pub fn with_unitless(self) -> Self {
        self.with_unit(Units::NONE)
    }

    #[inline]
    pub fn is_restricted(&self) -> bool {
        self.allowed.is_some()
    }

    /// Members of a restricted registry, `None` when unrestricted.
    pub fn members(&self) -> Option<impl Iterator<Item = &Units>> {
        self.allowed.as_ref().map(|set| set.iter())
    }

    #[inline]
    pub fn allows(&self, units: &Units) -> bool {
        match &self.allowed {
            None => true,
            Some(set) => set.contains(units),
        }
    }

    /// Check `units` against this registry.
    ///
    /// # Errors
    /// Returns `InvalidUnits` carrying the rejected tag.
    pub fn validate(&self, units: &Units) -> Result<(), UnitsError> {
        if self.allows(units) {
            Ok(())
        } else {
            tracing::debug!(units = ?units, "rejected unit tag not present in registry");
            Err(UnitsError::InvalidUnits(units.clone()))
        }
    }
}

// ============================================================================
// Process-wide Registry
// ============================================================================
//
// Shared by every value built through `Dim::new` / `Dim::set_units`. Meant to
// be configured once at startup; `scoped` exists for tests and short-lived
// overrides.

static PROCESS_REGISTRY: RwLock<UnitRegistry> =
    parking_lot::const_rwlock(UnitRegistry::unrestricted());

/// Replace the process-wide registry, returning the previous one.
pub fn install(registry: UnitRegistry) -> UnitRegistry {
    tracing::info!(
        restricted = registry.is_restricted(),
        "installing process-wide unit registry"
    );
    std::mem::replace(&mut *PROCESS_REGISTRY.write(), registry)
}

/// Snapshot of the process-wide registry.
pub fn current() -> UnitRegistry {
    PROCESS_REGISTRY.read().clone()
}

/// Restore the unrestricted process-wide registry, returning the previous one.
pub fn reset() -> UnitRegistry {
    install(UnitRegistry::unrestricted())
}

/// Validate `units` against the process-wide registry.
pub(crate) fn validate_current(units: &Units) -> Result<(), UnitsError> {
    PROCESS_REGISTRY.read().validate(units)
}

/// Install `registry` until the returned guard is dropped.
#[must_use = "the previous registry is restored when the guard is dropped"]
pub fn scoped(registry: UnitRegistry) -> ScopedRegistry {
    ScopedRegistry {
        previous: Some(install(registry)),
    }
}

/// Guard returned by [`scoped`].
#[derive(Debug)]
pub struct ScopedRegistry {
    previous: Option<UnitRegistry>,
}

impl Drop for ScopedRegistry {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            install(previous);
        }
    }
}
