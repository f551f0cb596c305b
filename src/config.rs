// ============================================================================
// Unit Registry Configuration
// Declarative description of which unit tags a program accepts
// ============================================================================

use crate::error::{DimResult, Error};
use crate::units::{registry, UnitRegistry, Units};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`UnitRegistry`].
///
/// ```json
/// { "valid_units": ["m", "s"], "allow_unitless": false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitsConfig {
    /// Accepted tag names
    /// None means unrestricted (every tag, including no tag, is accepted)
    #[cfg_attr(feature = "serde", serde(default))]
    pub valid_units: Option<Vec<String>>,

    /// Whether values without a tag are accepted by a restricted registry
    /// Ignored when `valid_units` is None
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_unitless: bool,
}

impl UnitsConfig {
    /// Configuration accepting any tag
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Restricted configuration with no tags yet
    pub fn restricted() -> Self {
        Self {
            valid_units: Some(Vec::new()),
            allow_unitless: false,
        }
    }

    /// Builder method: accept a tag (restricts an unrestricted configuration)
    pub fn with_unit(mut self, name: impl Into<String>) -> Self {
        self.valid_units
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// Builder method: accept values without a tag
    pub fn with_unitless(mut self) -> Self {
        self.allow_unitless = true;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> DimResult<()> {
        let Some(names) = &self.valid_units else {
            return Ok(());
        };

        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            // Validate tag name
            if name.trim().is_empty() {
                return Err(Error::Config("unit names cannot be empty".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::Config(format!("duplicate unit name {:?}", name)));
            }
        }

        Ok(())
    }

    /// Build the registry this configuration describes
    pub fn into_registry(self) -> DimResult<UnitRegistry> {
        self.validate()?;

        let Some(names) = self.valid_units else {
            return Ok(UnitRegistry::unrestricted());
        };

        let registry = UnitRegistry::restricted_to(names);
        Ok(if self.allow_unitless {
            registry.with_unitless()
        } else {
            registry
        })
    }

    /// Build the registry and install it process-wide, returning the
    /// previously installed registry
    pub fn install(self) -> DimResult<UnitRegistry> {
        let registry = self.into_registry()?;
        Ok(registry::install(registry))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl UnitsConfig {
    /// The seven SI base units
    /// - m, kg, s, A, K, mol, cd
    /// - Unit-less values rejected
    pub fn si_base() -> Self {
        ["m", "kg", "s", "A", "K", "mol", "cd"]
            .into_iter()
            .fold(Self::restricted(), Self::with_unit)
    }

    /// Restricted to the given tags, plus unit-less values
    pub fn counting<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(Self::restricted(), Self::with_unit)
            .with_unitless()
    }
}

impl From<&UnitRegistry> for UnitsConfig {
    fn from(registry: &UnitRegistry) -> Self {
        let Some(members) = registry.members() else {
            return Self::unrestricted();
        };

        let mut allow_unitless = false;
        let mut names: Vec<String> = members
            .filter_map(|units: &Units| {
                if units.is_none() {
                    allow_unitless = true;
                }
                units.name().map(str::to_string)
            })
            .collect();
        names.sort();

        Self {
            valid_units: Some(names),
            allow_unitless,
        }
    }
}

// ============================================================================
// JSON Loading
// ============================================================================

#[cfg(feature = "serde")]
impl UnitsConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> DimResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        tracing::debug!(
            restricted = config.valid_units.is_some(),
            "loaded unit registry configuration"
        );
        Ok(config)
    }

    /// Render the configuration as JSON
    pub fn to_json(&self) -> DimResult<String> {
        serde_json::to_string(self).map_err(|err| Error::Config(err.to_string()))
    }
}
