// ============================================================================
// Unit Tags
// Opaque identifiers naming what a magnitude measures
// ============================================================================

use std::fmt;
use std::sync::Arc;

/// Unit tag attached to a [`Dim`](super::Dim).
///
/// A tag is an opaque, hashable name. It is never interpreted dimensionally:
/// `"m"` and `"s"` are just two different strings. [`Units::NONE`] is the
/// "no unit" sentinel.
///
/// Cloning is cheap (shared string), so every operation result can carry its
/// receiver's tag without reallocating.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Units(Option<Arc<str>>);

impl Units {
    /// The "no unit" sentinel.
    pub const NONE: Units = Units(None);

    /// Create a named unit tag.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(Some(name.into()))
    }

    /// Name of the tag, `None` for the sentinel.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Parse the representation produced by `Debug` (`'m'` or `None`).
    pub fn from_repr(repr: &str) -> Option<Self> {
        let repr = repr.trim();
        if repr == "None" {
            return Some(Self::NONE);
        }

        let inner = repr.strip_prefix('\'')?.strip_suffix('\'')?;
        let mut name = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => name.push(chars.next()?),
                '\'' => return None,
                _ => name.push(c),
            }
        }
        Some(Self::new(name))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Units {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Units {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<Option<&str>> for Units {
    fn from(name: Option<&str>) -> Self {
        name.map_or(Self::NONE, |name| Self::new(name))
    }
}

impl From<&Units> for Units {
    fn from(units: &Units) -> Self {
        units.clone()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

/// The bare name; the sentinel renders as `None`, so a unit-less
/// `Dim(7, NONE)` displays as `7None`.
impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("None"))
    }
}

/// Quoted, escaped name (`'m'`) or `None`; parsed back by [`Units::from_repr`].
impl fmt::Debug for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(name) = self.name() else {
            return f.write_str("None");
        };

        f.write_str("'")?;
        for c in name.chars() {
            if c == '\'' || c == '\\' {
                f.write_str("\\")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str("'")
    }
}
