//! Service identification.
//!
//! [`ServiceId`] uniquely identifies a service within the container.
//! Construction canonicalizes the name, so every case/separator spelling
//! of the same name produces the same key.

use std::fmt;

use bodega_support::ident::{pascalize, underscore};

/// Uniquely identifies a service in the container.
///
/// The canonical internal form is PascalCase; equality and hashing operate
/// on it, which makes service names case- and separator-insensitive.
///
/// # Examples
/// ```
/// use bodega_container::id::ServiceId;
///
/// let a = ServiceId::new("database_connection");
/// let b = ServiceId::new("DatabaseConnection");
/// let c = ServiceId::new("database.connection");
/// assert_eq!(a, b);
/// assert_eq!(a, c);
///
/// assert_eq!(a.as_pascal(), "DatabaseConnection");
/// assert_eq!(a.snake(), "database_connection");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ServiceId {
    pascal: String,
}

impl ServiceId {
    /// Creates a key from any case/separator form of a service name.
    pub fn new(name: &str) -> Self {
        Self { pascal: pascalize(name) }
    }

    /// Returns the canonical PascalCase form used for lookups.
    #[inline]
    pub fn as_pascal(&self) -> &str {
        &self.pascal
    }

    /// Returns the public-facing snake_case form used for enumeration
    /// and error messages.
    pub fn snake(&self) -> String {
        underscore(&self.pascal)
    }

    /// Returns true for the empty name, which never addresses a service.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pascal.is_empty()
    }
}

impl From<&str> for ServiceId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceId({})", self.pascal)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pascal)
    }
}
