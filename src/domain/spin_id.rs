//! Type-safe spin identifier.
//!
//! [`SpinId`] is a newtype wrapper around [`uuid::Uuid`] (v4) providing
//! type safety so that spin identifiers cannot be confused with other UUIDs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for one wheel spin.
///
/// Wraps a UUID v4. Generated when a spin is planned and immutable for the
/// lifetime of that spin. Used to correlate the spin response, the lifecycle
/// events on the bus, and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpinId(uuid::Uuid);

impl SpinId {
    /// Creates a new random `SpinId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `SpinId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for SpinId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for SpinId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<SpinId> for uuid::Uuid {
    fn from(id: SpinId) -> Self {
        id.0
    }
}
