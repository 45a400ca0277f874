//! Contributor representation

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ValidationError};

/// Globally unique contributor identifier (UUID v4).
pub type ContributorId = Uuid;

/// A named individual who may author zero or more works.
///
/// Contributors keep no registry of their own; they exist in a catalog
/// only as targets of work references. Two contributors with equal
/// names are distinct entities (identity is by id, never by name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    id: ContributorId,
    name: String,
}

impl Contributor {
    /// Create a new contributor. The name must be non-empty after trimming.
    pub(crate) fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyContributorName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    pub fn id(&self) -> ContributorId {
        self.id
    }

    /// The contributor's name. Immutable once constructed.
    pub fn name(&self) -> &str {
        &self.name
    }
}
