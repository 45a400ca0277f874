//! Publication representation

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, ValidationError};

/// Globally unique publication identifier (UUID v4).
pub type PublicationId = Uuid;

/// Minimum publication name length, in characters.
pub const NAME_MIN_LEN: usize = 2;
/// Maximum publication name length, in characters.
pub const NAME_MAX_LEN: usize = 16;

/// A named, categorized venue that hosts zero or more works.
///
/// Both fields are mutable, but only through the validated setters:
/// an assignment that fails validation is rejected (the setter returns
/// `false`) and the prior value is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    id: PublicationId,
    name: String,
    category: String,
}

fn name_is_valid(name: &str) -> bool {
    let len = name.chars().count();
    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len)
}

fn category_is_valid(category: &str) -> bool {
    !category.trim().is_empty()
}

impl Publication {
    /// Create a new publication. The name must be 2 to 16 characters
    /// long and the category non-empty after trimming.
    pub(crate) fn new(name: impl Into<String>, category: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let category = category.into();
        if !name_is_valid(&name) {
            return Err(ValidationError::PublicationNameLength(name.chars().count()));
        }
        if !category_is_valid(&category) {
            return Err(ValidationError::EmptyPublicationCategory);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category,
        })
    }

    pub fn id(&self) -> PublicationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Rename the publication. Returns whether the new name was
    /// accepted; a name outside [2, 16] characters leaves the current
    /// name in place.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if !name_is_valid(&name) {
            debug!(publication = %self.id, rejected = %name, "publication rename rejected");
            return false;
        }
        self.name = name;
        true
    }

    /// Recategorize the publication. Returns whether the new category
    /// was accepted; an empty-after-trim category leaves the current
    /// category in place.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if !category_is_valid(&category) {
            debug!(publication = %self.id, "publication recategorization rejected");
            return false;
        }
        self.category = category;
        true
    }
}
