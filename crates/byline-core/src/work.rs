//! Work representation — the join entity between contributors and publications

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contributor::ContributorId;
use crate::error::{Result, ValidationError};
use crate::publication::PublicationId;

/// Globally unique work identifier (UUID v4).
pub type WorkId = Uuid;

/// A titled work binding exactly one contributor to one publication.
///
/// The title is immutable. The contributor and publication handles are
/// reassignable, but only through the owning catalog, which refuses any
/// handle that does not resolve — so a registered work's references are
/// valid at every point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    id: WorkId,
    contributor: ContributorId,
    publication: PublicationId,
    title: String,
}

impl Work {
    /// Create a new work. The title must be non-empty after trimming;
    /// the catalog validates the handles before calling this.
    pub(crate) fn new(
        contributor: ContributorId,
        publication: PublicationId,
        title: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyWorkTitle);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            contributor,
            publication,
            title,
        })
    }

    pub fn id(&self) -> WorkId {
        self.id
    }

    pub fn contributor(&self) -> ContributorId {
        self.contributor
    }

    pub fn publication(&self) -> PublicationId {
        self.publication
    }

    /// The work's title. Immutable once constructed.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_contributor(&mut self, contributor: ContributorId) {
        self.contributor = contributor;
    }

    pub(crate) fn set_publication(&mut self, publication: PublicationId) {
        self.publication = publication;
    }
}
