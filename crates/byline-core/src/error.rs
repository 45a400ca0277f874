//! Error types for byline-core

use thiserror::Error;

use crate::contributor::ContributorId;
use crate::publication::PublicationId;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Raised by the three constructors when an attribute violates its rule.
///
/// Every other entry point is total: validated setters report rejection
/// through their `bool` return value, and queries signal absence with
/// `None` rather than an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Contributor `name` was empty after trimming
    #[error("contributor name must be a non-empty string")]
    EmptyContributorName,

    /// Publication `name` length fell outside the allowed range
    #[error("publication name must be between 2 and 16 characters, got {0}")]
    PublicationNameLength(usize),

    /// Publication `category` was empty after trimming
    #[error("publication category must be a non-empty string")]
    EmptyPublicationCategory,

    /// Work `title` was empty after trimming
    #[error("work title must be a non-empty string")]
    EmptyWorkTitle,

    /// Work `contributor` handle did not resolve in the catalog
    #[error("work contributor must be a registered contributor: {0}")]
    UnknownContributor(ContributorId),

    /// Work `publication` handle did not resolve in the catalog
    #[error("work publication must be a registered publication: {0}")]
    UnknownPublication(PublicationId),
}
