//! byline-core: in-memory contributor/publication catalog
//!
//! Models the many-to-many relationship between contributors and
//! publications through a join entity, the work:
//! - Contributor: a named individual who authors works
//! - Publication: a named, categorized venue hosting works
//! - Work: binds exactly one contributor and one publication via a title
//! - Catalog: the explicit store owning the append-only, insertion-ordered
//!   registries and all relationship and aggregate queries
//!
//! Construction is strict (malformed input fails with [`ValidationError`]);
//! post-construction mutation is total (validated setters report rejection
//! through their return value); queries never fail and signal "not
//! applicable" with `None`, distinct from an empty result.

pub mod catalog;
pub mod contributor;
pub mod error;
pub mod publication;
pub mod work;

pub use catalog::Catalog;
pub use contributor::{Contributor, ContributorId};
pub use error::{Result, ValidationError};
pub use publication::{Publication, PublicationId};
pub use work::{Work, WorkId};
