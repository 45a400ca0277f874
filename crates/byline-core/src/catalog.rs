//! The catalog: append-only registries and relationship queries
//!
//! A [`Catalog`] owns the canonical instance lists. The work and
//! publication registries are append-only and insertion-ordered; no
//! entity is ever removed. All cross-entity navigation goes through the
//! work registry — contributors and publications never reference each
//! other directly.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::contributor::{Contributor, ContributorId};
use crate::error::{Result, ValidationError};
use crate::publication::{Publication, PublicationId};
use crate::work::{Work, WorkId};

/// In-memory store for contributors, publications, and works.
#[derive(Debug, Default)]
pub struct Catalog {
    contributors: Vec<Contributor>,
    publications: Vec<Publication>,
    works: Vec<Work>,
    contributor_index: HashMap<ContributorId, usize>,
    publication_index: HashMap<PublicationId, usize>,
    work_index: HashMap<WorkId, usize>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    // === Construction (strict: rejects malformed input) ===

    /// Register a new contributor. The name must be non-empty after
    /// trimming.
    pub fn add_contributor(&mut self, name: impl Into<String>) -> Result<ContributorId> {
        let contributor = Contributor::new(name)?;
        let id = contributor.id();
        self.contributor_index.insert(id, self.contributors.len());
        self.contributors.push(contributor);
        debug!(contributor = %id, "contributor registered");
        Ok(id)
    }

    /// Register a new publication. The name must be 2 to 16 characters
    /// long and the category non-empty after trimming.
    pub fn add_publication(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<PublicationId> {
        let publication = Publication::new(name, category)?;
        let id = publication.id();
        self.publication_index.insert(id, self.publications.len());
        self.publications.push(publication);
        debug!(publication = %id, "publication registered");
        Ok(id)
    }

    /// Register a new work binding a contributor to a publication.
    /// Both handles must resolve in this catalog and the title must be
    /// non-empty after trimming. Nothing is registered on failure.
    pub fn add_work(
        &mut self,
        contributor: ContributorId,
        publication: PublicationId,
        title: impl Into<String>,
    ) -> Result<WorkId> {
        if !self.contributor_index.contains_key(&contributor) {
            return Err(ValidationError::UnknownContributor(contributor));
        }
        if !self.publication_index.contains_key(&publication) {
            return Err(ValidationError::UnknownPublication(publication));
        }
        let work = Work::new(contributor, publication, title)?;
        let id = work.id();
        self.work_index.insert(id, self.works.len());
        self.works.push(work);
        debug!(work = %id, %contributor, %publication, "work registered");
        Ok(id)
    }

    // === Lookup ===

    /// Get a contributor by id
    pub fn contributor(&self, id: ContributorId) -> Option<&Contributor> {
        self.contributor_index
            .get(&id)
            .and_then(|&idx| self.contributors.get(idx))
    }

    /// Get a publication by id
    pub fn publication(&self, id: PublicationId) -> Option<&Publication> {
        self.publication_index
            .get(&id)
            .and_then(|&idx| self.publications.get(idx))
    }

    /// Get a mutable publication by id, for the validated setters
    pub fn publication_mut(&mut self, id: PublicationId) -> Option<&mut Publication> {
        let idx = *self.publication_index.get(&id)?;
        self.publications.get_mut(idx)
    }

    /// Get a work by id
    pub fn work(&self, id: WorkId) -> Option<&Work> {
        self.work_index.get(&id).and_then(|&idx| self.works.get(idx))
    }

    /// Enumerate the publication registry in creation order
    pub fn publications(&self) -> impl Iterator<Item = &Publication> {
        self.publications.iter()
    }

    /// Enumerate the work registry in creation order
    pub fn works(&self) -> impl Iterator<Item = &Work> {
        self.works.iter()
    }

    /// Number of registered contributors
    pub fn contributor_count(&self) -> usize {
        self.contributors.len()
    }

    /// Number of registered publications
    pub fn publication_count(&self) -> usize {
        self.publications.len()
    }

    /// Number of registered works
    pub fn work_count(&self) -> usize {
        self.works.len()
    }

    /// True when no works have been registered
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    // === Reassignment (total: invalid handles are rejected, not raised) ===

    /// Rebind a work to another contributor. Returns whether the
    /// reassignment was accepted; an unresolved work or contributor
    /// handle leaves the work unchanged.
    pub fn set_work_contributor(&mut self, work: WorkId, contributor: ContributorId) -> bool {
        if !self.contributor_index.contains_key(&contributor) {
            debug!(%work, %contributor, "work contributor reassignment rejected");
            return false;
        }
        match self.work_index.get(&work).copied() {
            Some(idx) => {
                self.works[idx].set_contributor(contributor);
                true
            }
            None => {
                debug!(%work, "work contributor reassignment rejected: unknown work");
                false
            }
        }
    }

    /// Rebind a work to another publication. Returns whether the
    /// reassignment was accepted; an unresolved work or publication
    /// handle leaves the work unchanged.
    pub fn set_work_publication(&mut self, work: WorkId, publication: PublicationId) -> bool {
        if !self.publication_index.contains_key(&publication) {
            debug!(%work, %publication, "work publication reassignment rejected");
            return false;
        }
        match self.work_index.get(&work).copied() {
            Some(idx) => {
                self.works[idx].set_publication(publication);
                true
            }
            None => {
                debug!(%work, "work publication reassignment rejected: unknown work");
                false
            }
        }
    }

    // === Contributor queries ===

    /// All works by a contributor, in registry order
    pub fn works_by(&self, contributor: ContributorId) -> Vec<&Work> {
        self.works
            .iter()
            .filter(|w| w.contributor() == contributor)
            .collect()
    }

    /// Publications a contributor has works in, deduplicated, in order
    /// of first appearance
    pub fn publications_for(&self, contributor: ContributorId) -> Vec<&Publication> {
        let mut seen = HashSet::new();
        self.works_by(contributor)
            .into_iter()
            .filter(|w| seen.insert(w.publication()))
            .filter_map(|w| self.publication(w.publication()))
            .collect()
    }

    /// Categories of the publications a contributor has works in,
    /// deduplicated. `None` when the contributor has no works at all.
    pub fn topic_areas(&self, contributor: ContributorId) -> Option<Vec<String>> {
        let publications = self.publications_for(contributor);
        if publications.is_empty() {
            return None;
        }
        let mut seen = HashSet::new();
        Some(
            publications
                .into_iter()
                .filter(|p| seen.insert(p.category().to_string()))
                .map(|p| p.category().to_string())
                .collect(),
        )
    }

    // === Publication queries ===

    /// All works hosted by a publication, in registry order
    pub fn works_in(&self, publication: PublicationId) -> Vec<&Work> {
        self.works
            .iter()
            .filter(|w| w.publication() == publication)
            .collect()
    }

    /// Contributors with works in a publication, deduplicated, in
    /// order of first appearance
    pub fn contributors_for(&self, publication: PublicationId) -> Vec<&Contributor> {
        let mut seen = HashSet::new();
        self.works_in(publication)
            .into_iter()
            .filter(|w| seen.insert(w.contributor()))
            .filter_map(|w| self.contributor(w.contributor()))
            .collect()
    }

    /// Titles of a publication's works, in registry order, duplicates
    /// preserved. `None` when the publication has no works.
    pub fn work_titles(&self, publication: PublicationId) -> Option<Vec<&str>> {
        let titles: Vec<&str> = self
            .works_in(publication)
            .into_iter()
            .map(|w| w.title())
            .collect();
        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// Contributors with strictly more than 2 works in a publication.
    ///
    /// `None` when no contributor exceeds the threshold — which also
    /// covers a publication with no works at all; the two cases are
    /// deliberately not distinguished.
    pub fn frequent_contributors(&self, publication: PublicationId) -> Option<Vec<&Contributor>> {
        let mut counts: HashMap<ContributorId, usize> = HashMap::new();
        let mut order = Vec::new();
        for work in self.works_in(publication) {
            let count = counts.entry(work.contributor()).or_insert(0);
            if *count == 0 {
                order.push(work.contributor());
            }
            *count += 1;
        }
        let frequent: Vec<&Contributor> = order
            .into_iter()
            .filter(|id| counts[id] > 2)
            .filter_map(|id| self.contributor(id))
            .collect();
        if frequent.is_empty() {
            None
        } else {
            Some(frequent)
        }
    }

    // === Global aggregates ===

    /// The publication hosting the most works. `None` when the work
    /// registry is empty; ties go to the earliest-registered
    /// publication.
    pub fn top_publisher(&self) -> Option<&Publication> {
        if self.works.is_empty() {
            return None;
        }
        let mut best: Option<(&Publication, usize)> = None;
        for publication in &self.publications {
            let count = self.works_in(publication.id()).len();
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((publication, count)),
            }
        }
        best.map(|(publication, _)| publication)
    }
}
