//! Package Catalog
//!
//! Fixed, ordered collection of packages. Built once at startup and only
//! ever read afterwards.

use std::collections::HashSet;

use crate::error::{DomainError, DomainResult};
use crate::models::{PackageId, PackageRecord};

const BUNDLED_PACKAGES: &str = include_str!("../data/packages.json");

/// Immutable package catalog in display order
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    packages: Vec<PackageRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(packages: Vec<PackageRecord>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(packages.len());
        for pkg in &packages {
            if !seen.insert(pkg.id) {
                return Err(DomainError::DuplicatePackage(pkg.id));
            }
        }
        Ok(Self { packages })
    }

    /// Parse a JSON array of package records.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let packages: Vec<PackageRecord> = serde_json::from_str(json)?;
        Self::new(packages)
    }

    /// The catalog shipped with the site.
    pub fn bundled() -> DomainResult<Self> {
        Self::from_json(BUNDLED_PACKAGES)
    }

    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn get(&self, id: PackageId) -> Option<&PackageRecord> {
        self.packages.iter().find(|pkg| pkg.id == id)
    }

    pub fn contains(&self, id: PackageId) -> bool {
        self.get(id).is_some()
    }

    /// Packages whose title or summary contains `query`, ignoring case.
    ///
    /// The query is literal text: no trimming, no pattern syntax. An empty
    /// query matches every package. Catalog order is preserved.
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a PackageRecord> + 'a {
        let needle = query.to_lowercase();
        self.packages
            .iter()
            .filter(move |pkg| pkg.matches_lowercase(&needle))
    }

    /// Eager form of [`Catalog::filter`].
    pub fn search(&self, query: &str) -> Vec<&PackageRecord> {
        self.filter(query).collect()
    }
}
