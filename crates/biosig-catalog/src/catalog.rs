//! The in-memory catalog: records plus the category list derived from them.

use crate::dataset::BIOSIGNATURES;
use crate::entities::Biosignature;
use crate::selection::{select, Selection, SelectionCriteria};

/// Immutable record set shared by every request.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: &'static [Biosignature],
    categories: Vec<&'static str>,
}

impl Catalog {
    /// Build a catalog over `records`. Categories are derived here once,
    /// from the full set.
    pub fn new(records: &'static [Biosignature]) -> Self {
        let categories = distinct_categories(records);
        tracing::debug!(
            records = records.len(),
            categories = categories.len(),
            "catalog built"
        );
        Self { records, categories }
    }

    /// The compiled-in reference dataset.
    pub fn reference() -> Self {
        Self::new(BIOSIGNATURES)
    }

    pub fn records(&self) -> &'static [Biosignature] {
        self.records
    }

    /// Distinct category labels in order of first appearance.
    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run the selection pipeline over this catalog.
    pub fn select(&self, criteria: &SelectionCriteria) -> Selection<'static> {
        select(self.records, criteria)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

/// Distinct `category` values, first-seen order.
pub fn distinct_categories(records: &[Biosignature]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for record in records {
        if !out.contains(&record.category) {
            out.push(record.category);
        }
    }
    out
}
