//! Selection pipeline: category gate followed by a case-insensitive text gate.
//!
//! `select` is pure. It owns no state, so the same criteria always yield
//! the same rows, in dataset order.

use std::collections::HashSet;

use serde::Serialize;

use crate::entities::Biosignature;

/// What the user picked: category labels and a free-text search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub categories: HashSet<String>,
    pub search_term: String,
}

impl SelectionCriteria {
    pub fn new<I, S>(categories: I, search_term: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            search_term: search_term.into(),
        }
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.categories.contains(category)
    }
}

/// Records that survived both gates, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    records: Vec<&'a Biosignature>,
}

/// A result row with its 1-based display number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayRow<'a> {
    pub number: usize,
    #[serde(flatten)]
    pub record: &'a Biosignature,
}

impl<'a> Selection<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Biosignature> + '_ {
        self.records.iter().copied()
    }

    pub fn records(&self) -> &[&'a Biosignature] {
        &self.records
    }

    /// Rows numbered from 1 for display.
    pub fn rows(&self) -> Vec<DisplayRow<'a>> {
        self.records
            .iter()
            .copied()
            .enumerate()
            .map(|(i, record)| DisplayRow { number: i + 1, record })
            .collect()
    }
}

/// Derive the displayed subset of `records` from `criteria`.
///
/// No categories selected means nothing is shown. An empty search term
/// keeps every record that passed the category gate.
pub fn select<'a>(records: &'a [Biosignature], criteria: &SelectionCriteria) -> Selection<'a> {
    if criteria.categories.is_empty() {
        return Selection::default();
    }

    let by_category: Vec<&Biosignature> = records
        .iter()
        .filter(|r| criteria.is_selected(r.category))
        .collect();

    if by_category.is_empty() {
        return Selection::default();
    }

    let needle = criteria.search_term.to_lowercase();
    let records = by_category
        .into_iter()
        .filter(|r| r.search_text().contains(&needle))
        .collect();

    Selection { records }
}
