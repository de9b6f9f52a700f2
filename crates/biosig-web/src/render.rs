//! HTML rendering with templates compiled into the binary.

use minijinja::Environment;
use serde::Serialize;

use biosig_catalog::{Catalog, DisplayRow, Selection, SelectionCriteria};
use biosig_common::Result;

pub const PAGE_TITLE: &str = "Space Biosignatures Reference";
pub const INTRO: &str = "A collection of biosignatures that may indicate extraterrestrial life.";

const INDEX_TEMPLATE: &str = "index.html";
const RESULTS_TEMPLATE: &str = "results.html";

/// A category checkbox in the sidebar.
#[derive(Debug, Serialize)]
pub struct TypeOption {
    pub label: &'static str,
    pub selected: bool,
}

/// One table row plus its detail panel.
#[derive(Debug, Serialize)]
pub struct RowView {
    pub number: usize,
    pub name: &'static str,
    pub category: &'static str,
    pub found_on: &'static str,
    pub missions: &'static str,
    pub description: &'static str,
    pub panel_title: String,
}

impl From<DisplayRow<'static>> for RowView {
    fn from(row: DisplayRow<'static>) -> Self {
        let r = row.record;
        Self {
            number: row.number,
            name: r.name,
            category: r.category,
            found_on: r.found_on,
            missions: r.missions,
            description: r.description,
            panel_title: r.panel_title(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub title: &'static str,
    pub intro: &'static str,
    pub type_options: Vec<TypeOption>,
    pub query: &'a str,
    pub rows: Vec<RowView>,
}

impl<'a> PageView<'a> {
    pub fn new(
        catalog: &Catalog,
        criteria: &'a SelectionCriteria,
        selection: &Selection<'static>,
    ) -> Self {
        let type_options = catalog
            .categories()
            .iter()
            .map(|&label| TypeOption { label, selected: criteria.is_selected(label) })
            .collect();
        Self {
            title: PAGE_TITLE,
            intro: INTRO,
            type_options,
            query: &criteria.search_term,
            rows: row_views(selection),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub rows: Vec<RowView>,
}

pub fn row_views(selection: &Selection<'static>) -> Vec<RowView> {
    selection.rows().into_iter().map(RowView::from).collect()
}

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        env.add_template(RESULTS_TEMPLATE, include_str!("../templates/results.html"))?;
        Ok(Self { env })
    }

    pub fn render_page(&self, view: &PageView<'_>) -> Result<String> {
        Ok(self.env.get_template(INDEX_TEMPLATE)?.render(view)?)
    }

    pub fn render_results(&self, view: &ResultsView) -> Result<String> {
        Ok(self.env.get_template(RESULTS_TEMPLATE)?.render(view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(categories: &[&str], term: &str) -> String {
        let catalog = Catalog::reference();
        let criteria = SelectionCriteria::new(categories.iter().copied(), term);
        let selection = catalog.select(&criteria);
        let templates = Templates::new().unwrap();
        templates
            .render_page(&PageView::new(&catalog, &criteria, &selection))
            .unwrap()
    }

    #[test]
    fn test_page_has_static_chrome() {
        let html = page(&[], "");
        assert!(html.contains("<title>Space Biosignatures Reference</title>"));
        assert!(html.contains(INTRO));
        assert!(html.contains("Filter Biosignatures"));
        assert!(html.contains("Select Type"));
        assert!(html.contains("Search Biosignatures"));
        assert!(html.contains("Interactive Biosignatures Table"));
        assert!(html.contains("Detailed Biosignature Descriptions"));
        assert!(html.contains("<strong>Data sources:</strong> NASA, ESA, published research articles."));
        assert!(html.contains("A project by PY Heng"));
    }

    #[test]
    fn test_page_without_selection_has_no_rows_or_panels() {
        let html = page(&[], "");
        assert!(!html.contains("<details"));
        assert!(!html.contains("class=\"row-number\""));
        assert!(!html.contains(" checked"));
        // every type is still offered
        for label in Catalog::reference().categories() {
            assert!(html.contains(&format!("value=\"{label}\"")));
        }
    }

    #[test]
    fn test_selected_types_are_checked() {
        let html = page(&["Organic"], "");
        assert!(html.contains("value=\"Organic\" checked"));
        assert!(!html.contains("value=\"Chemical\" checked"));
    }

    #[test]
    fn test_panels_and_numbering() {
        let html = page(&["Chemical"], "venus");
        assert!(html.contains("<summary>Phosphine (PH₃) (Chemical)</summary>"));
        assert!(html.contains("<td class=\"row-number\">1</td>"));
        assert!(!html.contains("<td class=\"row-number\">2</td>"));
        assert!(html.contains("<strong>Found On:</strong> Venus (Debated)"));
        assert!(html.contains("<strong>Missions:</strong> TBD"));
        assert!(html.contains(
            "<strong>Description:</strong> Possible indicator of anaerobic life; controversial detection."
        ));
    }

    #[test]
    fn test_search_term_is_escaped() {
        let html = page(&["Chemical"], "<script>");
        assert!(!html.contains("value=\"<script>\""));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_results_fragment_only() {
        let catalog = Catalog::reference();
        let criteria = SelectionCriteria::new(["Isotopic"], "");
        let view = ResultsView { rows: row_views(&catalog.select(&criteria)) };
        let html = Templates::new().unwrap().render_results(&view).unwrap();
        assert!(html.contains("Carbon Isotope Ratios (Isotopic)"));
        assert!(!html.contains("<html"));
        assert!(!html.contains("A project by PY Heng"));
    }
}
