//! Query-string filter shared by the page, fragment and API routes.

use serde::Deserialize;

use biosig_catalog::SelectionCriteria;

/// `?type=Chemical&type=Isotopic&q=mars`
#[derive(Debug, Deserialize, Default)]
pub struct FilterParams {
    #[serde(default, rename = "type")]
    pub types: Vec<String>,
    #[serde(default)]
    pub q: String,
}

impl FilterParams {
    pub fn into_criteria(self) -> SelectionCriteria {
        SelectionCriteria::new(self.types, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_select_nothing() {
        let criteria = FilterParams::default().into_criteria();
        assert!(criteria.categories.is_empty());
        assert_eq!(criteria.search_term, "");
    }

    #[test]
    fn test_duplicate_types_collapse() {
        let params = FilterParams {
            types: vec!["Chemical".into(), "Chemical".into(), "Organic".into()],
            q: "Mars".into(),
        };
        let criteria = params.into_criteria();
        assert_eq!(criteria.categories.len(), 2);
        assert!(criteria.is_selected("Organic"));
        assert_eq!(criteria.search_term, "Mars");
    }
}
