//! JSON endpoints over the catalog.

use axum::{extract::State, Json};
use axum_extra::extract::Query;
use serde::Serialize;

use biosig_catalog::DisplayRow;

use crate::handlers::filter::FilterParams;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct ApiTypes {
    pub types: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ApiSelection {
    pub selected_types: Vec<String>,
    pub query: String,
    pub total: usize,
    pub rows: Vec<DisplayRow<'static>>,
}

#[derive(Debug, Serialize)]
pub struct ApiHealth {
    pub status: &'static str,
    pub records: usize,
}

/// GET /api/types - every type in the catalog
pub async fn api_types(State(state): State<SharedState>) -> Json<ApiTypes> {
    Json(ApiTypes { types: state.catalog.categories().to_vec() })
}

/// GET /api/biosignatures - filtered rows, numbered from 1
pub async fn api_biosignatures(
    State(state): State<SharedState>,
    Query(params): Query<FilterParams>,
) -> Json<ApiSelection> {
    // Echo the selection in catalog order, not request order.
    let selected_types: Vec<String> = state
        .catalog
        .categories()
        .iter()
        .filter(|t| params.types.iter().any(|p| p == *t))
        .map(|t| t.to_string())
        .collect();

    let criteria = params.into_criteria();
    let selection = state.catalog.select(&criteria);
    tracing::debug!(
        types = ?criteria.categories,
        query = %criteria.search_term,
        matched = selection.len(),
        "api selection"
    );

    Json(ApiSelection {
        selected_types,
        query: criteria.search_term,
        total: selection.len(),
        rows: selection.rows(),
    })
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<ApiHealth> {
    Json(ApiHealth { status: "ok", records: state.catalog.len() })
}
