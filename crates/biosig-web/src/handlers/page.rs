//! The biosignature table page and its live-update fragment.

use axum::{
    extract::State,
    http::Uri,
    response::Html,
};
use axum_extra::extract::Query;

use biosig_common::ApiError;

use crate::handlers::filter::FilterParams;
use crate::render::{row_views, PageView, ResultsView};
use crate::state::SharedState;

/// GET / - full page
pub async fn index(
    State(state): State<SharedState>,
    Query(params): Query<FilterParams>,
) -> Result<Html<String>, ApiError> {
    let criteria = params.into_criteria();
    let selection = state.catalog.select(&criteria);
    tracing::debug!(
        types = ?criteria.categories,
        query = %criteria.search_term,
        matched = selection.len(),
        "rendering page"
    );

    let view = PageView::new(&state.catalog, &criteria, &selection);
    Ok(Html(state.templates.render_page(&view)?))
}

/// GET /partials/results - table and detail panels only
pub async fn results_partial(
    State(state): State<SharedState>,
    Query(params): Query<FilterParams>,
) -> Result<Html<String>, ApiError> {
    let criteria = params.into_criteria();
    let selection = state.catalog.select(&criteria);
    tracing::debug!(
        types = ?criteria.categories,
        query = %criteria.search_term,
        matched = selection.len(),
        "rendering results fragment"
    );

    let view = ResultsView { rows: row_views(&selection) };
    Ok(Html(state.templates.render_results(&view)?))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
