//! Axum handlers for the site's single page endpoint.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};

use siafu_content::PageRequest;

use crate::page::respond;
use crate::state::{AppState, PageQuery};

/// GET `/` - renders the page selected by `section` (and, for the
/// catalog, `sim`).
///
/// Known sections answer `200 OK`; unknown sections and unknown
/// simulation slugs answer `404 NOT FOUND` with the NotFound fragment
/// rendered inside the normal shell. A query string the extractor can't
/// parse counts as no parameters at all, so even that renders the home
/// page rather than an error.
pub async fn page_handler(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let request = PageRequest::from_params(query.section.as_deref(), query.sim.as_deref());
    let page = respond(&request, &state.store, &state.index_widths);
    (page.status, Html(page.html))
}
