//! Request routing: one page request in, one composed page out.
//!
//! Dispatch is an exhaustive match over [`Section`]; the catalog section
//! further dispatches on the slug parameter to choose the index or the
//! detail view. Unknown sections and unknown slugs both resolve to the
//! single NotFound fragment, so every input renders a presentable page.

use axum::http::StatusCode;
use tracing::debug;

use siafu_content::{ContentStore, Fragment, PageRequest, Section};
use siafu_render::{compose, render_detail, render_index, sidebar_widgets};

/// A fully routed and composed page, ready to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedPage {
    pub status: StatusCode,
    pub html: String,
}

/// Routes a request to its body fragment and composes the shell around
/// it.
///
/// Total over all inputs and free of side effects: no request can
/// prevent the shell from rendering, and nothing here mutates shared
/// state. `widths` are the startup-probed preview widths for the index
/// grid.
pub fn respond(req: &PageRequest, store: &ContentStore, widths: &[u32]) -> RoutedPage {
    let (status, body) = body_for(req, store, widths);
    let widgets = sidebar_widgets(req.section, store);
    let html = compose(&body, &widgets);

    debug!(section = %req.section, status = status.as_u16(), "page routed");
    RoutedPage { status, html }
}

/// Selects the body fragment for a request.
///
/// The store is validated at load time, so every static section has a
/// fragment; the `or_not_found` arm is the total-function guarantee, not
/// an expected path.
fn body_for(req: &PageRequest, store: &ContentStore, widths: &[u32]) -> (StatusCode, Fragment) {
    match req.section {
        Section::Catalog => match req.sim_slug.as_deref() {
            None => (StatusCode::OK, render_index(store.records(), widths)),
            Some(slug) => match store.find_record(slug) {
                Some(record) => (StatusCode::OK, render_detail(record)),
                None => not_found(store),
            },
        },
        Section::NotFound => not_found(store),
        section => match store.fragment(section) {
            Some(fragment) => (StatusCode::OK, fragment.clone()),
            None => not_found(store),
        },
    }
}

/// The one NotFound body shared by unknown sections and unknown slugs.
fn not_found(store: &ContentStore) -> (StatusCode, Fragment) {
    let fragment = store
        .fragment(Section::NotFound)
        .cloned()
        .unwrap_or_else(|| Fragment::new("<h1>Not found</h1>"));
    (StatusCode::NOT_FOUND, fragment)
}
