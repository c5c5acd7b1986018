//! Shared application state and request types for the site server.

use serde::Deserialize;
use std::sync::Arc;

use siafu_content::ContentStore;

/// Shared application state for the site server.
///
/// Holds the loaded content store and the preview widths resolved at
/// startup (one per record, in store order). Both are read-only for the
/// process lifetime, so handlers share plain `Arc`s with no locking.
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub index_widths: Arc<Vec<u32>>,
}

/// Clones `AppState` by cloning `Arc` pointers, not the underlying data.
impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            index_widths: Arc::clone(&self.index_widths),
        }
    }
}

impl AppState {
    pub fn new(store: ContentStore, index_widths: Vec<u32>) -> Self {
        Self {
            store: Arc::new(store),
            index_widths: Arc::new(index_widths),
        }
    }
}

/// Raw query parameters of the single page endpoint.
///
/// Both parameters are untrusted; they are parsed into a
/// [`siafu_content::PageRequest`] before any rendering happens.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub section: Option<String>,
    pub sim: Option<String>,
}
