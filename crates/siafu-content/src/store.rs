//! Content store loading.
//!
//! A content directory supplies everything the site serves:
//!
//! - `simulations.json` — the ordered catalog records
//! - `sections/<name>.html` — one prose fragment per static section
//! - `widgets/<name>.html` — sidebar widget fragments
//!
//! Loading validates the catalog up front (unique, URL-safe slugs) so the
//! request path can treat the store as correct by construction. The store
//! is immutable after load; content changes require a redeploy.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ContentError, Result};
use crate::model::{Fragment, Section, SimulationRecord};

/// Immutable site content: catalog records plus static fragments.
///
/// Records keep their authored order, which is also the display order of
/// the catalog index. Requests share the store read-only, so no locking
/// is involved anywhere.
#[derive(Debug)]
pub struct ContentStore {
    records: Vec<SimulationRecord>,
    fragments: HashMap<Section, Fragment>,
    widgets: HashMap<String, Fragment>,
}

impl ContentStore {
    /// Loads the store from a content directory.
    ///
    /// Fails if the directory is missing, `simulations.json` doesn't
    /// parse, a slug is duplicated or not URL-safe, or any static section
    /// is missing its fragment file. These are deploy-time defects; the
    /// caller is expected to log and abort.
    pub fn load(content_dir: &Path) -> Result<Self> {
        if !content_dir.is_dir() {
            return Err(ContentError::ContentDirMissing(content_dir.to_path_buf()));
        }

        let records = load_records(&content_dir.join("simulations.json"))?;
        let fragments = load_section_fragments(&content_dir.join("sections"))?;
        let widgets = load_widgets(&content_dir.join("widgets"))?;

        info!(
            records = records.len(),
            widgets = widgets.len(),
            "content loaded from {}",
            content_dir.display()
        );

        Ok(Self {
            records,
            fragments,
            widgets,
        })
    }

    /// Catalog records in authored (display) order.
    pub fn records(&self) -> &[SimulationRecord] {
        &self.records
    }

    /// Resolves a slug to its record. Unknown slugs are a routine request
    /// outcome, not an error.
    pub fn find_record(&self, slug: &str) -> Option<&SimulationRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    /// Prose fragment for a static section. `None` only for
    /// [`Section::Catalog`], which is rendered from records.
    pub fn fragment(&self, section: Section) -> Option<&Fragment> {
        self.fragments.get(&section)
    }

    /// Sidebar widget fragment by name (file stem under `widgets/`).
    pub fn widget(&self, name: &str) -> Option<&Fragment> {
        self.widgets.get(name)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_records(path: &Path) -> Result<Vec<SimulationRecord>> {
    let raw = read_file(path)?;
    let records: Vec<SimulationRecord> =
        serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    for record in &records {
        if !is_url_safe_slug(&record.slug) {
            return Err(ContentError::InvalidSlug(record.slug.clone()));
        }
        if !seen.insert(record.slug.as_str()) {
            return Err(ContentError::DuplicateSlug(record.slug.clone()));
        }
        debug!(slug = %record.slug, screenshots = record.screenshots.len(), "record loaded");
    }

    Ok(records)
}

/// Slugs end up verbatim in link targets, so they are restricted to
/// characters that never need percent-encoding.
fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn load_section_fragments(sections_dir: &Path) -> Result<HashMap<Section, Fragment>> {
    let mut fragments = HashMap::new();
    for section in Section::all() {
        let Some(file) = section.fragment_file() else {
            continue;
        };
        let path = sections_dir.join(file);
        if !path.is_file() {
            return Err(ContentError::MissingFragment(section.to_string()));
        }
        fragments.insert(section, Fragment::new(read_file(&path)?));
    }
    Ok(fragments)
}

/// Widgets are optional content: every `.html` file in `widgets/` becomes
/// a fragment keyed by its file stem. A missing directory just means no
/// widgets.
fn load_widgets(widgets_dir: &Path) -> Result<HashMap<String, Fragment>> {
    let mut widgets = HashMap::new();
    if !widgets_dir.is_dir() {
        return Ok(widgets);
    }

    let entries = fs::read_dir(widgets_dir).map_err(|source| ContentError::Read {
        path: widgets_dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "html"))
        .collect();
    // Sorted for deterministic load logs across filesystems.
    paths.sort();

    for path in paths {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        widgets.insert(stem.to_string(), Fragment::new(read_file(&path)?));
    }

    Ok(widgets)
}
