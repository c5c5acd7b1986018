//! Routing tests for the site server.
//!
//! These exercise the full request pipeline below the HTTP layer:
//! parameter parsing → section dispatch → catalog sub-dispatch →
//! rendering → shell composition. Content comes from a tempdir fixture
//! shaped like the shipped `content/` directory.

use std::fs;
use std::path::Path;

use axum::http::StatusCode;
use tempfile::TempDir;

use siafu_content::{ContentStore, PageRequest, Section};
use siafu_site::respond;

const RECORDS: &str = r##"[
    {
        "slug": "leimen",
        "name": "Leimen",
        "scenario_type": "City",
        "agents": "Humans, cars",
        "license": "GPL",
        "highlight": "Large scale population",
        "website": { "label": "siafusimulator.sf.net", "url": "#" },
        "download_url": "http://example.net/Leimen.jar",
        "main_image": { "preview": "LeimenPreview.png", "full": "Leimen.png" },
        "screenshots": [
            { "preview": "s1-small.png", "full": "s1.png" },
            { "preview": "s2-small.png", "full": "s2.png" },
            { "preview": "s3-small.png", "full": "s3.png" }
        ],
        "description": "<p>A small city simulation.</p>"
    },
    {
        "slug": "valencia",
        "name": "Valencia",
        "scenario_type": "City",
        "agents": "Humans, cars, boars",
        "license": "GPL",
        "highlight": "Exemplifies a stepped demo script",
        "website": { "label": "siafusimulator.sf.net", "url": "#" },
        "download_url": "http://example.net/Valencia.jar",
        "main_image": { "preview": "ValenciaPreview.png", "full": "Valencia.png" },
        "screenshots": [],
        "description": "<p>Written for a demo.</p>"
    }
]"##;

fn write_content_dir(dir: &Path, records_json: &str) {
    fs::write(dir.join("simulations.json"), records_json).unwrap();
    let sections = dir.join("sections");
    fs::create_dir(&sections).unwrap();
    for section in Section::all() {
        if let Some(file) = section.fragment_file() {
            fs::write(sections.join(file), format!("<p>section {section}</p>")).unwrap();
        }
    }
    let widgets = dir.join("widgets");
    fs::create_dir(&widgets).unwrap();
    fs::write(widgets.join("project-links.html"), "<h2>Project links</h2>").unwrap();
    fs::write(widgets.join("search-box.html"), "<h2>Search</h2>").unwrap();
}

fn load_store(records_json: &str) -> (TempDir, ContentStore) {
    let dir = TempDir::new().expect("TempDir should create test directory");
    write_content_dir(dir.path(), records_json);
    let store = ContentStore::load(dir.path()).expect("fixture store should load");
    (dir, store)
}

fn page(store: &ContentStore, section: Option<&str>, sim: Option<&str>) -> siafu_site::RoutedPage {
    let request = PageRequest::from_params(section, sim);
    // No assets on disk: every index width takes the fallback path.
    respond(&request, store, &[])
}

/// Absent and empty `section` both render the home page.
#[test]
fn absent_and_empty_section_equal_home() {
    let (_dir, store) = load_store(RECORDS);
    let home = page(&store, Some("home"), None);
    let absent = page(&store, None, None);
    let empty = page(&store, Some(""), None);

    assert_eq!(home.status, StatusCode::OK);
    assert_eq!(absent.html, home.html);
    assert_eq!(empty.html, home.html);
    assert!(home.html.contains("<p>section home</p>"));
}

/// Every known static section routes to its own fragment with 200.
#[test]
fn known_sections_route_to_their_fragments() {
    let (_dir, store) = load_store(RECORDS);
    for name in ["tutorial", "faq", "developers", "contact", "download", "search"] {
        let routed = page(&store, Some(name), None);
        assert_eq!(routed.status, StatusCode::OK, "section {name}");
        assert!(
            routed.html.contains(&format!("<p>section {name}</p>")),
            "section {name} body missing"
        );
    }
}

/// Unknown sections degrade to the NotFound fragment with 404; the shell
/// still renders around it.
#[test]
fn unknown_section_renders_not_found_inside_the_shell() {
    let (_dir, store) = load_store(RECORDS);
    for bad in ["__anything_unknown__", "HOME", "catalog/extra", "<b>x</b>"] {
        let routed = page(&store, Some(bad), None);
        assert_eq!(routed.status, StatusCode::NOT_FOUND, "section {bad:?}");
        assert!(routed.html.contains("<p>section not-found</p>"));
        assert!(routed.html.contains("<h1>Siafu</h1>"), "shell missing for {bad:?}");
        assert!(routed.html.contains("id=\"footer\""));
    }
}

/// Catalog without a slug is the index state: one linked cell per record,
/// in store order.
#[test]
fn catalog_without_slug_renders_the_index() {
    let (_dir, store) = load_store(RECORDS);
    let routed = page(&store, Some("catalog"), None);

    assert_eq!(routed.status, StatusCode::OK);
    assert!(routed.html.contains("simulationlist"));
    let leimen = routed.html.find("sim=leimen").expect("leimen cell");
    let valencia = routed.html.find("sim=valencia").expect("valencia cell");
    assert!(leimen < valencia, "cells must follow store order");
}

/// Catalog with a known slug is the detail state for that record.
#[test]
fn catalog_with_known_slug_renders_the_detail() {
    let (_dir, store) = load_store(RECORDS);
    let routed = page(&store, Some("catalog"), Some("valencia"));

    assert_eq!(routed.status, StatusCode::OK);
    assert!(routed.html.contains("<h1>Valencia</h1>"));
    assert!(routed.html.contains("Exemplifies a stepped demo script"));
}

/// The detail strip displays screenshots last-to-first.
#[test]
fn detail_strip_is_reversed() {
    let (_dir, store) = load_store(RECORDS);
    let routed = page(&store, Some("catalog"), Some("leimen"));

    let s1 = routed.html.find("s1-small.png").unwrap();
    let s2 = routed.html.find("s2-small.png").unwrap();
    let s3 = routed.html.find("s3-small.png").unwrap();
    assert!(s3 < s2 && s2 < s1, "expected strip [s3, s2, s1]");
}

/// Unknown slugs and unknown sections produce the very same page body.
#[test]
fn unknown_slug_equals_unknown_section() {
    let (_dir, store) = load_store(RECORDS);
    let bad_slug = page(&store, Some("catalog"), Some("atlantis"));
    let bad_section = page(&store, Some("__anything_unknown__"), None);

    assert_eq!(bad_slug.status, StatusCode::NOT_FOUND);
    assert_eq!(bad_section.status, StatusCode::NOT_FOUND);
    assert_eq!(bad_slug.html, bad_section.html);
}

/// A slug outside the catalog section is ignored entirely.
#[test]
fn slug_is_only_meaningful_under_the_catalog() {
    let (_dir, store) = load_store(RECORDS);
    let with_slug = page(&store, Some("faq"), Some("leimen"));
    let without = page(&store, Some("faq"), None);

    assert_eq!(with_slug.status, StatusCode::OK);
    assert_eq!(with_slug.html, without.html);
}

/// An empty catalog still renders the index page.
#[test]
fn empty_store_renders_an_empty_grid() {
    let (_dir, store) = load_store("[]");
    let routed = page(&store, Some("catalog"), None);

    assert_eq!(routed.status, StatusCode::OK);
    assert!(routed.html.contains("simulationlist"));
    assert!(!routed.html.contains("sim="));
}

/// Probed preview widths flow into the index cells; records whose
/// preview is missing on disk get the fallback width instead.
#[test]
fn index_cells_are_sized_from_probed_assets() {
    use siafu_render::probe::{CELL_PADDING_PX, FALLBACK_PREVIEW_WIDTH_PX};

    let (_dir, store) = load_store(RECORDS);
    let assets = TempDir::new().unwrap();
    let preview_dir = assets.path().join("screenshots").join("preview");
    fs::create_dir_all(&preview_dir).unwrap();
    // Only Leimen's preview exists; Valencia's probe falls back.
    image::RgbaImage::new(240, 65)
        .save_with_format(preview_dir.join("LeimenPreview.png"), image::ImageFormat::Png)
        .expect("fixture PNG should save");

    let widths = siafu_render::resolve_preview_widths(store.records(), assets.path());
    let request = PageRequest::from_params(Some("catalog"), None);
    let routed = respond(&request, &store, &widths);

    assert!(routed.html.contains(&format!("width=\"{}\"", 240 + CELL_PADDING_PX)));
    assert!(routed.html.contains(&format!(
        "width=\"{}\"",
        FALLBACK_PREVIEW_WIDTH_PX + CELL_PADDING_PX
    )));
}

/// The home sidebar carries the simulations widget; the catalog sidebar
/// does not.
#[test]
fn sidebar_widgets_depend_on_the_section() {
    let (_dir, store) = load_store(RECORDS);
    let home = page(&store, None, None);
    let catalog = page(&store, Some("catalog"), None);

    assert!(home.html.contains("<h2>Simulations</h2>"));
    assert!(!catalog.html.contains("<h2>Simulations</h2>"));
    for html in [&home.html, &catalog.html] {
        assert!(html.contains("<h2>Project links</h2>"));
        assert!(html.contains("<h2>Search</h2>"));
    }
}
