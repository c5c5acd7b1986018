//! Core site types.
//!
//! These types are the boundary between the untrusted request surface and
//! the rendering code: query parameters are parsed into a [`PageRequest`]
//! exactly once, and everything past that point works with the
//! [`Section`] sum type instead of raw strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level content category selected by the router.
///
/// Dispatch is an exhaustive match over this enum; "unknown section" is
/// the explicit [`Section::NotFound`] state rather than a silent
/// fallthrough. Parsing is total: any string maps to some variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Catalog,
    Tutorial,
    Faq,
    Developers,
    Contact,
    Download,
    Search,
    NotFound,
}

impl Section {
    /// Parses the `section` query parameter.
    ///
    /// An absent or empty parameter selects [`Section::Home`]; anything
    /// outside the known set degrades to [`Section::NotFound`]. No input
    /// can make this fail.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") => Self::Home,
            Some("home") => Self::Home,
            Some("catalog") => Self::Catalog,
            Some("tutorial") => Self::Tutorial,
            Some("faq") => Self::Faq,
            Some("developers") => Self::Developers,
            Some("contact") => Self::Contact,
            Some("download") => Self::Download,
            Some("search") => Self::Search,
            Some(_) => Self::NotFound,
        }
    }

    /// Canonical parameter value, as used in generated links.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::Tutorial => "tutorial",
            Self::Faq => "faq",
            Self::Developers => "developers",
            Self::Contact => "contact",
            Self::Download => "download",
            Self::Search => "search",
            Self::NotFound => "not-found",
        }
    }

    /// Fragment file under `sections/` backing this section, if it is
    /// static prose. The catalog is rendered from records instead.
    pub fn fragment_file(&self) -> Option<&'static str> {
        match self {
            Self::Catalog => None,
            Self::Home => Some("home.html"),
            Self::Tutorial => Some("tutorial.html"),
            Self::Faq => Some("faq.html"),
            Self::Developers => Some("developers.html"),
            Self::Contact => Some("contact.html"),
            Self::Download => Some("download.html"),
            Self::Search => Some("search.html"),
            Self::NotFound => Some("not-found.html"),
        }
    }

    /// Every section, including the distinguished `NotFound` state.
    pub fn all() -> [Section; 9] {
        [
            Self::Home,
            Self::Catalog,
            Self::Tutorial,
            Self::Faq,
            Self::Developers,
            Self::Contact,
            Self::Download,
            Self::Search,
            Self::NotFound,
        ]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One incoming page request, built from the two query parameters.
///
/// Ephemeral and never persisted. Constructing it at the HTTP boundary
/// keeps the renderers free of ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub section: Section,
    /// Slug of the requested simulation; only meaningful under
    /// [`Section::Catalog`], where its presence selects the detail view.
    pub sim_slug: Option<String>,
}

impl PageRequest {
    /// Builds a request from the raw `section` and `sim` parameters.
    pub fn from_params(section: Option<&str>, sim: Option<&str>) -> Self {
        Self {
            section: Section::from_param(section),
            sim_slug: sim.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }
}

/// A renderable unit of HTML embedded into the page shell.
///
/// Fragments compare by content so "the same NotFound fragment" is a
/// checkable identity, not a convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }

    pub fn into_html(self) -> String {
        self.0
    }
}

/// External link with display text, e.g. a project homepage.
///
/// `url` may be a placeholder (`"#"`) when the site has no separate
/// homepage; the renderer emits it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteLink {
    pub label: String,
    pub url: String,
}

/// Preview/full filename pair for one picture.
///
/// Files live under the conventional `screenshots/preview/` and
/// `screenshots/full/` asset paths; records only carry the filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePair {
    pub preview: String,
    pub full: String,
}

/// Metadata for one showcased simulation.
///
/// Records are authored in `simulations.json` and immutable for the
/// process lifetime. The slug is a permanent external link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub slug: String,
    pub name: String,
    pub scenario_type: String,
    pub agents: String,
    pub license: String,
    pub highlight: String,
    pub website: WebsiteLink,
    pub download_url: String,
    /// Link to the full file listing (e.g. a project files page), shown
    /// as an extra metadata row when present.
    #[serde(default)]
    pub other_downloads_url: Option<String>,
    pub main_image: ImagePair,
    /// Authored order. The detail view displays these last-to-first; see
    /// the detail renderer for the ordering contract.
    #[serde(default)]
    pub screenshots: Vec<ImagePair>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_parse_known_values() {
        assert_eq!(Section::from_param(Some("home")), Section::Home);
        assert_eq!(Section::from_param(Some("catalog")), Section::Catalog);
        assert_eq!(Section::from_param(Some("tutorial")), Section::Tutorial);
        assert_eq!(Section::from_param(Some("faq")), Section::Faq);
        assert_eq!(Section::from_param(Some("developers")), Section::Developers);
        assert_eq!(Section::from_param(Some("contact")), Section::Contact);
        assert_eq!(Section::from_param(Some("download")), Section::Download);
        assert_eq!(Section::from_param(Some("search")), Section::Search);
    }

    #[test]
    fn section_parse_absent_and_empty_mean_home() {
        assert_eq!(Section::from_param(None), Section::Home);
        assert_eq!(Section::from_param(Some("")), Section::Home);
    }

    #[test]
    fn section_parse_is_total_over_garbage() {
        assert_eq!(Section::from_param(Some("nope")), Section::NotFound);
        assert_eq!(Section::from_param(Some("HOME")), Section::NotFound);
        assert_eq!(
            Section::from_param(Some("<script>alert(1)</script>")),
            Section::NotFound
        );
        let long = "x".repeat(64 * 1024);
        assert_eq!(Section::from_param(Some(&long)), Section::NotFound);
    }

    #[test]
    fn page_request_drops_empty_slug() {
        let req = PageRequest::from_params(Some("catalog"), Some(""));
        assert_eq!(req.section, Section::Catalog);
        assert_eq!(req.sim_slug, None);

        let req = PageRequest::from_params(Some("catalog"), Some("leimen"));
        assert_eq!(req.sim_slug.as_deref(), Some("leimen"));
    }

    #[test]
    fn every_static_section_names_a_fragment_file() {
        for section in Section::all() {
            if section != Section::Catalog {
                assert!(section.fragment_file().is_some(), "{section} has no file");
            }
        }
        assert_eq!(Section::Catalog.fragment_file(), None);
    }

    #[test]
    fn record_deserializes_from_json() {
        let json = r##"{
            "slug": "leimen",
            "name": "Leimen",
            "scenario_type": "City",
            "agents": "Humans, cars",
            "license": "GPL",
            "highlight": "Large scale population",
            "website": { "label": "siafusimulator.sf.net", "url": "#" },
            "download_url": "http://downloads.sourceforge.net/siafusimulator/Leimen.jar",
            "main_image": { "preview": "LeimenPreview.png", "full": "Leimen.png" },
            "screenshots": [
                { "preview": "Leimen.png", "full": "Leimen.png" },
                { "preview": "Leimen-night.png", "full": "Leimen-night.png" }
            ],
            "description": "<p>A small city.</p>"
        }"##;
        let record: SimulationRecord = serde_json::from_str(json).expect("record should parse");
        assert_eq!(record.slug, "leimen");
        assert_eq!(record.screenshots.len(), 2);
        assert_eq!(record.other_downloads_url, None);
        assert_eq!(record.website.url, "#");
    }
}
