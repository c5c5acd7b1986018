//! Link and asset URL conventions.
//!
//! Screenshots come in two variants per picture: a `preview` thumbnail
//! used in grids and a `full` enlargement used as the link target. Both
//! are served from the `/assets` mount; records only carry filenames.

use std::path::{Path, PathBuf};

pub const PREVIEW_URL_BASE: &str = "/assets/screenshots/preview";
pub const FULL_URL_BASE: &str = "/assets/screenshots/full";

/// URL of a preview (thumbnail) image.
pub fn preview_url(file: &str) -> String {
    format!("{PREVIEW_URL_BASE}/{file}")
}

/// URL of a full-size image.
pub fn full_url(file: &str) -> String {
    format!("{FULL_URL_BASE}/{file}")
}

/// On-disk location of a preview image, for dimension probing.
pub fn preview_disk_path(assets_dir: &Path, file: &str) -> PathBuf {
    assets_dir.join("screenshots").join("preview").join(file)
}

/// Page link to a section.
pub fn section_href(section: siafu_content::Section) -> String {
    format!("?section={section}")
}

/// Page link to one simulation's detail view.
pub fn detail_href(slug: &str) -> String {
    format!("?section=catalog&sim={slug}")
}
