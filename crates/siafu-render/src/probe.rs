//! Image dimension probing.
//!
//! Index cells are sized from the real dimensions of each preview image,
//! because source previews vary in width. Probing is the only I/O in the
//! rendering pipeline and is fallible by design: a missing or unreadable
//! asset degrades to a fixed default width instead of failing the page.
//! [`resolve_preview_widths`] runs once at startup; the renderers take
//! the resolved widths and stay free of I/O.

use std::path::Path;

use thiserror::Error;
use tracing::warn;

use siafu_content::SimulationRecord;

use crate::urls::preview_disk_path;

/// Horizontal padding added to a probed preview width for its index cell.
pub const CELL_PADDING_PX: u32 = 10;

/// Fixed height of every index cell.
pub const CELL_HEIGHT_PX: u32 = 65;

/// Width assumed for a preview whose dimensions cannot be determined.
pub const FALLBACK_PREVIEW_WIDTH_PX: u32 = 180;

/// Physical pixel dimensions of an image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Probing error types.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The asset file does not exist.
    #[error("image not found: {0}")]
    Missing(String),
    /// The asset exists but its header could not be decoded.
    #[error("unreadable image {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Reads the pixel dimensions of an image file.
///
/// Only the header is decoded, not the pixel data, so this is cheap
/// enough to run for every record at startup.
pub fn probe_image(path: &Path) -> Result<Dimensions, ProbeError> {
    if !path.is_file() {
        return Err(ProbeError::Missing(path.display().to_string()));
    }
    let (width, height) =
        image::image_dimensions(path).map_err(|source| ProbeError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Dimensions { width, height })
}

/// Resolves the preview width of every record's main image, in record
/// order.
///
/// Any probe failure is logged and replaced by
/// [`FALLBACK_PREVIEW_WIDTH_PX`]; a bad asset never prevents the index
/// from rendering.
pub fn resolve_preview_widths(records: &[SimulationRecord], assets_dir: &Path) -> Vec<u32> {
    records
        .iter()
        .map(|record| {
            let path = preview_disk_path(assets_dir, &record.main_image.preview);
            match probe_image(&path) {
                Ok(dims) => dims.width,
                Err(err) => {
                    warn!(slug = %record.slug, "preview probe failed, using fallback width: {err}");
                    FALLBACK_PREVIEW_WIDTH_PX
                }
            }
        })
        .collect()
}
