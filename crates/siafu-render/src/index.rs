//! Catalog index (gallery) rendering.

use siafu_content::{Fragment, SimulationRecord};

use crate::probe::{CELL_HEIGHT_PX, CELL_PADDING_PX, FALLBACK_PREVIEW_WIDTH_PX};
use crate::urls::{detail_href, preview_url, section_href};

/// Renders the clickable simulation gallery.
///
/// Entries are laid out row-major, two per row, in store order. Each cell
/// shows the record's preview image as its background with a transparent
/// spacer image stretching the cell to `preview width + padding` by the
/// fixed cell height; the whole cell links to the detail view by slug.
///
/// `widths` holds the pre-probed preview width per record (see
/// [`crate::probe::resolve_preview_widths`]); a missing entry falls back
/// to the default width. An empty store renders the bare grid container.
pub fn render_index(records: &[SimulationRecord], widths: &[u32]) -> Fragment {
    let mut html = String::new();
    html.push_str("<div class=\"simulation-list\">\n<table id=\"simulationlist\" class=\"center\">\n");

    for (i, record) in records.iter().enumerate() {
        if i == 0 {
            html.push_str("<tr>\n");
        } else if i % 2 == 0 {
            html.push_str("</tr>\n<tr>\n");
        }

        let width = widths.get(i).copied().unwrap_or(FALLBACK_PREVIEW_WIDTH_PX);
        html.push_str(&format!(
            "<td style=\"background:url({bg}) no-repeat;\">\n\
             <a href=\"{href}\"><img src=\"/assets/transparent.gif\" \
             width=\"{w}\" height=\"{h}\" alt=\"\" />{name}</a>\n</td>\n",
            bg = preview_url(&record.main_image.preview),
            href = detail_href(&record.slug),
            w = width + CELL_PADDING_PX,
            h = CELL_HEIGHT_PX,
            name = record.name,
        ));
    }

    if !records.is_empty() {
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</div>\n");

    html.push_str(&format!(
        "<p>If you would like to create your own simulation, check the \
         <a href=\"{tutorial}\">tutorial</a> and the \
         <a href=\"{developers}\">developer documents</a>. Also \
         <a href=\"{contact}\">tell us</a> about it if you'd like to display it here!</p>\n",
        tutorial = section_href(siafu_content::Section::Tutorial),
        developers = section_href(siafu_content::Section::Developers),
        contact = section_href(siafu_content::Section::Contact),
    ));

    Fragment::new(html)
}
