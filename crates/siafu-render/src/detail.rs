//! Catalog detail rendering.

use siafu_content::{Fragment, SimulationRecord};

use crate::urls::{full_url, preview_url};

/// Renders one simulation's detail view.
///
/// Shows the main preview (linking to its full-size variant), the title,
/// the metadata list, the free-text description, and the screenshot
/// strip. The strip displays the authored `screenshots` last-to-first;
/// that reversal is the published layout contract, so don't "fix" it
/// without product sign-off. Each thumbnail links to its full-size image.
pub fn render_detail(record: &SimulationRecord) -> Fragment {
    let mut html = String::new();
    html.push_str("<table class=\"simulation\">\n<tr>\n");

    html.push_str(&format!(
        "<td class=\"simpreview\"><a href=\"{full}\"><img src=\"{preview}\" alt=\"{name}\" /></a></td>\n",
        full = full_url(&record.main_image.full),
        preview = preview_url(&record.main_image.preview),
        name = record.name,
    ));

    html.push_str("<td class=\"simdescription\">\n");
    html.push_str(&format!("<h1>{}</h1>\n<ul>\n", record.name));
    html.push_str(&format!(
        "<li><span>Type of scenario:</span> {}</li>\n",
        record.scenario_type
    ));
    html.push_str(&format!("<li><span>Agents:</span> {}</li>\n", record.agents));
    html.push_str(&format!(
        "<li><span>Highlights:</span> {}</li>\n",
        record.highlight
    ));
    html.push_str(&format!("<li><span>License:</span> {}</li>\n", record.license));
    html.push_str(&format!(
        "<li><span>Website:</span> <a class=\"external\" href=\"{}\">{}</a></li>\n",
        record.website.url, record.website.label
    ));
    html.push_str(&format!(
        "<li><span>Download link:</span> <a class=\"external\" href=\"{}\">here</a></li>\n",
        record.download_url
    ));
    if let Some(other) = &record.other_downloads_url {
        html.push_str(&format!(
            "<li><span>Further downloads:</span> <a class=\"external\" href=\"{other}\">here</a></li>\n"
        ));
    }
    html.push_str("</ul>\n");
    html.push_str(&record.description);
    html.push_str("\n</td>\n</tr>\n");

    html.push_str("<tr>\n<td>&nbsp;</td>\n<td>\n");
    html.push_str("<p class=\"strip-title\">Further screenshots:</p>\n");
    html.push_str("<div class=\"strip\">\n");
    for shot in record.screenshots.iter().rev() {
        html.push_str(&format!(
            "<a href=\"{full}\"><img class=\"screenshot\" src=\"{preview}\" alt=\"\" /></a>\n",
            full = full_url(&shot.full),
            preview = preview_url(&shot.preview),
        ));
    }
    html.push_str("</div>\n");
    html.push_str("<p class=\"strip-caption\">Click on the screenshots to enlarge.</p>\n");
    html.push_str("</td>\n</tr>\n</table>\n");

    Fragment::new(html)
}
