//! Page shell composition.
//!
//! Every response is the same shell — header, menu, two content columns,
//! footer — with the routed body fragment in the main column and the
//! section's sidebar widgets in the other. Composition is total: a
//! NotFound body composes exactly like any other fragment.

use siafu_content::{ContentStore, Fragment, Section, SimulationRecord};

use crate::urls::{detail_href, section_href};

/// Menu entries, in display order. The tutorial and search sections are
/// reachable by link but deliberately absent from the menu.
const MENU: [(Section, &str); 6] = [
    (Section::Home, "Home"),
    (Section::Catalog, "Simulations"),
    (Section::Developers, "Developers"),
    (Section::Faq, "FAQ"),
    (Section::Download, "Download"),
    (Section::Contact, "Contact"),
];

/// Sidebar widgets for a section, in display order.
///
/// A pure function of `section`: the project-links and search-box
/// widgets appear everywhere, and the simulations widget joins them on
/// the home page only. A widget missing from the store is skipped rather
/// than failing the page.
pub fn sidebar_widgets(section: Section, store: &ContentStore) -> Vec<Fragment> {
    let mut widgets: Vec<Fragment> = ["project-links", "search-box"]
        .into_iter()
        .filter_map(|name| store.widget(name).cloned())
        .collect();

    if section == Section::Home {
        widgets.push(render_catalog_widget(store.records()));
    }

    widgets
}

/// Renders the "simulations" sidebar widget: one link per record, in
/// store order.
pub fn render_catalog_widget(records: &[SimulationRecord]) -> Fragment {
    let mut html = String::from("<h2>Simulations</h2>\n<ul>\n");
    for record in records {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            detail_href(&record.slug),
            record.name
        ));
    }
    html.push_str("</ul>\n");
    Fragment::new(html)
}

/// Embeds a body fragment and sidebar widgets into the full page.
pub fn compose(body: &Fragment, widgets: &[Fragment]) -> String {
    let mut html = String::with_capacity(2048 + body.as_html().len());

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\" />\n\
         <title>Siafu: an Open Source Context Simulator</title>\n\
         <meta name=\"description\" content=\"Siafu project page\" />\n\
         <link href=\"/assets/default.css\" rel=\"stylesheet\" type=\"text/css\" />\n\
         </head>\n<body>\n",
    );

    html.push_str(
        "<div id=\"header\">\n<div id=\"logo\">\n\
         <h1>Siafu</h1>\n<h2>An Open Source<br/>Context Simulator</h2>\n\
         </div>\n<div id=\"menu\">\n<ul>\n",
    );
    for (i, (section, label)) in MENU.iter().enumerate() {
        let class = if i == 0 { " class=\"first\"" } else { "" };
        html.push_str(&format!(
            "<li{class}><a href=\"{}\">{label}</a></li>\n",
            section_href(*section)
        ));
    }
    html.push_str("</ul>\n</div>\n</div>\n");

    html.push_str("<div id=\"content\">\n<div id=\"colOne\">\n");
    html.push_str(body.as_html());
    html.push_str("</div>\n<div id=\"colTwo\">\n");
    for widget in widgets {
        html.push_str("<div class=\"widget\">\n");
        html.push_str(widget.as_html());
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n<div style=\"clear: both;\">&nbsp;</div>\n</div>\n");

    html.push_str(
        "<div id=\"footer\">\n\
         <p>(c) 2007 NEC Europe Ltd. Siafu is free software.</p>\n\
         </div>\n</body>\n</html>\n",
    );

    html
}
