//! Fragment renderers for the Siafu project website.
//!
//! The renderers are pure string builders: the only I/O in the rendering
//! pipeline, reading image dimensions for the index grid, happens once at
//! startup in [`probe`] and the results are passed in. Markup is served
//! by the site crate as `text/html`; no templating layer is involved.

pub mod detail;
pub mod index;
pub mod probe;
pub mod shell;
pub mod urls;

pub use detail::render_detail;
pub use index::render_index;
pub use probe::{probe_image, resolve_preview_widths, Dimensions, ProbeError};
pub use shell::{compose, sidebar_widgets};
