//! Content model and store for the Siafu project website.
//!
//! The site is data-driven: an ordered set of [`SimulationRecord`]s feeds
//! the catalog views, and every static page (home, tutorial, FAQ, ...) is
//! an opaque [`Fragment`] of prose loaded from the content directory.
//! Everything in this crate is immutable once [`ContentStore::load`]
//! returns; catalog changes require a redeploy.

pub mod error;
pub mod model;
pub mod store;

pub use error::ContentError;
pub use model::{Fragment, ImagePair, PageRequest, Section, SimulationRecord, WebsiteLink};
pub use store::ContentStore;
