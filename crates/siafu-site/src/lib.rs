//! Siafu site library - exports modules for testing.

pub mod handlers;
pub mod page;
pub mod state;

// Re-export for convenience
pub use page::{respond, RoutedPage};
pub use state::AppState;
