//! UI Components
//!
//! Leptos views composed by `App`.

mod stash_summary;
mod status_bar;

pub use stash_summary::StashSummary;
pub use status_bar::StatusBar;
