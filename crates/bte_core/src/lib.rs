//! BTE Core - Backend logic for the Bulk Timeline Exporter
//!
//! This crate contains all business logic with zero UI dependencies: the
//! pruned folder/timeline catalog, selection normalization, per-timeline
//! render-settings computation, and batch submission against the editing
//! host's automation API. A UI layer drives it through
//! [`controller::ExportController`].

pub mod catalog;
pub mod config;
pub mod controller;
pub mod host;
pub mod logging;
pub mod models;
pub mod render;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
