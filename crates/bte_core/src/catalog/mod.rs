//! Pruned folder/timeline catalog presented for selection.
//!
//! The catalog is the exporter's own view of the project: the media pool
//! folder tree with every branch that contains no timelines pruned away, and
//! the project's timelines attached as leaves under the folders whose clips
//! reference them by name. It is rebuilt from scratch on every window open
//! and carries no identity beyond the current build.

mod builder;
mod selection;
mod types;

pub use builder::{build_catalog, ROOT_LABEL};
pub use types::{Catalog, CatalogNode, NodeId, NodeKind};
