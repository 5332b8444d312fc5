//! Data models for the bulk timeline exporter.
//!
//! This module contains the value types shared across the application:
//! - Enums for clip kinds and render preset choices
//! - Snapshots of host-managed media objects (folders, clips, timelines)

mod enums;
mod media;

// Re-export all public types
pub use enums::{ClipKind, RenderPreset};
pub use media::{Clip, Folder, Timeline, FRAME_RATE_KEY};
