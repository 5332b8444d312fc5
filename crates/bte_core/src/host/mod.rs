//! Contract with the editing host's automation API.
//!
//! The host application owns the project, the media pool, and the render
//! queue; this crate only reads snapshots and issues render-control calls.
//! The API is stateful: render settings apply to the project's *current*
//! timeline, so [`EditHost::set_current_timeline`] is a required step before
//! any per-timeline settings call. That context switch is modeled as an
//! explicit trait method rather than hidden state.

pub mod discovery;
mod errors;

pub use errors::{HostError, HostResult};

#[cfg(test)]
pub(crate) mod mock;

use crate::models::{Folder, Timeline};

/// Automation API surface of the editing host.
///
/// Snapshot getters take `&self`; render-control calls mutate project-wide
/// state and take `&mut self`. Implementations bridge to the concrete host
/// session; the session is always passed explicitly, never reached through
/// a global.
pub trait EditHost {
    /// Names of the host's saved render presets.
    fn render_preset_names(&self) -> HostResult<Vec<String>>;

    /// Number of timelines in the current project.
    fn timeline_count(&self) -> HostResult<usize>;

    /// Timeline at `index`, 1-based to match the host API.
    fn timeline_by_index(&self, index: usize) -> HostResult<Timeline>;

    /// Snapshot of the media pool's root folder.
    fn media_root(&self) -> HostResult<Folder>;

    /// Load a named preset into the project's render configuration.
    ///
    /// Project-wide side effect: it changes the settings every subsequently
    /// configured timeline starts from.
    fn load_render_preset(&mut self, name: &str) -> HostResult<()>;

    /// Make the named timeline the project's current timeline.
    fn set_current_timeline(&mut self, timeline_name: &str) -> HostResult<()>;

    /// Apply render options to the current timeline's render configuration.
    fn set_render_settings(&mut self, settings: &RenderSettings) -> HostResult<()>;

    /// Enqueue a render job for the current timeline with its currently
    /// configured render settings.
    fn add_render_job(&mut self) -> HostResult<()>;

    /// Snapshot the project's flat timeline list, in index order.
    fn timelines(&self) -> HostResult<Vec<Timeline>> {
        let count = self.timeline_count()?;
        (1..=count).map(|i| self.timeline_by_index(i)).collect()
    }
}

/// Named render options recognized by the exporter.
///
/// The host accepts a mapping of option names; only the options this tool
/// actually sets are carried. `None` fields are left untouched on the host
/// side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// Render the whole timeline, clearing any partial in/out selection.
    pub select_all_frames: Option<bool>,
    /// Frame-accurate render start bound.
    pub mark_in: Option<i64>,
}

impl RenderSettings {
    /// Options that clear any partial frame selection.
    pub fn all_frames() -> Self {
        Self {
            select_all_frames: Some(true),
            ..Self::default()
        }
    }

    /// Options that set the render start bound to `frame`.
    pub fn with_mark_in(frame: i64) -> Self {
        Self {
            mark_in: Some(frame),
            ..Self::default()
        }
    }
}
