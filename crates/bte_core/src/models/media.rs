//! Snapshots of host-managed media objects.
//!
//! The host owns the project, its media pool tree, and its timelines. The
//! exporter only ever works on read-only snapshots of them, captured once per
//! window open. Timelines are associated to folders by name, not by
//! structural ownership; see the catalog builder for how the match is made.

use std::collections::HashMap;

use super::enums::ClipKind;

/// Setting key under which the host reports a timeline's frame rate.
pub const FRAME_RATE_KEY: &str = "timelineFrameRate";

/// A media pool item inside a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    /// Clip name as shown in the media pool.
    pub name: String,
    /// Kind reported by the host's `Type` clip property.
    pub kind: ClipKind,
}

impl Clip {
    /// Create a new clip.
    pub fn new(name: impl Into<String>, kind: ClipKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a timeline-reference clip.
    pub fn timeline(name: impl Into<String>) -> Self {
        Self::new(name, ClipKind::Timeline)
    }
}

/// A node of the project's media pool folder tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    /// Folder name.
    pub name: String,
    /// Child folders, in the host's order.
    pub subfolders: Vec<Folder>,
    /// Directly contained clips, in the host's order.
    pub clips: Vec<Clip>,
}

impl Folder {
    /// Create an empty folder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subfolders: Vec::new(),
            clips: Vec::new(),
        }
    }

    /// Add a child folder.
    pub fn with_subfolder(mut self, folder: Folder) -> Self {
        self.subfolders.push(folder);
        self
    }

    /// Add a contained clip.
    pub fn with_clip(mut self, clip: Clip) -> Self {
        self.clips.push(clip);
        self
    }
}

/// A timeline (sequence) in the project's flat timeline list.
///
/// Timeline names are assumed unique within a project; the host does not
/// enforce this, and duplicate names make name-based lookups ambiguous.
/// All lookups in this crate resolve duplicates to the first timeline in
/// project-index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    /// Timeline name.
    pub name: String,
    /// String-keyed settings as reported by the host.
    settings: HashMap<String, String>,
}

impl Timeline {
    /// Create a timeline with no settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: HashMap::new(),
        }
    }

    /// Attach a host setting.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Attach the frame rate setting, as the host would report it.
    pub fn with_frame_rate(self, rate: impl Into<String>) -> Self {
        self.with_setting(FRAME_RATE_KEY, rate)
    }

    /// Look up a host setting by key.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }
}
